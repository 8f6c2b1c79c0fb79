//! app-assets - icon, favicon and slug helpers for the app catalog front-end.
//!
//! Every helper is a pure function of its inputs: a base path, the
//! read-only icon tables, and the value being resolved.

pub mod cli;
pub mod config;
pub mod error;
pub mod helpers;
pub mod icons;
pub mod models;
pub mod utils;

pub use config::AssetConfig;
pub use error::{AssetError, Result};
pub use helpers::AssetHelpers;
pub use icons::{alternative_icon, protocol_info, IconRegistry, ProtocolIcon, ProtocolInfo};
pub use models::App;
pub use utils::{app_slug, favicon_path, slice_text};

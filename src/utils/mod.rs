//! Stateless display helpers.
//!
//! - `text`: truncation for cards and list rows
//! - `slug`: app name to URL slug
//! - `favicon`: cached favicon paths for site URLs

mod favicon;
mod slug;
mod text;

pub use favicon::{favicon_path, FALLBACK_FAVICON};
pub use slug::app_slug;
pub use text::{slice_text, ELLIPSIS};

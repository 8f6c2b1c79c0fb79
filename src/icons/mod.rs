//! Protocol and alternative icon tables.
//!
//! Tables are loaded once (bundled, or from a JSON/TOML file) and are
//! read-only afterwards.

mod alternative;
mod protocol;
mod table;

use std::path::Path;

use serde::Deserialize;

use crate::error::{read_to_string, AssetError, Result};

pub use alternative::{alternative_icon, DEFAULT_ALTERNATIVE_ICON};
pub use protocol::{protocol_info, ProtocolIcon, ProtocolInfo};
pub use table::{normalize_key, IconTable};

use table::OrderedEntries;

/// Icon tables compiled into the crate.
const BUNDLED_ICONS: &str = include_str!("bundled.json");

/// On-disk shape of an icon table file.
#[derive(Debug, Default, Deserialize)]
struct IconDocument {
    #[serde(default)]
    protocols: OrderedEntries<ProtocolIcon>,
    #[serde(default)]
    alternatives: OrderedEntries<String>,
}

/// Protocol and alternative icon tables.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    protocols: IconTable<ProtocolIcon>,
    alternatives: IconTable<String>,
}

impl IconRegistry {
    pub fn new(protocols: IconTable<ProtocolIcon>, alternatives: IconTable<String>) -> Self {
        Self {
            protocols,
            alternatives,
        }
    }

    /// Tables shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_ICONS)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: IconDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(doc))
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let doc: IconDocument = toml::from_str(source)?;
        Ok(Self::from_document(doc))
    }

    /// Load tables from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let registry = match ext.as_deref() {
            Some("json") => Self::from_json_str(&read_to_string(path)?)?,
            Some("toml") => Self::from_toml_str(&read_to_string(path)?)?,
            _ => return Err(AssetError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(
            "Loaded {} protocol and {} alternative icons from {}",
            registry.protocols.len(),
            registry.alternatives.len(),
            path.display()
        );
        Ok(registry)
    }

    fn from_document(doc: IconDocument) -> Self {
        Self {
            protocols: IconTable::from_entries(doc.protocols.0),
            alternatives: IconTable::from_entries(doc.alternatives.0),
        }
    }

    pub fn protocols(&self) -> &IconTable<ProtocolIcon> {
        &self.protocols
    }

    pub fn alternatives(&self) -> &IconTable<String> {
        &self.alternatives
    }
}

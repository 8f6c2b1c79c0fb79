//! Catalog records consumed by the helpers.

use serde::{Deserialize, Serialize};

/// Partial application record.
///
/// Only `name` is read here; other catalog fields are ignored on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl App {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

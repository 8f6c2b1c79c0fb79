//! Protocol icon lookup.

use serde::{Deserialize, Serialize};

use super::IconRegistry;

/// Protocol icon metadata as stored in the icon table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolIcon {
    /// Icon path relative to the base path.
    pub src: String,
    /// Reference link for the protocol.
    pub url: String,
    /// Accessibility text.
    pub alt: String,
}

/// Resolved protocol icon, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolInfo {
    pub src: String,
    pub url: String,
    pub alt: String,
}

/// Resolve a protocol's icon, prefixing `src` with `base`.
///
/// Returns `None` for unknown protocols.
pub fn protocol_info(base: &str, registry: &IconRegistry, name: &str) -> Option<ProtocolInfo> {
    let Some(icon) = registry.protocols().get(name) else {
        tracing::debug!("No protocol icon for {:?}", name);
        return None;
    };

    Some(ProtocolInfo {
        src: format!("{}{}", base, icon.src),
        url: icon.url.clone(),
        alt: icon.alt.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconTable;

    fn registry() -> IconRegistry {
        IconRegistry::new(
            IconTable::from_entries([(
                "GitHub",
                ProtocolIcon {
                    src: "protocols/github.svg".to_string(),
                    url: "https://github.com".to_string(),
                    alt: "GitHub logo".to_string(),
                },
            )]),
            IconTable::default(),
        )
    }

    #[test]
    fn test_protocol_info_found() {
        let info = protocol_info("/base/", &registry(), "GitHub").unwrap();
        assert_eq!(info.src, "/base/protocols/github.svg");
        assert_eq!(info.url, "https://github.com");
        assert_eq!(info.alt, "GitHub logo");
    }

    #[test]
    fn test_protocol_info_case_insensitive() {
        let registry = registry();
        assert_eq!(
            protocol_info("/", &registry, "GitHub"),
            protocol_info("/", &registry, "github")
        );
        assert!(protocol_info("/", &registry, " GITHUB ").is_some());
    }

    #[test]
    fn test_protocol_info_exact_match_only() {
        let registry = registry();
        assert_eq!(protocol_info("/", &registry, "unknown-protocol-xyz"), None);
        assert_eq!(protocol_info("/", &registry, "git"), None);
        assert_eq!(protocol_info("/", &registry, "github.com"), None);
    }

    #[test]
    fn test_protocol_info_serializes() {
        let info = protocol_info("/", &registry(), "github").unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["src"], "/protocols/github.svg");
        assert_eq!(json["alt"], "GitHub logo");
    }
}

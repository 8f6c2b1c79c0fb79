//! Helper facade bound to a base path and icon registry.

use crate::config::AssetConfig;
use crate::error::Result;
use crate::icons::{self, IconRegistry, ProtocolInfo};
use crate::models::App;
use crate::utils;

/// The display helpers with their base path and icon tables bound.
#[derive(Debug, Clone)]
pub struct AssetHelpers {
    base: String,
    registry: IconRegistry,
}

impl AssetHelpers {
    /// Bind helpers to `base` as given. See [`AssetConfig::normalized_base`].
    pub fn new(base: impl Into<String>, registry: IconRegistry) -> Self {
        Self {
            base: base.into(),
            registry,
        }
    }

    /// Build from config, loading `icons_path` or the bundled tables.
    pub fn from_config(config: &AssetConfig) -> Result<Self> {
        let registry = match &config.icons_path {
            Some(path) => IconRegistry::load(path)?,
            None => IconRegistry::bundled()?,
        };
        Ok(Self::new(config.normalized_base(), registry))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn registry(&self) -> &IconRegistry {
        &self.registry
    }

    pub fn slice_text(&self, text: &str, length: usize) -> String {
        utils::slice_text(text, length)
    }

    pub fn protocol_info(&self, name: &str) -> Option<ProtocolInfo> {
        icons::protocol_info(&self.base, &self.registry, name)
    }

    pub fn alternative_icon(&self, name: &str) -> String {
        icons::alternative_icon(&self.base, &self.registry, name)
    }

    pub fn favicon_path(&self, url: &str) -> String {
        utils::favicon_path(&self.base, url)
    }

    pub fn app_slug(&self, app: &App) -> String {
        utils::app_slug(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let helpers = AssetHelpers::from_config(&AssetConfig::default()).unwrap();
        assert_eq!(helpers.base(), "/");
        assert_eq!(
            helpers.protocol_info("GitHub").map(|p| p.src),
            Some("/protocols/github.svg".to_string())
        );
        assert_eq!(
            helpers.alternative_icon("firefox"),
            "/alternatives/firefox.png"
        );
    }

    #[test]
    fn test_base_normalized_from_config() {
        let config = AssetConfig {
            base_url: "/catalog".to_string(),
            icons_path: None,
        };
        let helpers = AssetHelpers::from_config(&config).unwrap();
        assert_eq!(
            helpers.favicon_path("https://example.com/page"),
            "/catalog/favicons/example.com.png"
        );
        assert_eq!(helpers.favicon_path("not a url"), "/catalog/favicon.png");
    }

    #[test]
    fn test_repeated_calls_match() {
        let helpers = AssetHelpers::from_config(&AssetConfig::default()).unwrap();
        let app = App::named("Jitsi Meet");
        assert_eq!(helpers.app_slug(&app), helpers.app_slug(&app));
        assert_eq!(
            helpers.protocol_info("matrix"),
            helpers.protocol_info("matrix")
        );
        assert_eq!(
            helpers.alternative_icon("Jitsi Meet"),
            "/alternatives/jitsi-meet.png"
        );
        assert_eq!(helpers.slice_text("Thunderbird", 7), "Thunder...");
    }
}

//! Alternative icon lookup.

use super::IconRegistry;

/// Icon used for alternatives without a table entry, relative to the base path.
pub const DEFAULT_ALTERNATIVE_ICON: &str = "alternatives/default.png";

/// Resolve an alternative's icon path.
///
/// Unlike [`super::protocol_info`], a miss still yields a path: the default icon.
pub fn alternative_icon(base: &str, registry: &IconRegistry, name: &str) -> String {
    match registry.alternatives().get(name) {
        Some(path) => format!("{}{}", base, path),
        None => {
            tracing::debug!("No alternative icon for {:?}, using default", name);
            format!("{}{}", base, DEFAULT_ALTERNATIVE_ICON)
        }
    }
}

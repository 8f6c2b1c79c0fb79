//! Slug derivation for app names.

use crate::models::App;

/// Derive the URL slug for an app.
///
/// Lowercases the name and keeps only `[a-z0-9]`; a missing name yields `""`.
pub fn app_slug(app: &App) -> String {
    app.name
        .as_deref()
        .unwrap_or("")
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

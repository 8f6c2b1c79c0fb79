//! Favicon path resolution.

use url::Url;

/// Path of the generic favicon, relative to the base path.
pub const FALLBACK_FAVICON: &str = "favicon.png";

/// Resolve the cached favicon path for a site URL.
///
/// Unparseable URLs fall back to the generic `favicon.png`. URLs without a
/// host (e.g. `mailto:`) resolve to `favicons/.png`.
pub fn favicon_path(base: &str, url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("").to_lowercase();
            format!("{}favicons/{}.png", base, host)
        }
        Err(e) => {
            tracing::trace!("Using fallback favicon for {:?}: {}", url, e);
            format!("{}{}", base, FALLBACK_FAVICON)
        }
    }
}

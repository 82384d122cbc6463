//! Boot-time configuration for the backend collection URL.
//!
//! # Design
//! - Resolve the URL once per boot; the app never persists it.
//! - Accept an optional build-time override and fall back to the local dev server.

/// Collection URL used when no override is supplied at build time.
pub const DEFAULT_COLLECTION_URL: &str = "http://localhost:3000/peliculas";

/// Pick the collection URL from an optional override, trimming trailing slashes.
///
/// Blank overrides are ignored so an empty variable in CI does not point the
/// UI at the page origin.
#[must_use]
pub fn resolve_collection_url(override_url: Option<&str>) -> String {
    override_url
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_COLLECTION_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Build the item URL (`{collection}/{id}`) for update and delete calls.
#[must_use]
pub fn item_url(collection_url: &str, id: impl std::fmt::Display) -> String {
    format!("{}/{id}", collection_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_COLLECTION_URL, item_url, resolve_collection_url};

    #[test]
    fn falls_back_to_default_without_override() {
        assert_eq!(resolve_collection_url(None), DEFAULT_COLLECTION_URL);
        assert_eq!(resolve_collection_url(Some("   ")), DEFAULT_COLLECTION_URL);
    }

    #[test]
    fn override_is_trimmed() {
        assert_eq!(
            resolve_collection_url(Some(" https://api.example/movies/ ")),
            "https://api.example/movies"
        );
    }

    #[test]
    fn item_url_appends_id_once() {
        assert_eq!(item_url("http://h/peliculas", 4), "http://h/peliculas/4");
        assert_eq!(item_url("http://h/peliculas/", 4), "http://h/peliculas/4");
    }
}

//! URL handling module
//!
//! This module resolves hrefs found in fetched pages into absolute URLs and
//! normalizes them so that the frontier deduplicates equivalent spellings.

mod normalize;
mod resolve;

// Re-export main functions
pub use normalize::normalize_url;
pub use resolve::resolve_link;

use url::Url;

/// Resolves a URL taken off the frontier into an absolute URL
///
/// Absolute URLs are returned as-is; relative ones (as a custom fetch
/// capability may publish) are joined onto `base_url`.
///
/// # Examples
///
/// ```
/// use listing_crawler::url::resolve_against;
/// use url::Url;
///
/// let base = Url::parse("https://www.example.com").unwrap();
/// let url = resolve_against(&base, "/flats?page=2").unwrap();
/// assert_eq!(url.as_str(), "https://www.example.com/flats?page=2");
/// ```
pub fn resolve_against(base_url: &Url, url: &str) -> Result<Url, ::url::ParseError> {
    match Url::parse(url) {
        Ok(absolute) => Ok(absolute),
        Err(::url::ParseError::RelativeUrlWithoutBase) => base_url.join(url),
        Err(e) => Err(e),
    }
}

/// Returns the origin of `url` as a base for relative links
pub fn origin_of(url: &Url) -> Url {
    let mut origin = url.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    origin
}

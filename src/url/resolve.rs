use crate::url::normalize::normalize_url;
use url::Url;

/// Resolves a link href against the page it was found on
///
/// Returns None if the link should be excluded:
/// - empty hrefs
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - fragment-only links (same page anchors)
/// - invalid URLs or non-HTTP(S) URLs after resolution
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    match normalize_url(absolute.as_str()) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::trace!("Dropping link {}: {}", href, e);
            None
        }
    }
}

use crate::UrlError;
use url::Url;

/// List of tracking query parameters to remove during normalization
const TRACKING_PARAMS: &[&str] = &["fbclid", "gclid", "mc_eid"];

/// Normalizes a discovered URL so that trivially different spellings of the
/// same page deduplicate to one frontier entry
///
/// # Normalization Steps
///
/// 1. Parse the URL; reject if malformed
/// 2. Reject schemes other than http and https
/// 3. Lowercase the host (done by the parser)
/// 4. Remove fragment (everything after #)
/// 5. Remove tracking query parameters, keeping the order of the rest
/// 6. Remove empty query string (trailing ?)
///
/// Paging parameters are left untouched: listing sites encode the page number
/// in the query, so two differently-ordered queries may be different pages.
///
/// # Examples
///
/// ```
/// use listing_crawler::url::normalize_url;
///
/// let url = normalize_url("https://WWW.EXAMPLE.COM/list?p=2&utm_source=x#top").unwrap();
/// assert_eq!(url.as_str(), "https://www.example.com/list?p=2");
/// ```
pub fn normalize_url(url_str: &str) -> Result<Url, UrlError> {
    let mut url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    url.set_fragment(None);

    if url.query().is_some() {
        let total = url.query_pairs().count();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !is_tracking_param(key))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        // Re-serializing changes the encoding, so the query is only rebuilt
        // when a parameter was actually dropped
        if kept.is_empty() {
            url.set_query(None);
        } else if kept.len() != total {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
    }

    Ok(url)
}

/// Checks if a query parameter is a tracking parameter
fn is_tracking_param(key: &str) -> bool {
    TRACKING_PARAMS.contains(&key) || key.starts_with("utm_")
}

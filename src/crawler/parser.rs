//! HTML parser for listing pages
//!
//! This module handles parsing fetched HTML to extract:
//! - Listing records from detail pages (price, district)
//! - Links to listing detail pages
//! - Links to the next results page

use crate::config::{ExtractionConfig, SelectorConfig};
use crate::districts::DistrictMatcher;
use crate::output::Listing;
use crate::url::resolve_link;
use crate::CrawlError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Everything extracted from one fetched page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// One listing per detail block found on the page
    pub listings: Vec<Listing>,

    /// Absolute URLs of listing detail pages
    pub detail_links: Vec<String>,

    /// Absolute URLs of following results pages
    pub next_links: Vec<String>,
}

impl ParsedPage {
    /// Detail links followed by next-page links, in discovery order
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.detail_links
            .iter()
            .chain(self.next_links.iter())
            .map(String::as_str)
    }
}

/// Compiled selectors plus the lookup data used to build listings
///
/// Parsing is synchronous; the `Html` document never outlives `parse`, so
/// the extractor can be shared across async tasks.
#[derive(Debug)]
pub struct PageExtractor {
    listing: Selector,
    price: Selector,
    description: Selector,
    detail_link: Selector,
    next_page: Selector,
    anchor: Selector,
    currency_suffix: String,
    unknown_district: String,
    districts: DistrictMatcher,
}

impl PageExtractor {
    /// Compiles the configured selectors
    pub fn new(
        selectors: &SelectorConfig,
        extraction: &ExtractionConfig,
        districts: DistrictMatcher,
    ) -> Result<Self, CrawlError> {
        Ok(Self {
            listing: compile(&selectors.listing)?,
            price: compile(&selectors.price)?,
            description: compile(&selectors.description)?,
            detail_link: compile(&selectors.detail_link)?,
            next_page: compile(&selectors.next_page)?,
            anchor: compile("a")?,
            currency_suffix: extraction.currency_suffix.clone(),
            unknown_district: extraction.unknown_district.clone(),
            districts,
        })
    }

    /// Parses a page fetched from `page_url`
    ///
    /// # Example
    ///
    /// ```
    /// use listing_crawler::config::{ExtractionConfig, SelectorConfig};
    /// use listing_crawler::crawler::PageExtractor;
    /// use listing_crawler::DistrictMatcher;
    /// use url::Url;
    ///
    /// let extractor = PageExtractor::new(
    ///     &SelectorConfig::default(),
    ///     &ExtractionConfig::default(),
    ///     DistrictMatcher::builtin(),
    /// )
    /// .unwrap();
    /// let html = r#"<div class="pagination"><span class="after"><a href="/p2">next</a></span></div>"#;
    /// let page = extractor.parse(html, &Url::parse("https://example.com/p1").unwrap());
    /// assert_eq!(page.next_links, vec!["https://example.com/p2".to_string()]);
    /// ```
    pub fn parse(&self, html: &str, page_url: &Url) -> ParsedPage {
        let document = Html::parse_document(html);

        let listings = document
            .select(&self.listing)
            .map(|block| self.extract_listing(block, page_url))
            .collect();

        ParsedPage {
            listings,
            detail_links: self.extract_links(&document, &self.detail_link, page_url),
            next_links: self.extract_links(&document, &self.next_page, page_url),
        }
    }

    /// Builds a listing from one detail block
    fn extract_listing(&self, block: ElementRef<'_>, page_url: &Url) -> Listing {
        let price = strip_currency(&child_text(block, &self.price), &self.currency_suffix);
        let description = child_text(block, &self.description);
        let district = self
            .districts
            .district_or(&description, &self.unknown_district);

        Listing::new(page_url.as_str(), price, district)
    }

    /// Takes the `href` of the first `<a>` inside each container
    fn extract_links(&self, document: &Html, container: &Selector, page_url: &Url) -> Vec<String> {
        let mut links = Vec::new();

        for element in document.select(container) {
            let href = element
                .select(&self.anchor)
                .next()
                .and_then(|a| a.value().attr("href"))
                .unwrap_or("");

            match resolve_link(href, page_url) {
                Some(link) => links.push(link),
                None => tracing::trace!("Skipping link container without usable href on {}", page_url),
            }
        }

        links
    }
}

/// Compiles one selector
fn compile(selector: &str) -> Result<Selector, CrawlError> {
    Selector::parse(selector).map_err(|e| CrawlError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Concatenated, trimmed text of every element matching `selector` under `parent`
fn child_text(parent: ElementRef<'_>, selector: &Selector) -> String {
    parent
        .select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Removes a trailing currency marker from a price string
fn strip_currency(price: &str, suffix: &str) -> String {
    let price = price.trim();
    let price = if suffix.is_empty() {
        price
    } else {
        price.strip_suffix(suffix).unwrap_or(price)
    };
    price.trim().to_string()
}

//! HTML parser for extracting anchor links from listing pages
//!
//! Directory listings are plain pages of `<a>` elements. This module
//! extracts every anchor href together with its resolved absolute URL,
//! leaving classification to [`crate::crawler::Classifier`].

use scraper::{Html, Selector};
use url::Url;

/// Extracts (raw href, resolved URL) pairs from an HTML document
///
/// # Extraction Rules
///
/// - Only `<a>` elements carrying an href attribute are consulted
/// - Hrefs are trimmed; empty hrefs produce no pair
/// - The literal parent-directory markers `"../"` and `".."` are skipped
/// - Resolution joins the href against the page's own URL; hrefs that
///   fail to resolve produce no pair
///
/// Parsing is lenient: malformed HTML never errors, the parser returns
/// whatever anchors it can locate.
///
/// # Arguments
///
/// * `html` - The HTML content of the listing page
/// * `page_url` - The URL the page was fetched from, used as the base
///   for relative-URL resolution
///
/// # Example
///
/// ```
/// use url::Url;
/// use vidgather::crawler::extract_links;
///
/// let html = r#"<a href="season1/">Season 1</a><a href="../">Parent</a>"#;
/// let page = Url::parse("https://example.com/show/").unwrap();
/// let links = extract_links(html, &page);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].0, "season1/");
/// assert_eq!(links[0].1.as_str(), "https://example.com/show/season1/");
/// ```
pub fn extract_links(html: &str, page_url: &Url) -> Vec<(String, Url)> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            let href = match element.value().attr("href") {
                Some(h) => h.trim(),
                None => continue,
            };

            if href.is_empty() || href == "../" || href == ".." {
                continue;
            }

            if let Ok(resolved) = page_url.join(href) {
                links.push((href.to_string(), resolved));
            }
        }
    }

    links
}

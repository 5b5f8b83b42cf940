//! Index page link discovery.

use anyhow::{Result, anyhow};
use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

/// Page URLs linked from the index page, in document order without
/// duplicates.
///
/// Each `href` is resolved against `index_url`, the page it was found on.
/// Fragment-only links point back into the index and are skipped, as are
/// links to anything but http(s).
pub fn page_links(index_html: &str, selector: &str, index_url: &Url) -> Result<Vec<String>> {
    let selector = Selector::parse(selector)
        .map_err(|_| anyhow!("Invalid CSS selector \"{}\"", selector))?;
    let document = Html::parse_document(index_html);

    let mut links: Vec<String> = Vec::new();
    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        if href.is_empty() || href.starts_with('#') {
            continue;
        }
        let mut url = match index_url.join(href) {
            Ok(url) => url,
            Err(err) => {
                warn!("Skipping link \"{}\" on {}: {}", href, index_url, err);
                continue;
            }
        };
        if !matches!(url.scheme(), "http" | "https") {
            debug!("Skipping non-http link {}", url);
            continue;
        }
        url.set_fragment(None);
        let url = String::from(url);
        if !links.contains(&url) {
            links.push(url);
        }
    }

    debug!("Discovered {} page links", links.len());
    Ok(links)
}

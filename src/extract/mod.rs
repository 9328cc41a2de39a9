#[cfg(test)]
mod tests;

use crate::HarvestError;
use crate::report::{SkipReason, SkippedContainer};
use scraper::{ElementRef, Html, Selector};

/// CSS selector matching product containers by id prefix
pub fn container_selector(id_prefix: &str) -> String {
    format!("[id^=\"{}\"]", id_prefix)
}

/// Links pulled out of one captured page, with per-container diagnostics
pub struct Extraction {
    /// Unique product links in first-seen DOM order
    pub links: Vec<String>,

    /// Containers that yielded no link
    pub skipped: Vec<SkippedContainer>,
}

/// Extracts product links from the rendered page source.
///
/// Each container whose id starts with `id_prefix` contributes the href of
/// its first anchor, deduplicated exactly as found. Containers without a
/// usable anchor are recorded as skipped, never aborting the batch.
pub fn extract_links(html: &str, id_prefix: &str) -> Result<Extraction, HarvestError> {
    let container = Selector::parse(&container_selector(id_prefix)).map_err(|_| {
        HarvestError::Selector {
            prefix: id_prefix.to_string(),
        }
    })?;
    let anchor = Selector::parse("a").unwrap();

    let doc = Html::parse_document(html);
    let mut links: Vec<String> = Vec::new();
    let mut skipped = Vec::new();

    for element in doc.select(&container) {
        let container_id = element.value().attr("id").unwrap_or_default().to_string();

        match first_anchor_href(&element, &anchor) {
            Ok(href) => {
                if links.contains(&href) {
                    ::log::debug!("Duplicate link in container {}: {}", container_id, href);
                } else {
                    links.push(href);
                }
            }
            Err(reason) => {
                ::log::warn!("Skipping container {}: {}", container_id, reason);
                skipped.push(SkippedContainer {
                    container_id,
                    reason,
                });
            }
        }
    }

    ::log::info!(
        "Extracted {} unique links, {} containers skipped",
        links.len(),
        skipped.len()
    );

    Ok(Extraction { links, skipped })
}

/// Reads the href of the first anchor inside a container
fn first_anchor_href(container: &ElementRef, anchor: &Selector) -> Result<String, SkipReason> {
    let element = container.select(anchor).next().ok_or(SkipReason::NoAnchor)?;
    let href = element.value().attr("href").ok_or(SkipReason::MissingHref)?;
    if href.is_empty() {
        return Err(SkipReason::EmptyHref);
    }
    Ok(href.to_string())
}

use harvest_core::contains_marker;
use scraper::{Html, Selector};

/// Collects `<a href>` values that mention the driver marker, in document order.
///
/// Values are trimmed of surrounding whitespace but otherwise returned as
/// written: no deduplication and no URL validation.
pub struct DriverLinkExtractor {
    marker: String,
}

impl DriverLinkExtractor {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn extract(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let Ok(anchors) = Selector::parse("a[href]") else {
            return Vec::new();
        };

        document
            .select(&anchors)
            .filter_map(|anchor| anchor.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty() && contains_marker(href, &self.marker))
            .map(ToOwned::to_owned)
            .collect()
    }
}

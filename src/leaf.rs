//! Leaf-page extraction.
//!
//! A leaf page is the terminal content page of the walk. Field reads are
//! best-effort: a selector that matches nothing, or any error during
//! lookup, yields `None` rather than failing the page.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::WalkResult;
use crate::traits::page::{Element, Page};
use crate::types::{
    config::FieldSelectors,
    network::NetworkTag,
    record::{ExtractionRecord, LeafFields},
};
use crate::walker::ItemConsumer;

/// Read one field from the current page, tolerating absence and errors.
///
/// Returns the first match's trimmed inner text, or the named attribute if
/// `attr` is given. A missing match and a failed lookup are both `None`;
/// the two are deliberately not distinguished.
pub async fn read_field<P: Page>(
    page: &mut P,
    selector: &str,
    attr: Option<&str>,
) -> Option<String> {
    let element = match page.locate_first(selector).await {
        Ok(Some(element)) => element,
        Ok(None) => return None,
        Err(e) => {
            debug!(selector, error = %e, "field read failed");
            return None;
        }
    };

    match attr {
        Some(name) => element.attribute(name).await.ok().flatten(),
        None => element.text().await.ok().map(|t| t.trim().to_string()),
    }
}

/// Visits leaf pages and accumulates one record per page.
///
/// Owns its output: the controller drains [`records`](Self::into_records)
/// into the run's result set once the walk finishes.
pub struct LeafExtractor<'a> {
    fields: &'a FieldSelectors,
    base_url: &'a str,
    network: NetworkTag,
    records: Vec<ExtractionRecord>,
}

impl<'a> LeafExtractor<'a> {
    /// Create an extractor for one site.
    pub fn new(fields: &'a FieldSelectors, base_url: &'a str, network: NetworkTag) -> Self {
        Self {
            fields,
            base_url,
            network,
            records: Vec::new(),
        }
    }

    /// Number of records extracted so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been extracted yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Take ownership of the accumulated records.
    pub fn into_records(self) -> Vec<ExtractionRecord> {
        self.records
    }
}

#[async_trait]
impl<'a, P: Page> ItemConsumer<P> for LeafExtractor<'a> {
    async fn consume(&mut self, page: &mut P, url: &Url) -> WalkResult<()> {
        page.navigate(url.as_str()).await?;
        page.wait_for_load().await?;

        let fields = LeafFields {
            published: read_field(page, &self.fields.published, None).await,
            body: read_field(page, &self.fields.body, None).await,
            title: read_field(page, &self.fields.title, None).await,
        };

        self.records
            .push(ExtractionRecord::build(fields, url, self.base_url, self.network));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPageBuilder;
    use crate::types::config::Selectors;

    #[tokio::test]
    async fn test_read_field_trims_text() {
        let mut page = MockPageBuilder::new()
            .text("http://example.net/t/1", "h1.title", "  Leak dump \n")
            .build();
        page.navigate("http://example.net/t/1").await.unwrap();

        let value = read_field(&mut page, "h1.title", None).await;
        assert_eq!(value.as_deref(), Some("Leak dump"));
    }

    #[tokio::test]
    async fn test_read_field_missing_selector_is_none() {
        let mut page = MockPageBuilder::new().empty("http://example.net/t/1").build();
        page.navigate("http://example.net/t/1").await.unwrap();

        assert_eq!(read_field(&mut page, "h1.title", None).await, None);
    }

    #[tokio::test]
    async fn test_read_field_lookup_error_is_none() {
        let mut page = MockPageBuilder::new()
            .empty("http://example.net/t/1")
            .fail_selector("h1.title")
            .build();
        page.navigate("http://example.net/t/1").await.unwrap();

        assert_eq!(read_field(&mut page, "h1.title", None).await, None);
    }

    #[tokio::test]
    async fn test_read_field_attribute() {
        let mut page = MockPageBuilder::new()
            .link("http://example.net/t/1", "a.src", "/raw/1")
            .build();
        page.navigate("http://example.net/t/1").await.unwrap();

        let value = read_field(&mut page, "a.src", Some("href")).await;
        assert_eq!(value.as_deref(), Some("/raw/1"));
    }

    #[tokio::test]
    async fn test_extractor_builds_record_from_available_fields() {
        let selectors = Selectors::xenforo();
        let mut page = MockPageBuilder::new()
            .text("http://example.net/t/1", "h1.p-title-value", "Dump")
            .text("http://example.net/t/1", "div.bbWrapper", "some body text")
            .build();

        let mut extractor =
            LeafExtractor::new(&selectors.fields, "http://example.net", NetworkTag::Clearnet);
        let url = Url::parse("http://example.net/t/1").unwrap();
        extractor.consume(&mut page, &url).await.unwrap();

        let records = extractor.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Dump"));
        assert_eq!(records[0].content, "some body text");
        assert_eq!(records[0].excerpt, "some body text");
        // timestamp selector matched nothing
        assert_eq!(records[0].published, "");
    }

    #[tokio::test]
    async fn test_extractor_navigation_failure_propagates() {
        let selectors = Selectors::xenforo();
        let mut page = MockPageBuilder::new()
            .fail_navigation("http://example.net/t/1")
            .build();

        let mut extractor =
            LeafExtractor::new(&selectors.fields, "http://example.net", NetworkTag::Clearnet);
        let url = Url::parse("http://example.net/t/1").unwrap();

        assert!(extractor.consume(&mut page, &url).await.is_err());
        assert!(extractor.is_empty());
    }
}

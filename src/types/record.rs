//! Extraction records and the content-length policy applied when
//! building them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::network::NetworkTag;

/// Number of whitespace-delimited words kept in a record's excerpt.
pub const EXCERPT_WORD_LIMIT: usize = 500;

/// Category tag attached to every record this engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    /// Forum leak posts
    Leaks,
}

/// Fields read best-effort from one leaf page.
///
/// Every field is optional: a missing selector match or a failed lookup
/// leaves the field `None`, and the record builder substitutes defaults.
#[derive(Debug, Clone, Default)]
pub struct LeafFields {
    /// Post title
    pub title: Option<String>,

    /// Full post body
    pub body: Option<String>,

    /// Publication timestamp as displayed on the page
    pub published: Option<String>,
}

/// One normalized record extracted from a leaf page.
///
/// Immutable once built; the run's result set owns it exclusively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Post title, if the page carried one
    pub title: Option<String>,

    /// Source links for this record (the leaf URL, singleton)
    pub links: Vec<String>,

    /// Canonical URL of the leaf page, fully resolved against the base URL
    pub url: String,

    /// Cryptocurrency or contact addresses (unused by this adapter)
    pub addresses: Vec<String>,

    /// Base URL of the site the record came from
    pub source_site: String,

    /// Full body text, "" if unavailable
    pub content: String,

    /// Related site URLs (always empty here)
    pub related_sites: Vec<String>,

    /// Network classification of the source site
    pub network: NetworkTag,

    /// Body truncated to the first [`EXCERPT_WORD_LIMIT`] words
    pub excerpt: String,

    /// Fixed category tag
    pub content_category: ContentCategory,

    /// Publication timestamp as shown on the page, "" if unavailable
    pub published: String,

    /// When this record was extracted
    pub extracted_at: DateTime<Utc>,
}

impl ExtractionRecord {
    /// Build a record from raw leaf fields.
    ///
    /// Pure transformation over already-fetched strings: no error
    /// conditions. An absent body yields "" for both `content` and
    /// `excerpt`.
    pub fn build(
        fields: LeafFields,
        source_url: &Url,
        base_url: &str,
        network: NetworkTag,
    ) -> Self {
        let content = fields.body.unwrap_or_default();
        let excerpt = truncate_words(&content, EXCERPT_WORD_LIMIT);

        Self {
            title: fields.title,
            links: vec![source_url.to_string()],
            url: source_url.to_string(),
            addresses: Vec::new(),
            source_site: base_url.to_string(),
            content,
            related_sites: Vec::new(),
            network,
            excerpt,
            content_category: ContentCategory::Leaks,
            published: fields.published.unwrap_or_default(),
            extracted_at: Utc::now(),
        }
    }

    /// Whether the record carries any body text.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Truncate a body to its first `limit` whitespace-delimited words.
///
/// Bodies at or under the limit come back unchanged (original spacing
/// preserved); longer bodies are rejoined with single spaces.
pub fn truncate_words(body: &str, limit: usize) -> String {
    let words: Vec<&str> = body.split_whitespace().collect();
    if words.len() > limit {
        words[..limit].join(" ")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body_of(words: usize) -> String {
        (0..words)
            .map(|i| format!("w{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_short_body_unchanged() {
        let body = "a  b\tc\nd";
        assert_eq!(truncate_words(body, EXCERPT_WORD_LIMIT), body);
    }

    #[test]
    fn test_long_body_truncated_to_limit() {
        let body = body_of(600);
        let excerpt = truncate_words(&body, EXCERPT_WORD_LIMIT);
        assert_eq!(excerpt.split_whitespace().count(), 500);
        assert!(excerpt.ends_with("w499"));
    }

    #[test]
    fn test_exactly_at_limit_unchanged() {
        let body = body_of(500);
        assert_eq!(truncate_words(&body, EXCERPT_WORD_LIMIT), body);
    }

    #[test]
    fn test_build_defaults_missing_fields() {
        let url = Url::parse("http://example.net/thread/5").unwrap();
        let record = ExtractionRecord::build(
            LeafFields::default(),
            &url,
            "http://example.net",
            NetworkTag::Clearnet,
        );

        assert_eq!(record.title, None);
        assert_eq!(record.content, "");
        assert_eq!(record.excerpt, "");
        assert_eq!(record.published, "");
        assert_eq!(record.links, vec!["http://example.net/thread/5"]);
        assert_eq!(record.url, "http://example.net/thread/5");
        assert_eq!(record.source_site, "http://example.net");
        assert!(record.addresses.is_empty());
        assert!(record.related_sites.is_empty());
        assert!(!record.has_content());
    }

    #[test]
    fn test_build_truncates_long_body() {
        let url = Url::parse("http://example.net/thread/5").unwrap();
        let record = ExtractionRecord::build(
            LeafFields {
                title: Some("Dump".to_string()),
                body: Some(body_of(600)),
                published: Some("2024-01-01".to_string()),
            },
            &url,
            "http://example.net",
            NetworkTag::Clearnet,
        );

        assert_eq!(record.excerpt.split_whitespace().count(), 500);
        assert_eq!(record.content.split_whitespace().count(), 600);
        assert_eq!(record.content_category, ContentCategory::Leaks);
    }

    #[test]
    fn test_record_serializes_with_lowercase_tags() {
        let url = Url::parse("http://example.net/thread/5").unwrap();
        let record = ExtractionRecord::build(
            LeafFields::default(),
            &url,
            "http://example.net",
            NetworkTag::Tor,
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["network"], "tor");
        assert_eq!(json["content_category"], "leaks");
    }

    proptest! {
        #[test]
        fn prop_excerpt_is_word_prefix_within_limit(words in prop::collection::vec("[a-z]{1,8}", 0..700)) {
            let body = words.join(" ");
            let excerpt = truncate_words(&body, EXCERPT_WORD_LIMIT);
            let excerpt_words: Vec<&str> = excerpt.split_whitespace().collect();

            prop_assert!(excerpt_words.len() <= EXCERPT_WORD_LIMIT);
            prop_assert!(excerpt.len() <= body.len());
            prop_assert!(words
                .iter()
                .map(String::as_str)
                .take(excerpt_words.len())
                .eq(excerpt_words.iter().copied()));
            if words.len() <= EXCERPT_WORD_LIMIT {
                prop_assert_eq!(&excerpt, &body);
            } else {
                prop_assert_eq!(excerpt_words.len(), EXCERPT_WORD_LIMIT);
            }
        }
    }
}

//! Per-site configuration: selectors, fetch routing, identity.
//!
//! Selector values are data, not code: the same engine walks any
//! forum-style site whose listing structure can be described by one
//! [`Selectors`] value.

use serde::{Deserialize, Serialize};

/// Proxy mode the host should use when fetching this site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyPolicy {
    /// No proxy
    Direct,

    /// Route through Tor
    Tor,
}

/// Fetch mechanism the host should use for this site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMechanism {
    /// Driven browser (pages need script execution)
    Browser,

    /// Plain HTTP client
    Http,
}

/// Fetch-configuration descriptor the host reads to route fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchSettings {
    /// Proxy mode
    pub proxy: ProxyPolicy,

    /// Fetch mechanism
    pub mechanism: FetchMechanism,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            proxy: ProxyPolicy::Direct,
            mechanism: FetchMechanism::Browser,
        }
    }
}

/// Selectors for one pagination level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelSelectors {
    /// Matches the item links on a listing page
    pub items: String,

    /// Matches the single "next page" control; `None` for a level that is
    /// never paginated (e.g. the seed's outer listing)
    pub next: Option<String>,
}

impl LevelSelectors {
    /// A paginated level.
    pub fn paginated(items: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            items: items.into(),
            next: Some(next.into()),
        }
    }

    /// A single-page level with no next control.
    pub fn single_page(items: impl Into<String>) -> Self {
        Self {
            items: items.into(),
            next: None,
        }
    }
}

/// Selectors for the three fields read from a leaf page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSelectors {
    /// Post title
    pub title: String,

    /// Post body
    pub body: String,

    /// Publication timestamp
    pub published: String,
}

/// Full selector configuration for one site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selectors {
    /// Outer listing level (categories / forums)
    pub outer: LevelSelectors,

    /// Inner listing level (threads within one outer entry)
    pub inner: LevelSelectors,

    /// Leaf-page field selectors
    pub fields: FieldSelectors,
}

impl Selectors {
    /// Selector family for XenForo-based forums.
    pub fn xenforo() -> Self {
        Self {
            outer: LevelSelectors::single_page("h3.node-title a"),
            inner: LevelSelectors::paginated(
                "div.structItem-title a",
                ".block-router-main .pageNav-jump--next",
            ),
            fields: FieldSelectors {
                title: "h1.p-title-value".to_string(),
                body: "div.bbWrapper".to_string(),
                published: "time.u-dt".to_string(),
            },
        }
    }
}

/// Static profile for one site adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Adapter identity; keys the completion marker
    pub name: String,

    /// URL the traversal starts from
    pub seed_url: String,

    /// Base URL relative links resolve against
    pub base_url: String,

    /// How the host should fetch this site
    pub fetch: FetchSettings,

    /// Selector configuration
    pub selectors: Selectors,
}

impl SiteProfile {
    /// Create a profile with default fetch settings and XenForo selectors.
    pub fn new(
        name: impl Into<String>,
        seed_url: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            seed_url: seed_url.into(),
            base_url: base_url.into(),
            fetch: FetchSettings::default(),
            selectors: Selectors::xenforo(),
        }
    }

    /// Set the fetch settings.
    pub fn with_fetch(mut self, fetch: FetchSettings) -> Self {
        self.fetch = fetch;
        self
    }

    /// Set the selector configuration.
    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = SiteProfile::new("b1nd", "http://b1nd.net", "http://b1nd.net");

        assert_eq!(profile.fetch.proxy, ProxyPolicy::Direct);
        assert_eq!(profile.fetch.mechanism, FetchMechanism::Browser);
        assert_eq!(profile.selectors.outer.items, "h3.node-title a");
        assert!(profile.selectors.outer.next.is_none());
        assert!(profile.selectors.inner.next.is_some());
    }

    #[test]
    fn test_level_constructors() {
        let level = LevelSelectors::paginated("a.item", "a.next");
        assert_eq!(level.next.as_deref(), Some("a.next"));

        let level = LevelSelectors::single_page("a.item");
        assert!(level.next.is_none());
    }
}

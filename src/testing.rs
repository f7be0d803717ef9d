//! Testing utilities including mock implementations.
//!
//! These are useful for testing adapters without a real browser: page
//! fixtures are keyed by URL, failures are injectable per URL or selector,
//! and every navigation is recorded for assertions.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use url::Url;

use crate::error::{PageError, PageResult};
use crate::traits::page::{Element, Page};

/// A canned element returned by [`MockPage`] queries.
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    text: String,
    attributes: HashMap<String, String>,
}

impl MockElement {
    /// Element carrying only inner text.
    pub fn text_node(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: HashMap::new(),
        }
    }

    /// Anchor element carrying an `href` attribute.
    pub fn link(href: impl Into<String>) -> Self {
        Self::default().with_attribute("href", href)
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl Element for MockElement {
    async fn text(&self) -> PageResult<String> {
        Ok(self.text.clone())
    }

    async fn attribute(&self, name: &str) -> PageResult<Option<String>> {
        Ok(self.attributes.get(name).cloned())
    }
}

/// Elements of one fixture page, keyed by selector.
#[derive(Debug, Clone, Default)]
struct Fixture {
    elements: HashMap<String, Vec<MockElement>>,
}

/// Mock page capability backed by URL-keyed fixtures.
///
/// Navigating to a URL without a fixture fails, as does navigating to a
/// URL registered via [`MockPageBuilder::fail_navigation`]. Selector
/// lookups can be made to fail with
/// [`MockPageBuilder::fail_selector`], which exercises the fault-tolerant
/// field-read path.
#[derive(Default)]
pub struct MockPage {
    fixtures: HashMap<String, Fixture>,
    failing_urls: HashSet<String>,
    failing_selectors: HashSet<String>,
    current: String,
    visits: Vec<String>,
}

impl MockPage {
    /// Start building a mock page.
    pub fn builder() -> MockPageBuilder {
        MockPageBuilder::new()
    }

    /// Every URL passed to `navigate`, in order, including failed ones.
    pub fn visits(&self) -> &[String] {
        &self.visits
    }

    /// How many times one URL was navigated to.
    pub fn visit_count(&self, url: &str) -> usize {
        let url = normalize(url);
        self.visits.iter().filter(|v| **v == url).count()
    }

    fn fixture(&self) -> Option<&Fixture> {
        self.fixtures.get(&self.current)
    }
}

#[async_trait]
impl Page for MockPage {
    type Element = MockElement;

    async fn navigate(&mut self, url: &str) -> PageResult<()> {
        let url = normalize(url);
        self.visits.push(url.clone());

        if self.failing_urls.contains(&url) {
            return Err(PageError::Navigation {
                url,
                reason: "simulated navigation failure".to_string(),
            });
        }
        if !self.fixtures.contains_key(&url) {
            return Err(PageError::Navigation {
                url,
                reason: "no fixture for URL".to_string(),
            });
        }

        self.current = url;
        Ok(())
    }

    async fn wait_for_load(&mut self) -> PageResult<()> {
        Ok(())
    }

    async fn query_all(&mut self, selector: &str) -> PageResult<Vec<MockElement>> {
        if self.failing_selectors.contains(selector) {
            return Err(PageError::Query {
                selector: selector.to_string(),
                reason: "simulated selector failure".to_string(),
            });
        }
        Ok(self
            .fixture()
            .and_then(|f| f.elements.get(selector))
            .cloned()
            .unwrap_or_default())
    }

    async fn locate_first(&mut self, selector: &str) -> PageResult<Option<MockElement>> {
        Ok(self.query_all(selector).await?.into_iter().next())
    }
}

/// Builder for [`MockPage`] fixtures.
///
/// URLs are normalized through `url::Url` so fixtures registered as
/// `http://example.net` match navigations to `http://example.net/`.
#[derive(Default)]
pub struct MockPageBuilder {
    page: MockPage,
}

impl MockPageBuilder {
    /// Start with no fixtures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page with no elements.
    pub fn empty(mut self, url: &str) -> Self {
        self.page.fixtures.entry(normalize(url)).or_default();
        self
    }

    /// Add one element under a selector on a page.
    pub fn element(mut self, url: &str, selector: &str, element: MockElement) -> Self {
        self.page
            .fixtures
            .entry(normalize(url))
            .or_default()
            .elements
            .entry(selector.to_string())
            .or_default()
            .push(element);
        self
    }

    /// Add a single text element under a selector.
    pub fn text(self, url: &str, selector: &str, text: &str) -> Self {
        self.element(url, selector, MockElement::text_node(text))
    }

    /// Add a single anchor with an `href` under a selector.
    pub fn link(self, url: &str, selector: &str, href: &str) -> Self {
        self.element(url, selector, MockElement::link(href))
    }

    /// Add one anchor per href under a selector.
    pub fn links(mut self, url: &str, selector: &str, hrefs: &[&str]) -> Self {
        for href in hrefs {
            self = self.link(url, selector, href);
        }
        self
    }

    /// Make navigation to a URL fail.
    pub fn fail_navigation(mut self, url: &str) -> Self {
        self.page.failing_urls.insert(normalize(url));
        self
    }

    /// Make every lookup of a selector fail.
    pub fn fail_selector(mut self, selector: &str) -> Self {
        self.page.failing_selectors.insert(selector.to_string());
        self
    }

    /// Build the mock page.
    pub fn build(self) -> MockPage {
        self.page
    }
}

fn normalize(url: &str) -> String {
    Url::parse(url)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| url.to_string())
}

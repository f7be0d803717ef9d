//! Abstract browser-page capability.
//!
//! The engine never fetches anything itself: navigation, load waiting and
//! selector evaluation are supplied by the host through this trait. A real
//! implementation wraps a driven browser tab; tests use
//! [`MockPage`](crate::testing::MockPage).
//!
//! One `Page` handle is reused across every navigation of a run, so all
//! methods take `&mut self` and execution over it is strictly sequential.

use async_trait::async_trait;

use crate::error::PageResult;

/// A handle to one element matched on the current page.
///
/// Handles are owned snapshots; they stay usable after the page navigates
/// away (implementations may resolve text/attributes eagerly).
#[async_trait]
pub trait Element: Send + Sync {
    /// Inner text of the element.
    async fn text(&self) -> PageResult<String>;

    /// A named attribute, or `None` if the element does not carry it.
    async fn attribute(&self, name: &str) -> PageResult<Option<String>>;
}

/// A navigable page supplied by the host's fetching layer.
#[async_trait]
pub trait Page: Send {
    /// Element handle type produced by queries on this page.
    type Element: Element;

    /// Navigate to an absolute URL.
    async fn navigate(&mut self, url: &str) -> PageResult<()>;

    /// Block until the current navigation's load-complete condition is
    /// observed. The wait is bounded by whatever the underlying
    /// implementation enforces; an indefinite hang is an external fault.
    async fn wait_for_load(&mut self) -> PageResult<()>;

    /// All elements matching a selector on the current page.
    async fn query_all(&mut self, selector: &str) -> PageResult<Vec<Self::Element>>;

    /// The first element matching a selector, if any.
    async fn locate_first(&mut self, selector: &str) -> PageResult<Option<Self::Element>>;
}

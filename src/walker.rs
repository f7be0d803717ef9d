//! Generic pagination walker.
//!
//! One walker drives the "load page, collect item links, process each,
//! follow the next control" loop for a single listing level. The same type
//! runs at both nesting levels: the outer walk's consumer is an inner walk,
//! the inner walk's consumer is the leaf extractor.
//!
//! Pagination is unbounded by design: the loop only terminates when the
//! next control is absent or carries no usable destination. A listing whose
//! next link points back at itself will loop forever.

use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::WalkResult;
use crate::traits::page::{Element, Page};
use crate::types::{
    config::LevelSelectors,
    report::{ItemFailure, WalkReport},
};

/// Consumer for the items a walker collects at its level.
///
/// Implementations share the walker's page handle and are free to navigate
/// it away from the listing; the walker re-reads nothing after handing the
/// page over for an item.
#[async_trait]
pub trait ItemConsumer<P: Page>: Send {
    /// Process one item link. An error here fails only this item: the
    /// walker logs it, records it, and moves on.
    async fn consume(&mut self, page: &mut P, url: &Url) -> WalkResult<()>;
}

/// Ephemeral per-step state: one listing page's scraped links.
///
/// The next-page destination is captured while the walker is still on the
/// listing, because consumers move the shared page handle to item pages
/// before the walker checks for a next control.
#[derive(Debug)]
struct Cursor {
    items: Vec<Url>,
    next: Option<Url>,
}

/// Walks one listing level, delegating items to a consumer.
pub struct PaginationWalker<'a> {
    base: &'a Url,
    level: &'a LevelSelectors,
}

impl<'a> PaginationWalker<'a> {
    /// Create a walker for one level of a site.
    pub fn new(base: &'a Url, level: &'a LevelSelectors) -> Self {
        Self { base, level }
    }

    /// Run the loop from a starting listing URL until no next page remains.
    ///
    /// Returns a run-level error only if a listing page itself cannot be
    /// loaded or scraped; item failures are aggregated on the report.
    pub async fn walk<P, C>(
        &self,
        page: &mut P,
        start: &Url,
        consumer: &mut C,
    ) -> WalkResult<WalkReport>
    where
        P: Page,
        C: ItemConsumer<P>,
    {
        let mut report = WalkReport::default();
        let mut current = start.clone();

        loop {
            let cursor = self.scrape(page, &current).await?;
            report.pages_visited += 1;
            info!(page = %current, items = cursor.items.len(), "collected item links");

            for item in &cursor.items {
                match consumer.consume(page, item).await {
                    Ok(()) => report.items_processed += 1,
                    Err(e) => {
                        warn!(item = %item, error = %e, "skipping failed item");
                        report.failures.push(ItemFailure::new(item.as_str(), e));
                    }
                }
            }

            match cursor.next {
                Some(next) => {
                    debug!(next = %next, "following next-page control");
                    current = next;
                }
                None => break,
            }
        }

        Ok(report)
    }

    /// Load one listing page and scrape its cursor.
    async fn scrape<P: Page>(&self, page: &mut P, url: &Url) -> WalkResult<Cursor> {
        page.navigate(url.as_str()).await?;
        page.wait_for_load().await?;

        let items = collect_links(page, &self.level.items, self.base).await?;
        let next = match &self.level.next {
            Some(selector) => self.next_target(page, selector).await?,
            None => None,
        };

        Ok(Cursor { items, next })
    }

    /// Resolve the next-page destination, if the control exists and
    /// carries one.
    async fn next_target<P: Page>(
        &self,
        page: &mut P,
        selector: &str,
    ) -> WalkResult<Option<Url>> {
        let Some(control) = page.locate_first(selector).await? else {
            debug!("no next-page control; level exhausted");
            return Ok(None);
        };

        let Some(href) = control.attribute("href").await? else {
            debug!("next-page control has no destination; level exhausted");
            return Ok(None);
        };

        match self.base.join(&href) {
            Ok(url) => Ok(Some(url)),
            Err(e) => {
                warn!(href = %href, error = %e, "unresolvable next-page destination");
                Ok(None)
            }
        }
    }
}

/// Collect every link matching a selector on the current page, resolved
/// against the site base URL. Unresolvable hrefs are skipped.
pub async fn collect_links<P: Page>(
    page: &mut P,
    selector: &str,
    base: &Url,
) -> WalkResult<Vec<Url>> {
    let mut links = Vec::new();
    for element in page.query_all(selector).await? {
        let Some(href) = element.attribute("href").await? else {
            continue;
        };
        match base.join(&href) {
            Ok(url) => links.push(url),
            Err(e) => warn!(href = %href, error = %e, "skipping unresolvable link"),
        }
    }
    Ok(links)
}

//! Host-facing site-adapter contract.
//!
//! The host orchestrator constructs exactly one adapter per site, supplies
//! the page handle, and routes fetching based on the adapter's static
//! configuration. Any type implementing this trait is interchangeable from
//! the host's perspective.

use async_trait::async_trait;

use crate::traits::page::Page;
use crate::types::{config::FetchSettings, record::ExtractionRecord, report::RunReport};

/// One site's traversal-and-extraction adapter.
///
/// Generic over the page capability so a host can drive every adapter of a
/// deployment through the same concrete page type.
#[async_trait]
pub trait SiteAdapter<P: Page>: Send {
    /// Adapter identity; keys the completion marker.
    fn name(&self) -> &str;

    /// URL the traversal starts from.
    fn seed_url(&self) -> &str;

    /// Base URL relative links are resolved against.
    fn base_url(&self) -> &str;

    /// Page to surface as the site's contact point.
    fn contact_page(&self) -> &str {
        self.seed_url()
    }

    /// How the host should route and configure fetching for this site.
    fn fetch_settings(&self) -> &FetchSettings;

    /// Records accumulated so far. Complete once [`run`](Self::run)
    /// returns; no synchronization is promised mid-run.
    fn records(&self) -> &[ExtractionRecord];

    /// Drive the full traversal over the supplied page handle.
    ///
    /// Never fails: run-level errors are logged and reported through the
    /// returned [`RunReport`], and the completion marker is written exactly
    /// once on exit regardless of outcome.
    async fn run(&mut self, page: &mut P) -> RunReport;
}

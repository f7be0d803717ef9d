//! Traversal controller: one adapter, one run, one completion marker.
//!
//! `ForumAdapter` owns the whole discovery-and-traversal sequence for a
//! forum-style site: collect outer listing links from the seed, walk each
//! outer link's paginated thread listing, extract every leaf page. The run
//! sits inside a single failure boundary; whatever happens, the completion
//! marker is written exactly once on the way out.

use async_trait::async_trait;
use tracing::{error, info};
use url::Url;

use crate::error::WalkResult;
use crate::leaf::LeafExtractor;
use crate::traits::{
    adapter::SiteAdapter,
    classifier::{NetworkClassifier, SuffixClassifier},
    page::Page,
    signal::{marker_key, SignalCommand, SignalStore},
};
use crate::types::{
    config::{FetchSettings, LevelSelectors, SiteProfile},
    record::ExtractionRecord,
    report::{RunReport, WalkReport},
};
use crate::walker::{ItemConsumer, PaginationWalker};

/// Walks one outer link's inner (thread) listing, feeding leaves to an
/// extractor. Used as the outer walker's consumer, so a listing that fails
/// to load fails only that outer link.
struct InnerListing<'a> {
    base: &'a Url,
    level: &'a LevelSelectors,
    leaf: LeafExtractor<'a>,
    report: WalkReport,
}

#[async_trait]
impl<'a, P: Page> ItemConsumer<P> for InnerListing<'a> {
    async fn consume(&mut self, page: &mut P, url: &Url) -> WalkResult<()> {
        info!(listing = %url, "walking inner listing");
        let walker = PaginationWalker::new(self.base, self.level);
        let report = walker.walk(page, url, &mut self.leaf).await?;
        self.report.absorb(report);
        Ok(())
    }
}

/// Site adapter for two-level forum-style listings.
///
/// The host constructs exactly one per site and holds it for the run's
/// lifetime; the result set is exposed through
/// [`records`](SiteAdapter::records) once [`run`](SiteAdapter::run)
/// returns.
pub struct ForumAdapter<S: SignalStore> {
    profile: SiteProfile,
    signals: S,
    classifier: Box<dyn NetworkClassifier>,
    records: Vec<ExtractionRecord>,
}

impl<S: SignalStore> ForumAdapter<S> {
    /// Create an adapter from a site profile and a shared signal store.
    pub fn new(profile: SiteProfile, signals: S) -> Self {
        Self {
            profile,
            signals,
            classifier: Box::new(SuffixClassifier),
            records: Vec::new(),
        }
    }

    /// Replace the network classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn NetworkClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// The site profile this adapter was built from.
    pub fn profile(&self) -> &SiteProfile {
        &self.profile
    }

    /// Records accumulated so far.
    ///
    /// Inherent counterpart of [`SiteAdapter::records`] so callers holding
    /// the concrete type need not name a page type.
    pub fn records(&self) -> &[ExtractionRecord] {
        &self.records
    }

    /// The whole traversal; every error it returns is run-level.
    async fn traverse<P: Page>(&mut self, page: &mut P, report: &mut RunReport) -> WalkResult<()> {
        let base = parse_url(&self.profile.base_url)?;
        let seed = parse_url(&self.profile.seed_url)?;
        let network = self.classifier.classify(&base);

        let selectors = &self.profile.selectors;
        let mut listing = InnerListing {
            base: &base,
            level: &selectors.inner,
            leaf: LeafExtractor::new(&selectors.fields, &self.profile.base_url, network),
            report: WalkReport::default(),
        };

        let outer = PaginationWalker::new(&base, &selectors.outer);
        let outcome = outer.walk(page, &seed, &mut listing).await;

        // Keep everything collected before a failure: partial runs still
        // produce records.
        let InnerListing {
            leaf,
            report: inner_report,
            ..
        } = listing;
        report.records_collected = leaf.len();
        report.absorb(inner_report);
        self.records.extend(leaf.into_records());

        report.absorb(outcome?);
        Ok(())
    }

    /// Write the completion marker; a store error must not escape the run
    /// boundary.
    async fn signal_completion(&self) {
        let key = marker_key(&self.profile.name);
        if let Err(e) = self.signals.signal(SignalCommand::SetBool, &key, true).await {
            error!(site = %self.profile.name, key = %key, error = %e, "completion marker write failed");
        }
    }
}

#[async_trait]
impl<P: Page, S: SignalStore> SiteAdapter<P> for ForumAdapter<S> {
    fn name(&self) -> &str {
        &self.profile.name
    }

    fn seed_url(&self) -> &str {
        &self.profile.seed_url
    }

    fn base_url(&self) -> &str {
        &self.profile.base_url
    }

    fn fetch_settings(&self) -> &FetchSettings {
        &self.profile.fetch
    }

    fn records(&self) -> &[ExtractionRecord] {
        &self.records
    }

    async fn run(&mut self, page: &mut P) -> RunReport {
        info!(site = %self.profile.name, seed = %self.profile.seed_url, "starting traversal");

        let mut report = RunReport::new();
        if let Err(e) = self.traverse(page, &mut report).await {
            error!(site = %self.profile.name, error = %e, "traversal terminated");
            report.run_error = Some(e.to_string());
        }

        self.signal_completion().await;

        info!(
            site = %self.profile.name,
            records = report.records_collected,
            pages = report.pages_visited,
            failures = report.failures.len(),
            "traversal finished"
        );
        report
    }
}

fn parse_url(url: &str) -> WalkResult<Url> {
    Url::parse(url).map_err(|source| crate::error::WalkError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

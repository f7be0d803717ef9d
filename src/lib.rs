//! Forum Traversal and Extraction Engine
//!
//! A site-adapter core for multi-site content-extraction crawlers: given a
//! seed URL it discovers forum-style thread listings, paginates through
//! nested listing and thread pages, extracts normalized records from leaf
//! pages, and signals completion to a shared coordination store.
//!
//! # Design Philosophy
//!
//! - One bad page never aborts a run: failures are isolated per item and
//!   aggregated on the run report
//! - Capabilities, not dependencies: fetching ([`Page`]), signaling
//!   ([`SignalStore`]) and network classification ([`NetworkClassifier`])
//!   are traits supplied by collaborators
//! - Selectors are data: the same engine walks any site describable by a
//!   [`Selectors`] value
//! - Strictly sequential: one page handle, no parallel fetching, no retries
//!
//! # Usage
//!
//! ```rust,ignore
//! use harvest::{ForumAdapter, SiteAdapter, SiteProfile};
//!
//! let profile = SiteProfile::new("b1nd", "http://b1nd.net", "http://b1nd.net");
//! let mut adapter = ForumAdapter::new(profile, signal_store);
//!
//! let report = adapter.run(&mut page).await;
//! for record in adapter.records() {
//!     println!("{} ({} words kept)", record.url, record.excerpt.len());
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Capability abstractions (Page, SignalStore, SiteAdapter)
//! - [`types`] - Records, site profiles, run reports
//! - [`walker`] - Generic pagination walker
//! - [`leaf`] - Leaf-page field extraction
//! - [`adapter`] - The traversal controller
//! - [`stores`] - Signal-store implementations
//! - [`testing`] - Mock page capability for tests

pub mod adapter;
pub mod error;
pub mod leaf;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;
pub mod walker;

// Re-export core types at crate root
pub use error::{PageError, PageResult, SignalError, SignalResult, WalkError, WalkResult};
pub use traits::{
    adapter::SiteAdapter,
    classifier::{NetworkClassifier, SuffixClassifier},
    page::{Element, Page},
    signal::{marker_key, SignalCommand, SignalStore, URL_PARSED_NAMESPACE},
};
pub use types::{
    config::{
        FetchMechanism, FetchSettings, FieldSelectors, LevelSelectors, ProxyPolicy, Selectors,
        SiteProfile,
    },
    network::NetworkTag,
    record::{truncate_words, ContentCategory, ExtractionRecord, LeafFields, EXCERPT_WORD_LIMIT},
    report::{ItemFailure, RunReport, WalkReport},
};

// Re-export the controller and walk primitives
pub use adapter::ForumAdapter;
pub use leaf::{read_field, LeafExtractor};
pub use walker::{collect_links, ItemConsumer, PaginationWalker};

// Re-export stores
pub use stores::MemorySignalStore;

// Re-export testing utilities
pub use testing::{MockElement, MockPage, MockPageBuilder};

//! Core trait abstractions.
//!
//! The engine consumes three capabilities supplied by collaborators
//! ([`Page`](page::Page), [`SignalStore`](signal::SignalStore),
//! [`NetworkClassifier`](classifier::NetworkClassifier)) and produces one
//! ([`SiteAdapter`](adapter::SiteAdapter)) for the host orchestrator.

pub mod adapter;
pub mod classifier;
pub mod page;
pub mod signal;

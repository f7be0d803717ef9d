//! Coordination-store capability for run-completion signaling.
//!
//! The store is write-only from this engine: the only call made is the
//! completion-marker write at the end of a run. Reads, expiry and the
//! consumer side live with the host.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::SignalResult;

/// Key namespace for the "this adapter's run has concluded" marker.
pub const URL_PARSED_NAMESPACE: &str = "url_parsed";

/// Build the completion-marker key for an adapter.
///
/// Keys are namespaced per adapter identity so many adapters can share one
/// store: `url_parsed:<adapter name>`.
pub fn marker_key(adapter_name: &str) -> String {
    format!("{URL_PARSED_NAMESPACE}:{adapter_name}")
}

/// Commands understood by the coordination store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalCommand {
    /// Set a boolean flag under a key.
    SetBool,
}

/// Write-only signaling capability backed by a shared store.
#[async_trait]
pub trait SignalStore: Send + Sync {
    /// Write a boolean value under a key.
    async fn signal(&self, command: SignalCommand, key: &str, value: bool) -> SignalResult<()>;
}

#[async_trait]
impl<S: SignalStore + ?Sized> SignalStore for Arc<S> {
    async fn signal(&self, command: SignalCommand, key: &str, value: bool) -> SignalResult<()> {
        (**self).signal(command, key, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_key_is_namespaced() {
        assert_eq!(marker_key("b1nd"), "url_parsed:b1nd");
    }
}

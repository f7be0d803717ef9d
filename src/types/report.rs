//! Run and walk reports.
//!
//! Per-item failures are skipped, never re-raised; the reports carry their
//! reasons so a host can tell a clean short run from a lossy one.

/// One item that failed to process and was skipped.
#[derive(Debug, Clone)]
pub struct ItemFailure {
    /// URL of the skipped item
    pub url: String,

    /// Why it was skipped
    pub reason: String,
}

impl ItemFailure {
    /// Record a skipped item.
    pub fn new(url: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// Outcome of one walker's loop over a single level.
#[derive(Debug, Clone, Default)]
pub struct WalkReport {
    /// Listing pages this walker loaded
    pub pages_visited: usize,

    /// Items successfully handed to the consumer
    pub items_processed: usize,

    /// Items skipped after a processing failure
    pub failures: Vec<ItemFailure>,
}

impl WalkReport {
    /// Merge a nested walk's counts into this report.
    pub fn absorb(&mut self, other: WalkReport) {
        self.pages_visited += other.pages_visited;
        self.items_processed += other.items_processed;
        self.failures.extend(other.failures);
    }
}

/// Outcome of one full adapter run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Listing pages visited across both levels
    pub pages_visited: usize,

    /// Records appended to the result set
    pub records_collected: usize,

    /// Items skipped after a processing failure
    pub failures: Vec<ItemFailure>,

    /// Run-level error that terminated the traversal, if any
    pub run_error: Option<String>,
}

impl RunReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the run finished without any run-level or item failure.
    pub fn is_complete(&self) -> bool {
        self.run_error.is_none() && self.failures.is_empty()
    }

    /// Fold a walk report into this run report.
    pub fn absorb(&mut self, walk: WalkReport) {
        self.pages_visited += walk.pages_visited;
        self.failures.extend(walk.failures);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_merges_counts() {
        let mut run = RunReport::new();
        run.absorb(WalkReport {
            pages_visited: 3,
            items_processed: 5,
            failures: vec![ItemFailure::new("http://x/1", "boom")],
        });
        run.absorb(WalkReport {
            pages_visited: 1,
            items_processed: 2,
            failures: vec![],
        });

        assert_eq!(run.pages_visited, 4);
        assert_eq!(run.failures.len(), 1);
        assert!(!run.is_complete());
    }

    #[test]
    fn test_empty_report_is_complete() {
        assert!(RunReport::new().is_complete());
    }
}

use std::fmt;

use crate::BusinessRecord;

/// Result of processing one page, as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page fetched and yielded at least one listing.
    Listings(Vec<BusinessRecord>),
    /// Page fetched cleanly but matched no listing fragments.
    Empty,
    /// Network failure or unexpected error while processing the page.
    Failed,
}

/// Controller decision after a page outcome has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop(StopReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Consecutive non-productive pages reached the configured limit.
    FailureThreshold,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::FailureThreshold => {
                write!(f, "consecutive-failure threshold reached")
            }
        }
    }
}

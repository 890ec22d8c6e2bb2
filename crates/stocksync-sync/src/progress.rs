//! Push progress reporting.

/// Push phase of a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Stock import.
    Stocks,
    /// Price import.
    Prices,
}

impl Phase {
    /// Returns the phase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::Prices => "prices",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Receives push progress. All methods default to doing nothing.
pub trait SyncProgress: Send + Sync {
    /// A phase is about to push `items` updates.
    fn phase_started(&self, _phase: Phase, _items: usize) {}

    /// One batch of `items` updates was accepted.
    fn batch_pushed(&self, _phase: Phase, _items: usize) {}

    /// A phase pushed its last batch.
    fn phase_finished(&self, _phase: Phase) {}
}

/// Progress sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl SyncProgress for NoProgress {}

use strata_core::State;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Simulation time reached the configured horizon.
    ReachedHorizon,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a multi-rate run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// State after the last processed event.
    pub state: State,

    /// Number of spring layers driven by the run.
    pub layers: usize,

    /// Firing count per source, indexed by [`Source::index`](super::Source::index).
    pub firings: Vec<u64>,
}

impl Solution {
    /// Returns the total number of processed events.
    #[must_use]
    pub fn events(&self) -> u64 {
        self.firings.iter().sum()
    }
}

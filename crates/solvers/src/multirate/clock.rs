use std::fmt;

use strata_physics::Layer;

/// The origin of a scheduled update.
///
/// Sources are ordered with [`Source::Global`] first and layers by index,
/// which is also the order in which clocks with identical firing times are
/// processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    /// The global clock: integrates gravity and triggers output.
    Global,

    /// A spring layer's force update.
    Layer(Layer),
}

impl Source {
    /// Returns the source index: 0 for the global clock, `i` for layer `i`.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Global => 0,
            Self::Layer(layer) => usize::try_from(layer.index()).unwrap_or(usize::MAX),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Layer(layer) => write!(f, "layer {layer}"),
        }
    }
}

/// A periodic update source.
///
/// The period is fixed at construction. Each [`advance`](Clock::advance)
/// moves the next firing time forward by exactly one period, so a clock
/// fires at `period`, `2·period`, ... as accumulated in floating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    next_time: f64,
    period: f64,
    source: Source,
}

impl Clock {
    /// Creates a clock whose first firing is one period after time zero.
    #[must_use]
    pub fn new(source: Source, period: f64) -> Self {
        Self {
            next_time: period,
            period,
            source,
        }
    }

    /// Returns the time of the next firing.
    #[must_use]
    pub fn next_time(&self) -> f64 {
        self.next_time
    }

    /// Returns the fixed period of this clock.
    #[must_use]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Returns the source this clock drives.
    #[must_use]
    pub fn source(&self) -> Source {
        self.source
    }

    /// Moves the next firing time forward by one period.
    pub fn advance(&mut self) {
        self.next_time += self.period;
    }
}

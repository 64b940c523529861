use strata_core::State;
use strata_physics::{Energy, Parameters};

use super::Source;

/// Event emitted by the multi-rate solver after each clock firing.
///
/// The state reflects the position drift and velocity kick of this firing,
/// with `state.time` equal to the firing time. Energy is computed on demand,
/// so observers that ignore it pay nothing.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The clock that fired.
    pub source: Source,

    /// The period of the clock that fired.
    pub period: f64,

    /// Simulation state after the firing.
    pub state: State,

    /// Number of spring layers in the run.
    pub layers: usize,

    params: &'a Parameters,
}

impl<'a> Event<'a> {
    /// Creates an event for `state` in a run with `layers` active layers.
    #[must_use]
    pub fn new(
        params: &'a Parameters,
        source: Source,
        period: f64,
        state: State,
        layers: usize,
    ) -> Self {
        Self {
            source,
            period,
            state,
            layers,
            params,
        }
    }

    /// Returns the firing time.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.state.time
    }

    /// Returns `true` if the global clock fired.
    ///
    /// Only global events are meant for output.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.source == Source::Global
    }

    /// Returns the total mechanical energy over all layers of the run.
    #[must_use]
    pub fn energy(&self) -> f64 {
        self.params.total_energy(self.layers, &self.state)
    }

    /// Returns the energy split into kinetic, gravitational, and spring terms.
    #[must_use]
    pub fn energy_breakdown(&self) -> Energy {
        self.params.energy(self.layers, &self.state)
    }
}

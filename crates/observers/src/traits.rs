//! Capability traits for generic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused with any solver whose events
//! expose the needed quantities.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that carry a simulation time
//! - [`HasPosition`] — events that carry the position of the mass
//! - [`HasEnergy`] — events that can report total mechanical energy
//! - [`IsOutputEvent`] — events that may be selected for output
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use strata_core::Observer;
//! use strata_observers::traits::{CanStopEarly, HasEnergy};
//!
//! struct EnergyCeiling {
//!     limit: f64,
//! }
//!
//! impl<E: HasEnergy, A: CanStopEarly> Observer<E, A> for EnergyCeiling {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.energy() > self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use strata_solvers::multirate;

/// An event that carries a simulation time.
pub trait HasTime {
    /// Returns the simulation time of this event.
    fn time(&self) -> f64;
}

/// An event that carries the position of the mass.
pub trait HasPosition {
    /// Returns the position at this event.
    fn position(&self) -> f64;
}

/// An event that can report total mechanical energy.
pub trait HasEnergy {
    /// Returns the total energy at this event.
    fn energy(&self) -> f64;
}

/// An event that may be selected for output.
pub trait IsOutputEvent {
    /// Returns `true` if this event should produce output.
    fn is_output(&self) -> bool;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- multirate::Event ---

impl HasTime for multirate::Event<'_> {
    fn time(&self) -> f64 {
        self.state.time
    }
}

impl HasPosition for multirate::Event<'_> {
    fn position(&self) -> f64 {
        self.state.x()
    }
}

impl HasEnergy for multirate::Event<'_> {
    fn energy(&self) -> f64 {
        multirate::Event::energy(self)
    }
}

/// Only global-clock firings produce output.
impl IsOutputEvent for multirate::Event<'_> {
    fn is_output(&self) -> bool {
        self.is_global()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for multirate::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

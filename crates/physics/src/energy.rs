use strata_core::{Position, State, Velocity};

use crate::{Layer, Parameters};

/// Mechanical energy of the falling mass, split by source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Energy {
    /// `½ m ẋ²`.
    pub kinetic: f64,

    /// `m g x`, with `x` used directly as height.
    pub gravitational: f64,

    /// Penalty energy summed over the active layers.
    pub spring: f64,
}

impl Energy {
    /// Returns the sum of all contributions.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.kinetic + self.gravitational + self.spring
    }
}

impl Parameters {
    /// Returns the energy breakdown of `state` against the first `layers` layers.
    ///
    /// Passing `layers = 0` leaves out the spring term entirely.
    #[must_use]
    pub fn energy(&self, layers: usize, state: &State) -> Energy {
        Energy {
            kinetic: self.kinetic_energy(state.velocity),
            gravitational: self.gravitational_energy(state.position),
            spring: self.spring_energy(layers, state.position),
        }
    }

    /// Returns the total mechanical energy of `state` with `layers` active layers.
    #[must_use]
    pub fn total_energy(&self, layers: usize, state: &State) -> f64 {
        self.energy(layers, state).total()
    }

    /// Returns the kinetic energy at velocity `xdot`.
    #[must_use]
    pub fn kinetic_energy(&self, xdot: Velocity) -> f64 {
        0.5 * self.mass() * xdot.0 * xdot.0
    }

    /// Returns the gravitational energy at height `x`.
    #[must_use]
    pub fn gravitational_energy(&self, x: Position) -> f64 {
        self.mass() * self.gravity() * x.0
    }

    /// Returns the penalty energy of layers `1..=layers` at position `x`.
    #[must_use]
    pub fn spring_energy(&self, layers: usize, x: Position) -> f64 {
        Layer::up_to(layers)
            .map(|layer| self.potential(layer, x))
            .sum()
    }
}

//! Physical model for a point mass falling onto a stack of penalty springs.
//!
//! The stack is built from discrete [`Layer`]s indexed from 1. Layer `i`
//! engages below its cutoff `1 / i` with stiffness `base_stiffness * i²`, so
//! outer layers are soft and far-reaching while inner layers are stiff and
//! short-range. Everything here is pure arithmetic over [`Parameters`]:
//!
//! - [`Parameters::potential`] and [`Parameters::force`] — per-layer harmonic
//!   penalty energy and restoring force
//! - [`Parameters::energy`] and [`Parameters::total_energy`] — mechanical
//!   energy of the mass against gravity and the active layers

mod energy;
mod layer;
mod parameters;

pub use energy::Energy;
pub use layer::{Layer, Layers};
pub use parameters::{ParameterError, Parameters};

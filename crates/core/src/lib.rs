//! Core traits and types for the Strata multi-rate integrator.
//!
//! This crate defines the shared abstractions that the physics model, the
//! solver, and the observers build on:
//!
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`StepIntegrable`] — a value that can be stepped by its derivative
//! - [`Position`], [`Velocity`], [`Acceleration`] — the scalar kinematic
//!   quantities of the falling mass, linked through [`StepIntegrable`]
//! - [`State`] — position, velocity, and current time of the simulation

mod observer;
mod state;
mod step;

pub use observer::Observer;
pub use state::{Acceleration, Position, State, Velocity};
pub use step::{DerivativeOf, StepIntegrable};

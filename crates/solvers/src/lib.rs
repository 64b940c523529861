//! Solvers for the Strata framework.
//!
//! - [`multirate`] — event-driven multi-rate integration of a point mass
//!   against gravity and a stack of penalty-spring layers

pub mod multirate;

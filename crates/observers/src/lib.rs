//! Reusable observers for the Strata framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the events of the Strata solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for generic observers
//!   ([`HasTime`], [`HasPosition`], [`HasEnergy`], [`IsOutputEvent`],
//!   [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceWriter`] — writes the diagnostic log and the CSV energy trace
//! - [`EnergyRecorder`] — collects `(time, energy)` samples in memory
//!
//! [`Observer`]: strata_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasPosition`]: traits::HasPosition
//! [`HasEnergy`]: traits::HasEnergy
//! [`IsOutputEvent`]: traits::IsOutputEvent
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod number;
mod record;
mod trace;

pub use record::EnergyRecorder;
pub use trace::TraceWriter;

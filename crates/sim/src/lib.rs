//! Driver for a point mass falling onto a stack of penalty-spring layers.
//!
//! [`run`] wires the multi-rate solver to the two output streams:
//!
//! - the diagnostic stream receives `Expect to need <n> spring layers` at
//!   startup, then `t: <time> x: <x> E: <energy>` at every global-clock event
//! - the data stream receives `<time>, <energy>` at every global-clock event
//!
//! The `strata-sim` binary runs with the default [`Parameters`] and
//! [`Config`], writing diagnostics to stderr and data to stdout.

mod error;

pub use error::Error;

use std::io::Write;

use strata_observers::TraceWriter;
use strata_physics::Parameters;
use strata_solvers::multirate::{Config, Scheduler, Solution, Status};
use tracing::{info, warn};

/// Runs the simulation and writes both output streams.
///
/// # Errors
///
/// Returns an error if the layer count cannot be estimated or if either
/// stream fails. A write failure ends the run at the failing event.
pub fn run<D, C>(
    params: &Parameters,
    config: &Config,
    diagnostic: D,
    data: C,
) -> Result<Solution, Error>
where
    D: Write,
    C: Write,
{
    let mut scheduler = Scheduler::new(*params, *config)?;
    info!(
        layers = scheduler.layers(),
        horizon = config.horizon(),
        "starting multi-rate run"
    );

    let mut trace = TraceWriter::new(diagnostic, data);
    trace.announce_layers(scheduler.layers())?;

    let solution = scheduler.run(&mut trace);
    let samples = trace.samples();
    trace.finish()?;

    if solution.status == Status::StoppedByObserver {
        warn!(time = solution.state.time, "run stopped before the horizon");
    }
    info!(samples, events = solution.events(), "wrote energy trace");

    Ok(solution)
}

use std::io;

use strata_solvers::multirate;

/// Errors that can occur while driving a simulation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("solver error: {0}")]
    Solver(#[from] multirate::Error),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

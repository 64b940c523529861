use std::io;

use anyhow::Result;
use strata_physics::Parameters;
use strata_solvers::multirate::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Log records share stderr with the diagnostic stream; keep them quiet
    // unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    strata_sim::run(
        &Parameters::default(),
        &Config::default(),
        io::stderr(),
        io::stdout().lock(),
    )?;

    Ok(())
}

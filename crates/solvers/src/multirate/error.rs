/// Errors that can occur while setting up a multi-rate run.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The initial energy is NaN or infinite, so no finite stack can absorb it.
    #[error("starting energy {0} is not finite")]
    NonFiniteEnergy(f64),

    /// The layer count estimate exceeded the configured sanity bound.
    #[error(
        "{limit} spring layers absorb only {capacity} of the starting energy {start_energy}"
    )]
    LayerLimit {
        limit: usize,
        start_energy: f64,
        capacity: f64,
    },
}

use strata_core::{Position, State};
use strata_physics::{Layer, Parameters};

use super::{Config, Error};

/// Outcome of the layer count pre-pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Number of spring layers the scheduler drives.
    pub layers: usize,

    /// Energy of the mass at rest at its initial height, without springs.
    pub start_energy: f64,

    /// Combined penalty energy of all estimated layers at full penetration.
    pub capacity: f64,
}

/// Returns the smallest layer count whose full-penetration energy can absorb
/// the starting energy.
///
/// Accumulates `V(i, 0)` for `i = 1, 2, ...` until the sum reaches the energy
/// of the mass at rest at [`Config::initial_height`]. This is a capacity
/// check, not a guarantee that the trajectory never passes below the stack.
/// A non-positive starting energy needs no layers at all.
///
/// # Errors
///
/// Returns [`Error::NonFiniteEnergy`] if the starting energy is NaN or
/// infinite, and [`Error::LayerLimit`] if more than
/// [`Config::max_layers`] layers would be needed.
pub fn estimate_layers(params: &Parameters, config: &Config) -> Result<Estimate, Error> {
    let start_energy = params.total_energy(0, &State::at_rest(config.initial_height()));
    if !start_energy.is_finite() {
        return Err(Error::NonFiniteEnergy(start_energy));
    }

    let mut stack = Layer::up_to(config.max_layers());
    let mut layers = 0;
    let mut capacity = 0.0;

    while capacity < start_energy {
        let Some(layer) = stack.next() else {
            return Err(Error::LayerLimit {
                limit: config.max_layers(),
                start_energy,
                capacity,
            });
        };
        capacity += params.potential(layer, Position(0.0));
        layers += 1;
    }

    Ok(Estimate {
        layers,
        start_energy,
        capacity,
    })
}

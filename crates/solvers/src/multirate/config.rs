use thiserror::Error;

/// Configuration for the multi-rate solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_height: f64,
    global_timestep: f64,
    horizon: f64,
    max_layers: usize,
}

/// Errors that can occur when validating a multi-rate solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_height must be finite")]
    InitialHeight,

    #[error("global_timestep must be finite and positive")]
    GlobalTimestep,

    #[error("horizon must be finite and non-negative")]
    Horizon,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(2.0, 0.1, 10_000.0, 10_000).unwrap()
    }
}

impl Config {
    /// Creates a new validated config.
    ///
    /// `max_layers` bounds the layer count estimate; a run whose starting
    /// energy needs more layers than this is rejected at setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the height is non-finite, the global timestep is
    /// not strictly positive, or the horizon is negative or non-finite.
    pub fn new(
        initial_height: f64,
        global_timestep: f64,
        horizon: f64,
        max_layers: usize,
    ) -> Result<Self, ConfigError> {
        if !initial_height.is_finite() {
            return Err(ConfigError::InitialHeight);
        }
        if !global_timestep.is_finite() || global_timestep <= 0.0 {
            return Err(ConfigError::GlobalTimestep);
        }
        if !horizon.is_finite() || horizon < 0.0 {
            return Err(ConfigError::Horizon);
        }

        Ok(Self {
            initial_height,
            global_timestep,
            horizon,
            max_layers,
        })
    }

    /// Returns a copy with a different starting height.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InitialHeight`] if `initial_height` is not finite.
    pub fn with_initial_height(self, initial_height: f64) -> Result<Self, ConfigError> {
        Self::new(
            initial_height,
            self.global_timestep,
            self.horizon,
            self.max_layers,
        )
    }

    /// Returns a copy with a different time horizon.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Horizon`] if `horizon` is negative or not finite.
    pub fn with_horizon(self, horizon: f64) -> Result<Self, ConfigError> {
        Self::new(
            self.initial_height,
            self.global_timestep,
            horizon,
            self.max_layers,
        )
    }

    /// Returns a copy with a different layer count bound.
    #[must_use]
    pub fn with_max_layers(self, max_layers: usize) -> Self {
        Self { max_layers, ..self }
    }

    /// Returns the height the mass is released from.
    #[must_use]
    pub fn initial_height(&self) -> f64 {
        self.initial_height
    }

    /// Returns the period of the global (gravity and output) clock.
    #[must_use]
    pub fn global_timestep(&self) -> f64 {
        self.global_timestep
    }

    /// Returns the simulation time at which the run stops.
    #[must_use]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the upper bound on the estimated layer count.
    #[must_use]
    pub fn max_layers(&self) -> usize {
        self.max_layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_run() {
        let config = Config::default();

        assert_eq!(config.initial_height(), 2.0);
        assert_eq!(config.global_timestep(), 0.1);
        assert_eq!(config.horizon(), 10_000.0);
        assert_eq!(config.max_layers(), 10_000);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            Config::new(f64::NAN, 0.1, 1.0, 10),
            Err(ConfigError::InitialHeight)
        );
        assert_eq!(
            Config::new(2.0, 0.0, 1.0, 10),
            Err(ConfigError::GlobalTimestep)
        );
        assert_eq!(Config::new(2.0, 0.1, -1.0, 10), Err(ConfigError::Horizon));
        assert_eq!(
            Config::default().with_horizon(f64::INFINITY),
            Err(ConfigError::Horizon)
        );
    }

    #[test]
    fn zero_horizon_is_allowed() {
        assert!(Config::default().with_horizon(0.0).is_ok());
    }
}

use thiserror::Error;

/// Physical parameters of the falling mass and the spring stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    mass: f64,
    gravity: f64,
    base_stiffness: f64,
    base_timestep: f64,
}

/// Errors that can occur when validating physical parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("mass must be finite and positive")]
    Mass,

    #[error("gravity must be finite and positive")]
    Gravity,

    #[error("base_stiffness must be finite and positive")]
    BaseStiffness,

    #[error("base_timestep must be finite and positive")]
    BaseTimestep,
}

impl Default for Parameters {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(10.0, 9.8, 100.0, 0.01).unwrap()
    }
}

impl Parameters {
    /// Creates a new set of validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or not strictly positive.
    pub fn new(
        mass: f64,
        gravity: f64,
        base_stiffness: f64,
        base_timestep: f64,
    ) -> Result<Self, ParameterError> {
        if !is_positive(mass) {
            return Err(ParameterError::Mass);
        }
        if !is_positive(gravity) {
            return Err(ParameterError::Gravity);
        }
        if !is_positive(base_stiffness) {
            return Err(ParameterError::BaseStiffness);
        }
        if !is_positive(base_timestep) {
            return Err(ParameterError::BaseTimestep);
        }

        Ok(Self {
            mass,
            gravity,
            base_stiffness,
            base_timestep,
        })
    }

    /// Returns a copy with a different mass.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Mass`] if `mass` is invalid.
    pub fn with_mass(self, mass: f64) -> Result<Self, ParameterError> {
        Self::new(mass, self.gravity, self.base_stiffness, self.base_timestep)
    }

    /// Returns a copy with a different base stiffness.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::BaseStiffness`] if `base_stiffness` is invalid.
    pub fn with_base_stiffness(self, base_stiffness: f64) -> Result<Self, ParameterError> {
        Self::new(self.mass, self.gravity, base_stiffness, self.base_timestep)
    }

    /// Returns a copy with a different base timestep.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::BaseTimestep`] if `base_timestep` is invalid.
    pub fn with_base_timestep(self, base_timestep: f64) -> Result<Self, ParameterError> {
        Self::new(self.mass, self.gravity, self.base_stiffness, base_timestep)
    }

    /// Returns the mass of the falling point.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns the magnitude of the gravitational acceleration.
    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Returns the stiffness of layer 1.
    #[must_use]
    pub fn base_stiffness(&self) -> f64 {
        self.base_stiffness
    }

    /// Returns the update period of layer 1.
    #[must_use]
    pub fn base_timestep(&self) -> f64 {
        self.base_timestep
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

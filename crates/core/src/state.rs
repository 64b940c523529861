use std::fmt;

use crate::StepIntegrable;

/// Height of the falling mass above the bottom of the layer stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Position(pub f64);

/// Rate of change of [`Position`]; negative values point down.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Velocity(pub f64);

/// Rate of change of [`Velocity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Acceleration(pub f64);

impl StepIntegrable<f64> for Position {
    type Derivative = Velocity;

    fn step(&self, derivative: Velocity, delta: f64) -> Self {
        Position(self.0 + derivative.0 * delta)
    }
}

impl StepIntegrable<f64> for Velocity {
    type Derivative = Acceleration;

    fn step(&self, derivative: Acceleration, delta: f64) -> Self {
        Velocity(self.0 + derivative.0 * delta)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The dynamic state of the falling mass.
///
/// A single `State` is owned by the solver and mutated only while an event is
/// being processed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    pub position: Position,
    pub velocity: Velocity,
    pub time: f64,
}

impl State {
    /// Creates a state at rest at the given height and time zero.
    #[must_use]
    pub fn at_rest(height: f64) -> Self {
        Self {
            position: Position(height),
            velocity: Velocity(0.0),
            time: 0.0,
        }
    }

    /// Returns the position as a raw scalar.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.0
    }

    /// Returns the velocity as a raw scalar.
    #[must_use]
    pub fn xdot(&self) -> f64 {
        self.velocity.0
    }
}

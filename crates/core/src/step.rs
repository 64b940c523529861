/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the solver advance a quantity via
/// `value + derivative * delta`, where the derivative is with respect to
/// `Delta`. In Strata `Delta` is always simulation time as a plain `f64`, but
/// the trait does not depend on that.
///
/// The multi-rate scheduler uses two such steps per event: a drift of
/// [`Position`](crate::Position) by [`Velocity`](crate::Velocity), and a kick
/// of [`Velocity`](crate::Velocity) by [`Acceleration`](crate::Acceleration).
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

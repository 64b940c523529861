use std::{fmt, iter::FusedIterator, num::NonZeroU32, ops::Range};

use strata_core::Position;

use crate::Parameters;

/// One penalty-spring layer of the stack, indexed from 1.
///
/// Layers carry no mutable state. Their cutoff, stiffness, and timestep are
/// derived from the index (and [`Parameters`]) on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Layer(NonZeroU32);

impl Layer {
    /// The outermost, softest layer.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a layer from its index, or `None` if `index` is zero.
    #[must_use]
    pub fn new(index: u32) -> Option<Self> {
        NonZeroU32::new(index).map(Self)
    }

    /// Returns an iterator over layers `1..=count`.
    #[must_use]
    pub fn up_to(count: usize) -> Layers {
        let end = u32::try_from(count).map_or(u32::MAX, |last| last.saturating_add(1));
        Layers { indices: 1..end }
    }

    /// Returns the layer index (always at least 1).
    #[must_use]
    pub fn index(self) -> u32 {
        self.0.get()
    }

    /// Returns the extension below which this layer exerts force.
    #[must_use]
    pub fn cutoff(self) -> f64 {
        1.0 / f64::from(self.index())
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Iterator over consecutive layers starting at [`Layer::FIRST`].
///
/// Created by [`Layer::up_to`].
#[derive(Debug, Clone)]
pub struct Layers {
    indices: Range<u32>,
}

impl Iterator for Layers {
    type Item = Layer;

    fn next(&mut self) -> Option<Layer> {
        self.indices.next().and_then(Layer::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for Layers {}

impl FusedIterator for Layers {}

impl Parameters {
    /// Returns the spring constant of `layer`: `base_stiffness · i²`.
    #[must_use]
    pub fn stiffness(&self, layer: Layer) -> f64 {
        let i = f64::from(layer.index());
        self.base_stiffness() * i * i
    }

    /// Returns the update period of `layer`: `base_timestep / i`.
    #[must_use]
    pub fn timestep(&self, layer: Layer) -> f64 {
        self.base_timestep() / f64::from(layer.index())
    }

    /// Returns the penalty energy stored in `layer` at position `x`.
    ///
    /// Zero at or above the cutoff, `½ k (c − x)²` below it.
    #[must_use]
    pub fn potential(&self, layer: Layer, x: Position) -> f64 {
        match penetration(layer, x) {
            Some(depth) => 0.5 * self.stiffness(layer) * depth * depth,
            None => 0.0,
        }
    }

    /// Returns the restoring force of `layer` at position `x`.
    ///
    /// Zero at or above the cutoff, `k (c − x)` below it. The force is
    /// `−dV/dx`, so it is positive and pushes the mass back up.
    #[must_use]
    pub fn force(&self, layer: Layer, x: Position) -> f64 {
        match penetration(layer, x) {
            Some(depth) => self.stiffness(layer) * depth,
            None => 0.0,
        }
    }
}

/// Returns how far `x` sits below the cutoff of `layer`, if at all.
fn penetration(layer: Layer, x: Position) -> Option<f64> {
    let cutoff = layer.cutoff();
    (x.0 < cutoff).then(|| cutoff - x.0)
}

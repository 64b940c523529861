use strata_core::Observer;

use crate::traits::{HasEnergy, HasTime, IsOutputEvent};

/// An observer that collects `[time, energy]` samples at output events.
///
/// Useful for checking that a run conserves energy within a band, or for
/// comparing a run against a stored reference trace.
#[derive(Debug, Clone, Default)]
pub struct EnergyRecorder {
    samples: Vec<[f64; 2]>,
}

impl EnergyRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded samples in event order.
    #[must_use]
    pub fn samples(&self) -> &[[f64; 2]] {
        &self.samples
    }

    /// Consumes the recorder and returns its samples.
    #[must_use]
    pub fn into_samples(self) -> Vec<[f64; 2]> {
        self.samples
    }

    /// Returns the smallest and largest recorded energy, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.samples.iter().map(|[_, e]| *e).fold(None, |acc, e| {
            Some(match acc {
                None => (e, e),
                Some((lo, hi)) => (lo.min(e), hi.max(e)),
            })
        })
    }

    /// Returns the largest deviation of any sample from the first one.
    #[must_use]
    pub fn max_drift(&self) -> Option<f64> {
        let [_, first] = *self.samples.first()?;
        self.samples
            .iter()
            .map(|[_, e]| (e - first).abs())
            .reduce(f64::max)
    }
}

impl<E, A> Observer<E, A> for EnergyRecorder
where
    E: HasTime + HasEnergy + IsOutputEvent,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.is_output() {
            self.samples.push([event.time(), event.energy()]);
        }
        None
    }
}

/// Allows `&mut EnergyRecorder` to be passed to solvers that take an observer
/// by value.
impl<E, A> Observer<E, A> for &mut EnergyRecorder
where
    E: HasTime + HasEnergy + IsOutputEvent,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use strata_physics::Parameters;
    use strata_solvers::multirate::{self, Config};

    #[test]
    fn empty_recorder_has_no_bounds() {
        let recorder = EnergyRecorder::new();

        assert!(recorder.samples().is_empty());
        assert_eq!(recorder.bounds(), None);
        assert_eq!(recorder.max_drift(), None);
    }

    #[test]
    fn records_only_global_events_from_a_run() {
        let config = Config::default().with_horizon(2.0).unwrap();
        let mut recorder = EnergyRecorder::new();

        let solution =
            multirate::solve(&Parameters::default(), &config, &mut recorder).expect("should solve");

        assert_eq!(recorder.samples().len() as u64, solution.firings[0]);
        assert_relative_eq!(recorder.samples()[0][0], 0.1);
        assert_relative_eq!(recorder.samples()[0][1], 200.802, max_relative = 1e-12);

        let (lo, hi) = recorder.bounds().unwrap();
        assert!(lo <= hi);
        assert!(recorder.max_drift().unwrap() >= 0.0);

        let samples = recorder.into_samples();
        assert_eq!(samples.len(), 20);
        assert_relative_eq!(samples[19][0], 2.0, max_relative = 1e-9);
        assert!(samples.windows(2).all(|pair| pair[0][0] < pair[1][0]));
    }

    #[test]
    fn energy_stays_in_band_over_a_long_run() {
        let config = Config::default().with_horizon(200.0).unwrap();
        let mut recorder = EnergyRecorder::new();

        multirate::solve(&Parameters::default(), &config, &mut recorder).expect("should solve");

        let (lo, hi) = recorder.bounds().unwrap();
        assert!(lo > 160.0, "energy fell to {lo}");
        assert!(hi < 230.0, "energy rose to {hi}");
    }
}

//! Event-driven multi-rate solver for a mass falling onto spring layers.
//!
//! # Algorithm
//!
//! Every force source owns a [`Clock`] with a fixed period: the global clock
//! (gravity and output) runs at [`Config::global_timestep`], and layer `i`
//! runs at `base_timestep / i`. Clocks sit in an [`EventQueue`] ordered by
//! their next firing time. Each event drifts the shared position up to the
//! firing time, then kicks the velocity by that source's acceleration scaled
//! by the clock's *own* period:
//!
//! ```text
//! x    ← x + ẋ · (t_fire − t)
//! ẋ    ← ẋ + period · a_source(x)
//! t    ← t_fire
//! ```
//!
//! Stiff inner layers are therefore updated often and soft outer layers
//! rarely, while all of them share one position trajectory recombined in
//! strict time order.
//!
//! Before the run, [`estimate_layers`] sizes the stack so that the
//! full-penetration energy of its layers covers the energy of the mass at
//! rest at its initial height.
//!
//! # Ordering
//!
//! Events fire in non-decreasing time order. Clocks whose next firing times
//! are bit-identical fire in [`Source`] order: the global clock first, then
//! layers by ascending index. Identical inputs always produce identical
//! event sequences.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per firing. Observers can return
//! [`Action::StopEarly`] to halt before the horizon.
//!
//! # Example
//!
//! ```
//! use strata_physics::Parameters;
//! use strata_solvers::multirate::{self, Config, Status};
//!
//! let config = Config::default().with_horizon(1.0)?;
//! let solution = multirate::solve_unobserved(&Parameters::default(), &config)?;
//!
//! assert_eq!(solution.status, Status::ReachedHorizon);
//! assert_eq!(solution.layers, 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod clock;
mod config;
mod error;
mod estimate;
mod event;
mod queue;
mod scheduler;
mod solution;

pub use action::Action;
pub use clock::{Clock, Source};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use estimate::{Estimate, estimate_layers};
pub use event::Event;
pub use queue::EventQueue;
pub use scheduler::Scheduler;
pub use solution::{Solution, Status};

use strata_core::Observer;
use strata_physics::Parameters;

/// Runs the multi-rate solver from rest until the configured horizon.
///
/// The observer receives an [`Event`] for every clock firing and may return
/// [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns an error if the layer count cannot be estimated.
pub fn solve<Obs>(params: &Parameters, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut scheduler = Scheduler::new(*params, *config)?;
    Ok(scheduler.run(observer))
}

/// Runs the multi-rate solver without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the layer count cannot be estimated.
pub fn solve_unobserved(params: &Parameters, config: &Config) -> Result<Solution, Error> {
    solve(params, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use strata_core::State;

    fn config(horizon: f64) -> Config {
        Config::default().with_horizon(horizon).unwrap()
    }

    /// Global-clock samples of `(time, x, energy)`.
    fn global_trace(horizon: f64) -> Vec<(f64, f64, f64)> {
        let mut trace = Vec::new();
        solve(
            &Parameters::default(),
            &config(horizon),
            |event: &Event<'_>| {
                if event.is_global() {
                    trace.push((event.time(), event.state.x(), event.energy()));
                }
                None
            },
        )
        .expect("should solve");
        trace
    }

    #[test]
    fn zero_horizon_processes_nothing() {
        let solution = solve_unobserved(&Parameters::default(), &config(0.0)).expect("should solve");

        assert_eq!(solution.status, Status::ReachedHorizon);
        assert_eq!(solution.events(), 0);
        assert_eq!(solution.state, State::at_rest(2.0));
    }

    #[test]
    fn first_global_samples_match_hand_computation() {
        let trace = global_trace(0.35);

        // No layer is engaged while x > 1, so only gravity acts:
        // t = 0.1: ẋ = -0.98, x still 2.
        // t = 0.2: x = 2 - 0.098, ẋ = -1.96.
        assert_eq!(trace.len(), 3);
        assert_relative_eq!(trace[0].0, 0.1);
        assert_relative_eq!(trace[0].1, 2.0);
        assert_relative_eq!(trace[0].2, 200.802, max_relative = 1e-12);
        assert_relative_eq!(trace[1].1, 1.902, max_relative = 1e-12);
        assert_relative_eq!(trace[1].2, 205.604, max_relative = 1e-12);
        assert_relative_eq!(trace[2].1, 1.706, max_relative = 1e-12);
    }

    #[test]
    fn one_second_firing_counts() {
        let solution = solve_unobserved(&Parameters::default(), &config(1.0)).expect("should solve");

        assert_eq!(solution.layers, 4);
        assert_eq!(solution.firings, vec![10, 100, 199, 300, 400]);
        assert_eq!(solution.events(), 1009);
        assert!(solution.state.time >= 1.0);
    }

    #[test]
    fn events_arrive_in_time_order() {
        let mut last = 0.0;
        let mut count = 0_u64;

        let solution = solve(
            &Parameters::default(),
            &config(5.0),
            |event: &Event<'_>| {
                assert!(event.time() >= last);
                last = event.time();
                count += 1;
                None
            },
        )
        .expect("should solve");

        assert_eq!(count, solution.events());
    }

    #[test]
    fn observer_can_stop_early() {
        let mut globals = 0;
        let solution = solve(
            &Parameters::default(),
            &config(100.0),
            |event: &Event<'_>| {
                if event.is_global() {
                    globals += 1;
                }
                (globals == 5).then_some(Action::StopEarly)
            },
        )
        .expect("should stop early");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.firings[0], 5);
        assert_relative_eq!(solution.state.time, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn energy_stays_bounded() {
        let trace = global_trace(100.0);

        assert_eq!(trace.len(), 1000);
        for &(time, _, energy) in &trace {
            assert!(
                (160.0..230.0).contains(&energy),
                "energy {energy} out of bounds at t = {time}"
            );
        }

        // Last sample of the reference trace.
        let (time, x, energy) = trace[trace.len() - 1];
        assert_relative_eq!(time, 100.0, max_relative = 1e-9);
        assert_relative_eq!(x, 1.809_759_523_656_364_6, max_relative = 1e-9);
        assert_relative_eq!(energy, 206.093_111_028_026_47, max_relative = 1e-9);
    }

    #[test]
    fn default_run_to_full_horizon() {
        let params = Parameters::default();
        let config = Config::default();

        let mut samples = 0_u64;
        let mut low = f64::INFINITY;
        let mut high = f64::NEG_INFINITY;
        let mut last = (0.0, 0.0, 0.0);
        let mut lowest = f64::INFINITY;

        let solution = solve(&params, &config, |event: &Event<'_>| {
            lowest = lowest.min(event.state.x());
            if event.is_global() {
                let energy = event.energy();
                samples += 1;
                low = low.min(energy);
                high = high.max(energy);
                last = (event.time(), event.state.x(), energy);
            }
            None
        })
        .expect("should solve");

        assert_eq!(solution.status, Status::ReachedHorizon);
        assert_eq!(solution.layers, 4);
        assert_eq!(samples, 100_000);
        assert_eq!(
            solution.firings,
            vec![100_000, 999_999, 2_000_000, 2_999_999, 4_000_000]
        );

        // Energy oscillates in a band around the starting 196 J.
        assert!(low > 164.0 && high < 225.0, "energy band [{low}, {high}]");
        assert_relative_eq!(low, 164.845_070_211_516_4, max_relative = 1e-9);
        assert_relative_eq!(high, 224.866_835_585_735, max_relative = 1e-9);

        // The mass sinks slightly below the origin at its deepest point.
        assert_relative_eq!(lowest, -0.001_244_911_870_537_306_5, max_relative = 1e-9);

        let (time, x, energy) = last;
        assert_relative_eq!(time, 10_000.000_000_018_848, max_relative = 1e-12);
        assert_relative_eq!(x, 1.916_992_581_557_617, max_relative = 1e-9);
        assert_relative_eq!(energy, 191.116_954_776_795_75, max_relative = 1e-9);
    }

    #[test]
    fn repeated_runs_are_identical() {
        // The reference run contains simultaneous firings, so this pins the
        // tie-break order as well.
        let first = global_trace(20.0);
        let second = global_trace(20.0);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.0.to_bits(), b.0.to_bits());
            assert_eq!(a.1.to_bits(), b.1.to_bits());
            assert_eq!(a.2.to_bits(), b.2.to_bits());
        }
    }

    #[test]
    fn queue_holds_one_clock_per_source_during_a_run() {
        let mut scheduler = Scheduler::new(Parameters::default(), config(10.0)).unwrap();
        let expected: Vec<Source> = std::iter::once(Source::Global)
            .chain(strata_physics::Layer::up_to(4).map(Source::Layer))
            .collect();

        for _ in 0..10_000 {
            let fired = scheduler.step().map(|event| (event.source, event.time(), event.period));
            let (source, time, period) = fired.expect("queue is never empty");

            let mut queued: Vec<Source> = scheduler.queue().iter().map(Clock::source).collect();
            queued.sort();
            assert_eq!(queued, expected);

            let clock = scheduler
                .queue()
                .iter()
                .find(|clock| clock.source() == source)
                .unwrap();
            assert_eq!(clock.next_time(), time + period);
        }
    }

    #[test]
    fn scheduler_reports_its_progress() {
        let params = Parameters::default();
        let config = config(1.0);
        let mut scheduler = Scheduler::new(params, config).unwrap();

        assert_eq!(scheduler.params(), &params);
        assert_eq!(scheduler.config(), &config);
        assert_eq!(scheduler.estimate().layers, 4);
        assert_relative_eq!(scheduler.estimate().start_energy, 196.0, max_relative = 1e-12);
        assert!(scheduler.estimate().capacity >= scheduler.estimate().start_energy);
        assert_eq!(scheduler.state(), &State::at_rest(2.0));
        assert_eq!(scheduler.firings(), &[0, 0, 0, 0, 0]);

        // The innermost layer has the shortest period and fires first.
        let time = scheduler.step().map(|event| event.time()).unwrap();
        assert_relative_eq!(time, 0.0025);
        assert_eq!(scheduler.firings(), &[0, 0, 0, 0, 1]);
        assert_eq!(scheduler.state().time, time);

        let solution = scheduler.run(());
        assert_eq!(scheduler.firings(), solution.firings.as_slice());
        assert_eq!(scheduler.firings(), &[10, 100, 199, 300, 400]);
        assert_eq!(scheduler.state(), &solution.state);
        assert!(scheduler.is_finished());
    }

    #[test]
    fn estimation_errors_surface_before_running() {
        let params = Parameters::default().with_base_stiffness(1.0).unwrap();
        let config = config(1.0).with_max_layers(16);

        let err = solve_unobserved(&params, &config).expect_err("should fail");

        assert!(matches!(err, Error::LayerLimit { limit: 16, .. }));
    }
}

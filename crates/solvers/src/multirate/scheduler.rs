use strata_core::{Acceleration, Observer, State, StepIntegrable};
use strata_physics::{Layer, Parameters};
use tracing::{debug, info};

use super::{
    Action, Clock, Config, Error, Estimate, Event, EventQueue, Solution, Source, Status,
    estimate_layers,
};

/// Event-driven multi-rate integrator.
///
/// Holds one [`Clock`] per source in an [`EventQueue`] and a single shared
/// [`State`]. Each [`step`](Scheduler::step) fires the earliest clock:
///
/// 1. drift the position by the current velocity up to the firing time,
/// 2. kick the velocity by the source's acceleration times the clock's own
///    period (`−g` for the global clock, `F(i, x) / m` for layer `i`),
/// 3. set the current time to the firing time,
/// 4. re-enqueue the clock one period later.
///
/// The scheduler has no terminal state of its own; [`run`](Scheduler::run)
/// stops once the current time reaches [`Config::horizon`].
#[derive(Debug, Clone)]
pub struct Scheduler {
    params: Parameters,
    config: Config,
    estimate: Estimate,
    queue: EventQueue,
    state: State,
    firings: Vec<u64>,
}

impl Scheduler {
    /// Estimates the layer count and seeds one clock per source.
    ///
    /// # Errors
    ///
    /// Returns an error if the layer count cannot be estimated.
    pub fn new(params: Parameters, config: Config) -> Result<Self, Error> {
        let estimate = estimate_layers(&params, &config)?;
        debug!(
            layers = estimate.layers,
            start_energy = estimate.start_energy,
            capacity = estimate.capacity,
            "estimated spring layer count"
        );

        let mut queue = EventQueue::with_capacity(estimate.layers + 1);
        queue.push(Clock::new(Source::Global, config.global_timestep()));
        queue.extend(
            Layer::up_to(estimate.layers)
                .map(|layer| Clock::new(Source::Layer(layer), params.timestep(layer))),
        );
        debug!(clocks = queue.len(), "seeded event queue");

        Ok(Self {
            params,
            config,
            estimate,
            queue,
            state: State::at_rest(config.initial_height()),
            firings: vec![0; estimate.layers + 1],
        })
    }

    /// Returns the physical parameters of the run.
    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the layer count estimate made at construction.
    #[must_use]
    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    /// Returns the number of spring layers being driven.
    #[must_use]
    pub fn layers(&self) -> usize {
        self.estimate.layers
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the pending clocks.
    #[must_use]
    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    /// Returns the firing count per source index so far.
    #[must_use]
    pub fn firings(&self) -> &[u64] {
        &self.firings
    }

    /// Returns `true` once the current time has reached the horizon.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.time >= self.config.horizon()
    }

    /// Fires the earliest clock and returns the resulting event.
    ///
    /// Ignores the horizon. Returns `None` only if the queue is empty, which
    /// cannot happen for a scheduler built by [`Scheduler::new`] because
    /// every fired clock is pushed back.
    pub fn step(&mut self) -> Option<Event<'_>> {
        let mut clock = self.queue.pop()?;
        let source = clock.source();

        let deltat = clock.next_time() - self.state.time;
        self.state.position = self.state.position.step(self.state.velocity, deltat);

        let acceleration = self.acceleration(source);
        self.state.velocity = self.state.velocity.step(acceleration, clock.period());
        self.state.time = clock.next_time();

        if let Some(count) = self.firings.get_mut(source.index()) {
            *count += 1;
        }

        let event = Event::new(
            &self.params,
            source,
            clock.period(),
            self.state,
            self.estimate.layers,
        );

        clock.advance();
        self.queue.push(clock);

        Some(event)
    }

    /// Steps until the horizon is reached or the observer stops the run.
    ///
    /// The observer sees every event, global and layer alike.
    pub fn run<Obs>(&mut self, mut observer: Obs) -> Solution
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let mut status = Status::ReachedHorizon;

        while !self.is_finished() {
            let Some(event) = self.step() else {
                break;
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                status = Status::StoppedByObserver;
                break;
            }
        }

        info!(
            ?status,
            time = self.state.time,
            events = self.firings.iter().sum::<u64>(),
            "multi-rate run finished"
        );

        Solution {
            status,
            state: self.state,
            layers: self.estimate.layers,
            firings: self.firings.clone(),
        }
    }

    fn acceleration(&self, source: Source) -> Acceleration {
        match source {
            Source::Global => Acceleration(-self.params.gravity()),
            Source::Layer(layer) => {
                Acceleration(self.params.force(layer, self.state.position) / self.params.mass())
            }
        }
    }
}

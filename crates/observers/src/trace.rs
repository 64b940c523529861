//! Text output for a multi-rate run.
//!
//! See [`TraceWriter`].

use std::io::{self, Write};

use strata_core::Observer;

use crate::number::General;
use crate::traits::{CanStopEarly, HasEnergy, HasPosition, HasTime, IsOutputEvent};

/// An observer that writes the diagnostic log and the CSV energy trace.
///
/// For every output event it appends one line to each stream:
///
/// ```text
/// diagnostic: t: <time> x: <position> E: <energy>
/// data:       <time>, <energy>
/// ```
///
/// Numbers are written with six significant digits, in the style of C's
/// `%g`. The data stream has no header row. Non-output events are ignored.
///
/// Observers cannot return errors, so the first I/O failure is stored, the
/// solver is asked to stop, and [`finish`](TraceWriter::finish) reports it.
///
/// # Example
///
/// ```ignore
/// let mut trace = TraceWriter::new(io::stderr(), io::stdout().lock());
/// trace.announce_layers(scheduler.layers())?;
/// scheduler.run(&mut trace);
/// trace.finish()?;
/// ```
#[derive(Debug)]
pub struct TraceWriter<D, C> {
    diagnostic: D,
    data: C,
    samples: u64,
    error: Option<io::Error>,
}

impl<D: Write, C: Write> TraceWriter<D, C> {
    /// Creates a writer over a diagnostic stream and a data stream.
    pub fn new(diagnostic: D, data: C) -> Self {
        Self {
            diagnostic,
            data,
            samples: 0,
            error: None,
        }
    }

    /// Writes the startup line announcing the layer count.
    ///
    /// # Errors
    ///
    /// Returns an error if the diagnostic stream cannot be written.
    pub fn announce_layers(&mut self, layers: usize) -> io::Result<()> {
        writeln!(self.diagnostic, "Expect to need {layers} spring layers")
    }

    /// Returns the number of samples written so far.
    #[must_use]
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Flushes both streams and returns them.
    ///
    /// # Errors
    ///
    /// Returns the first write error seen while observing, or a flush error.
    pub fn finish(self) -> io::Result<(D, C)> {
        let Self {
            mut diagnostic,
            mut data,
            error,
            ..
        } = self;

        if let Some(err) = error {
            return Err(err);
        }
        diagnostic.flush()?;
        data.flush()?;

        Ok((diagnostic, data))
    }

    fn write_sample(&mut self, time: f64, position: f64, energy: f64) -> io::Result<()> {
        let (time, position, energy) = (General(time), General(position), General(energy));
        writeln!(self.diagnostic, "t: {time} x: {position} E: {energy}")?;
        writeln!(self.data, "{time}, {energy}")
    }
}

impl<D, C, E, A> Observer<E, A> for TraceWriter<D, C>
where
    D: Write,
    C: Write,
    E: HasTime + HasPosition + HasEnergy + IsOutputEvent,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.error.is_some() {
            return Some(A::stop_early());
        }
        if !event.is_output() {
            return None;
        }

        match self.write_sample(event.time(), event.position(), event.energy()) {
            Ok(()) => {
                self.samples += 1;
                None
            }
            Err(err) => {
                self.error = Some(err);
                Some(A::stop_early())
            }
        }
    }
}

/// Allows `&mut TraceWriter` to be passed to solvers that take an observer by
/// value, so [`TraceWriter::finish`] can be called after the run.
impl<D, C, E, A> Observer<E, A> for &mut TraceWriter<D, C>
where
    D: Write,
    C: Write,
    E: HasTime + HasPosition + HasEnergy + IsOutputEvent,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

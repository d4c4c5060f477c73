use std::{
    io,
    thread::{self, JoinHandle},
};

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded, unbounded};
use log::{debug, trace, warn};

use crate::{
    error::DispatchError,
    interpreter::parser::core::{EvalResult, Evaluator},
};

/// Number of worker threads a session front end starts with.
pub const DEFAULT_WORKERS: usize = 10;

/// The answer to one submitted expression.
pub type Outcome = Result<EvalResult<f64>, DispatchError>;

/// One queued evaluation and the channel its answer goes back on.
struct Job {
    expression: String,
    reply:      Sender<EvalResult<f64>>,
}

/// A fixed pool of threads that evaluate expressions off the caller's thread.
///
/// Jobs are queued on an unbounded channel and picked up by whichever worker
/// is free. Each job answers on its own single-slot channel, wrapped in a
/// [`Ticket`]. Dropping the dispatcher closes the queue, lets the workers
/// drain it and joins them.
///
/// # Example
/// ```
/// use scical::{interpreter::parser::core::Evaluator, session::dispatcher::Dispatcher};
///
/// let dispatcher = Dispatcher::new(2, Evaluator::default()).unwrap();
/// let ticket = dispatcher.submit("6*7").unwrap();
/// assert_eq!(ticket.wait().unwrap().unwrap(), 42.0);
/// ```
pub struct Dispatcher {
    jobs:    Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl Dispatcher {
    /// Starts `workers` threads (at least one) evaluating with `evaluator`.
    ///
    /// # Errors
    /// Returns the operating system's error if a thread cannot be spawned.
    pub fn new(workers: usize, evaluator: Evaluator) -> io::Result<Self> {
        let (jobs, queue) = unbounded::<Job>();

        let workers = (0..workers.max(1)).map(|id| {
                                              let queue = queue.clone();
                                              thread::Builder::new().name(format!("scical-worker-{id}"))
                                                                    .spawn(move || run_worker(id, &queue, evaluator))
                                          })
                                          .collect::<io::Result<Vec<_>>>()?;

        debug!("started {} evaluation workers", workers.len());
        Ok(Self { jobs: Some(jobs),
                  workers })
    }

    /// Starts [`DEFAULT_WORKERS`] threads with the default evaluator.
    ///
    /// # Errors
    /// Returns the operating system's error if a thread cannot be spawned.
    pub fn with_defaults() -> io::Result<Self> {
        Self::new(DEFAULT_WORKERS, Evaluator::default())
    }

    /// Returns the number of worker threads.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Queues `expression` for evaluation.
    ///
    /// # Errors
    /// `DispatchError::Disconnected` if every worker has already exited.
    pub fn submit(&self, expression: impl Into<String>) -> Result<Ticket, DispatchError> {
        let (reply, outcome) = bounded(1);
        let job = Job { expression: expression.into(),
                        reply };

        trace!("queueing {:?}", job.expression);
        self.jobs
            .as_ref()
            .ok_or(DispatchError::Disconnected)?
            .send(job)
            .map_err(|_| DispatchError::Disconnected)?;

        Ok(Ticket { outcome })
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.jobs.take();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                warn!("an evaluation worker panicked");
            }
        }
        debug!("evaluation workers stopped");
    }
}

/// Receives jobs until the queue is closed.
fn run_worker(id: usize, queue: &Receiver<Job>, evaluator: Evaluator) {
    for job in queue {
        let outcome = evaluator.evaluate(&job.expression);
        trace!("worker {id} evaluated {:?} -> {outcome:?}", job.expression);

        // The submitter may have given up on the answer.
        if job.reply.send(outcome).is_err() {
            debug!("worker {id}: ticket for {:?} was dropped", job.expression);
        }
    }
    trace!("worker {id} exiting");
}

/// A claim on the answer to one submitted expression.
pub struct Ticket {
    outcome: Receiver<EvalResult<f64>>,
}

impl Ticket {
    /// Returns the answer if it has arrived, without blocking.
    ///
    /// # Returns
    /// - `None` while the evaluation is still running.
    /// - `Some(Ok(result))` once the worker has answered.
    /// - `Some(Err(DispatchError::Disconnected))` if the worker went away.
    #[must_use]
    pub fn try_outcome(&self) -> Option<Outcome> {
        match self.outcome.try_recv() {
            Ok(result) => Some(Ok(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(DispatchError::Disconnected)),
        }
    }

    /// Blocks until the answer arrives.
    ///
    /// # Errors
    /// `DispatchError::Disconnected` if the worker went away without
    /// answering.
    pub fn wait(self) -> Outcome {
        self.outcome.recv().map_err(|_| DispatchError::Disconnected)
    }
}

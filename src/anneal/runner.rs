//! Annealing execution loop.

use super::config::{AnnealConfig, CoolingSchedule};
use super::observer::{AnnealObserver, NoopObserver, Progress};
use super::types::{AnnealResult, ConvergenceTrace};
use crate::cost::CostModel;
use crate::error::{Error, InvalidInputError};
use crate::neighbor::NeighborGenerator;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Simulated annealing over cyclic orderings.
///
/// Each iteration draws one hybrid neighbor, accepts it outright if it is
/// strictly cheaper and otherwise with probability
/// `exp((current - candidate) / T)`, then cools. The loop ends when the
/// temperature reaches [`TERMINAL_TEMPERATURE`](super::TERMINAL_TEMPERATURE).
///
/// Construction validates the configuration; each `run*` call executes the
/// whole schedule synchronously and owns its ordering and trace, so one
/// optimizer can be shared by several threads running distinct inputs.
///
/// # Examples
///
/// ```
/// use u_anneal::anneal::{AnnealConfig, AnnealingOptimizer};
/// use u_anneal::cost::{Euclidean, Point};
///
/// let square = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
///     Point::new(0.0, 10.0),
/// ];
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.01)
///     .with_trace(true)
///     .with_seed(7);
///
/// let optimizer = AnnealingOptimizer::new(Euclidean, config).unwrap();
/// let result = optimizer.run(square).unwrap();
/// assert_eq!(result.trace.len(), result.iterations + 1);
/// ```
#[derive(Debug)]
pub struct AnnealingOptimizer<C> {
    cost: C,
    config: AnnealConfig,
    schedule: CoolingSchedule,
    generator: NeighborGenerator,
    cancel: Option<Arc<AtomicBool>>,
}

impl<C> AnnealingOptimizer<C>
where
    C: CostModel,
    C::Item: Clone,
{
    /// Creates an optimizer, rejecting invalid configuration up front.
    pub fn new(cost: C, config: AnnealConfig) -> Result<Self, InvalidInputError> {
        let schedule = config.schedule()?;
        let generator = NeighborGenerator::new(config.operators.clone())?;
        Ok(Self {
            cost,
            config,
            schedule,
            generator,
            cancel: None,
        })
    }

    /// Installs a cancellation flag, checked once at the top of every
    /// iteration.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    pub fn schedule(&self) -> &CoolingSchedule {
        &self.schedule
    }

    pub fn cost_model(&self) -> &C {
        &self.cost
    }

    /// Runs the full schedule without an observer.
    pub fn run(&self, initial: Vec<C::Item>) -> Result<AnnealResult<C::Item>, Error<C::Error>> {
        self.run_with_observer(initial, &mut NoopObserver)
    }

    /// Runs the full schedule, reporting to `observer`.
    ///
    /// Randomness comes from a ChaCha8 generator seeded with the configured
    /// seed, or a random one when none is set.
    pub fn run_with_observer<O>(
        &self,
        initial: Vec<C::Item>,
        observer: &mut O,
    ) -> Result<AnnealResult<C::Item>, Error<C::Error>>
    where
        O: AnnealObserver<C::Item> + ?Sized,
    {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };
        self.run_with_rng(initial, &mut rng, observer)
    }

    /// Runs the full schedule drawing all randomness from `rng`.
    ///
    /// Per iteration the generator consumes two draws for the position pair
    /// and one more only when a non-improving candidate is weighed.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError::OrderingTooShort`] before any iteration when
    /// `initial` has fewer than two items; the first domain error raised by
    /// the cost model aborts the run.
    pub fn run_with_rng<R, O>(
        &self,
        initial: Vec<C::Item>,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<AnnealResult<C::Item>, Error<C::Error>>
    where
        R: Rng,
        O: AnnealObserver<C::Item> + ?Sized,
    {
        if initial.len() < 2 {
            return Err(InvalidInputError::OrderingTooShort { len: initial.len() }.into());
        }

        let mut current = initial;
        let mut current_energy = self.cost.total_cost(&current)?;
        let mut temperature = self.schedule.initial_temperature();

        let record_trace = self.config.trace_enabled;
        let mut trace = ConvergenceTrace::default();
        let log_interval = self.config.log_interval;
        let continuous = observer.observes_every_iteration();

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut operator_wins = [0usize; 3];
        let mut cancelled = false;

        tracing::debug!(
            items = current.len(),
            initial_energy = current_energy,
            initial_temperature = temperature,
            cooling_rate = self.schedule.cooling_rate(),
            expected_iterations = self.schedule.expected_iterations(),
            "annealing started"
        );
        observer.on_start(&current, current_energy);

        while !self.schedule.is_exhausted(temperature) {
            if let Some(ref flag) = self.cancel {
                if flag.load(Ordering::Relaxed) {
                    tracing::trace!(iterations, "annealing cancelled");
                    cancelled = true;
                    break;
                }
            }

            if record_trace {
                trace.push(temperature, current_energy);
            }

            if !continuous && log_interval > 0 && iterations % log_interval == 0 {
                observer.on_progress(Progress {
                    iteration: iterations,
                    temperature,
                    energy: current_energy,
                });
            }

            let candidate = self.generator.hybrid_select(&current, &self.cost, &mut *rng)?;
            operator_wins[candidate.operator.index()] += 1;

            // Metropolis acceptance criterion
            let accept = if candidate.cost < current_energy {
                improving_moves += 1;
                true
            } else {
                let probability = ((current_energy - candidate.cost) / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current = candidate.ordering;
                current_energy = candidate.cost;
                accepted_moves += 1;
            }

            temperature = self.schedule.next(temperature);
            iterations += 1;

            if continuous {
                observer.on_iteration(
                    &current,
                    Progress {
                        iteration: iterations,
                        temperature,
                        energy: current_energy,
                    },
                );
            }
        }

        let energy = self.cost.total_cost(&current)?;
        if record_trace {
            trace.push(temperature, energy);
        }

        tracing::debug!(
            iterations,
            accepted_moves,
            improving_moves,
            final_energy = energy,
            final_temperature = temperature,
            cancelled,
            "annealing finished"
        );
        observer.on_finish(&current, energy);

        Ok(AnnealResult {
            ordering: current,
            energy,
            trace,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            operator_wins,
            cancelled,
        })
    }
}

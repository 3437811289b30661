//! Annealing configuration and the geometric cooling schedule.

use crate::error::InvalidInputError;
use crate::neighbor::Perturbation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute temperature at or below which the schedule is exhausted.
///
/// The cutoff is fixed rather than relative to the initial temperature, so
/// hotter starts run proportionally more iterations.
pub const TERMINAL_TEMPERATURE: f64 = 1.0;

/// Geometric cooling: `T_{k+1} = T_k * (1 - cooling_rate)`, stopping once
/// `T <= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoolingSchedule {
    initial_temperature: f64,
    cooling_rate: f64,
}

impl CoolingSchedule {
    /// Creates a schedule.
    ///
    /// # Errors
    ///
    /// `initial_temperature` must be finite and `> 0`; `cooling_rate` must
    /// lie strictly inside `(0, 1)` and be large enough that `1 - cooling_rate`
    /// still shrinks the temperature in `f64`.
    pub fn new(initial_temperature: f64, cooling_rate: f64) -> Result<Self, InvalidInputError> {
        if !(initial_temperature > 0.0 && initial_temperature.is_finite()) {
            return Err(InvalidInputError::InitialTemperature(initial_temperature));
        }
        if !(cooling_rate > 0.0 && cooling_rate < 1.0) || 1.0 - cooling_rate >= 1.0 {
            return Err(InvalidInputError::CoolingRate(cooling_rate));
        }
        Ok(Self {
            initial_temperature,
            cooling_rate,
        })
    }

    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    /// The temperature following `temperature`.
    #[inline]
    pub fn next(&self, temperature: f64) -> f64 {
        temperature * (1.0 - self.cooling_rate)
    }

    #[inline]
    pub fn is_exhausted(&self, temperature: f64) -> bool {
        temperature <= TERMINAL_TEMPERATURE
    }

    /// Temperatures at which iterations run, hottest first.
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::successors(Some(self.initial_temperature), move |&t| Some(self.next(t)))
            .take_while(move |&t| !self.is_exhausted(t))
    }

    /// Closed-form iteration count,
    /// `ceil(ln(1 / T0) / ln(1 - rate))`, or 0 when `T0 <= 1`.
    ///
    /// Agrees with `temperatures().count()` up to floating-point rounding
    /// at the threshold.
    pub fn expected_iterations(&self) -> usize {
        if self.is_exhausted(self.initial_temperature) {
            return 0;
        }
        let k = (1.0 / self.initial_temperature).ln() / (1.0 - self.cooling_rate).ln();
        k.ceil() as usize
    }
}

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use u_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling_rate(0.003)
///     .with_log_interval(500)
///     .with_trace(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Must be positive.
    pub initial_temperature: f64,

    /// Fractional decay per iteration, in (0, 1).
    pub cooling_rate: f64,

    /// Report progress every this many iterations. 0 disables it.
    pub log_interval: usize,

    /// Record a `(temperature, energy)` pair every iteration.
    pub trace_enabled: bool,

    /// Random seed for reproducibility. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Operators tried by the hybrid neighbor, in tie-breaking order.
    pub operators: Vec<Perturbation>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.001,
            log_interval: 100,
            trace_enabled: false,
            seed: None,
            operators: Perturbation::ALL.to_vec(),
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_log_interval(mut self, n: usize) -> Self {
        self.log_interval = n;
        self
    }

    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace_enabled = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_operators(mut self, operators: Vec<Perturbation>) -> Self {
        self.operators = operators;
        self
    }

    /// The cooling schedule described by this configuration.
    pub fn schedule(&self) -> Result<CoolingSchedule, InvalidInputError> {
        CoolingSchedule::new(self.initial_temperature, self.cooling_rate)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        self.schedule()?;
        if self.operators.is_empty() {
            return Err(InvalidInputError::NoOperators);
        }
        Ok(())
    }
}

//! Run results and convergence tracing.

use crate::neighbor::Perturbation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One `(temperature, energy)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TracePoint {
    pub temperature: f64,
    pub energy: f64,
}

/// Append-only record of how the run converged.
///
/// When tracing is enabled there is one point per iteration, taken before
/// the move, plus a closing point after the loop, so
/// `len() == iterations + 1`. When disabled the trace stays empty and
/// never allocates.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvergenceTrace {
    points: Vec<TracePoint>,
}

impl ConvergenceTrace {
    pub(crate) fn push(&mut self, temperature: f64, energy: f64) {
        self.points.push(TracePoint {
            temperature,
            energy,
        });
    }

    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.temperature)
    }

    pub fn energies(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.energy)
    }

    /// Both series scaled by their own maximum, so temperature and energy
    /// can be plotted on one `[0, 1]` axis. A series whose maximum is not
    /// positive is left unscaled.
    pub fn normalized(&self) -> Vec<TracePoint> {
        let scale = |max: f64| if max > 0.0 { max } else { 1.0 };
        let t_max = scale(self.temperatures().fold(f64::NEG_INFINITY, f64::max));
        let e_max = scale(self.energies().fold(f64::NEG_INFINITY, f64::max));
        self.points
            .iter()
            .map(|p| TracePoint {
                temperature: p.temperature / t_max,
                energy: p.energy / e_max,
            })
            .collect()
    }
}

/// Result of an annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealResult<T> {
    /// The ordering held when the schedule ran out.
    pub ordering: Vec<T>,

    /// Total cost of `ordering`, evaluated after the loop.
    pub energy: f64,

    /// Convergence trace; empty unless tracing was enabled.
    pub trace: ConvergenceTrace,

    /// Number of loop passes executed.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of candidates strictly cheaper than the current ordering.
    pub improving_moves: usize,

    /// How often each operator produced the selected candidate, indexed by
    /// [`Perturbation::index`].
    pub operator_wins: [usize; 3],

    /// Whether the run was stopped through its cancellation flag.
    pub cancelled: bool,
}

impl<T> AnnealResult<T> {
    /// Times `op` won the hybrid selection.
    pub fn wins(&self, op: Perturbation) -> usize {
        self.operator_wins[op.index()]
    }

    /// Fraction of iterations whose candidate was accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.accepted_moves as f64 / self.iterations as f64
        }
    }
}

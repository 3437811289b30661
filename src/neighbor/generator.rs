//! Greedy hybrid neighbor selection.

use super::operators::{draw_pair, Perturbation};
use crate::cost::CostModel;
use crate::error::{Error, InvalidInputError};
use rand::Rng;

/// A neighbor ordering with its precomputed total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    pub ordering: Vec<T>,
    pub cost: f64,
    /// The operator that produced this candidate.
    pub operator: Perturbation,
}

/// Produces candidate orderings by applying a fixed set of operators at one
/// shared random position pair and keeping the cheapest result.
///
/// With the default operator set this is the three-move greedy hybrid:
/// segment-reverse, segment-relocate and pairwise-swap are all tried at the
/// same `(i, j)` and the candidate with the strictly lowest cost wins. On a
/// tie the operator listed first is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborGenerator {
    operators: Vec<Perturbation>,
}

impl Default for NeighborGenerator {
    fn default() -> Self {
        Self {
            operators: Perturbation::ALL.to_vec(),
        }
    }
}

impl NeighborGenerator {
    /// Creates a generator over `operators`, tried in the given order.
    pub fn new(operators: Vec<Perturbation>) -> Result<Self, InvalidInputError> {
        if operators.is_empty() {
            return Err(InvalidInputError::NoOperators);
        }
        Ok(Self { operators })
    }

    pub fn operators(&self) -> &[Perturbation] {
        &self.operators
    }

    /// Draws a position pair from `rng` and returns the best candidate.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError::OrderingTooShort`] if `ordering` has fewer than
    /// two items; any domain error raised while pricing a candidate.
    pub fn hybrid_select<C, R>(
        &self,
        ordering: &[C::Item],
        cost: &C,
        rng: &mut R,
    ) -> Result<Candidate<C::Item>, Error<C::Error>>
    where
        C: CostModel,
        C::Item: Clone,
        R: Rng,
    {
        if ordering.len() < 2 {
            return Err(InvalidInputError::OrderingTooShort {
                len: ordering.len(),
            }
            .into());
        }
        let (i, j) = draw_pair(ordering.len(), rng);
        self.select_at(ordering, cost, i, j)
    }

    /// Deterministic core of [`hybrid_select`](Self::hybrid_select): applies
    /// every operator at `(i, j)` and returns the cheapest candidate.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of bounds.
    pub fn select_at<C>(
        &self,
        ordering: &[C::Item],
        cost: &C,
        i: usize,
        j: usize,
    ) -> Result<Candidate<C::Item>, Error<C::Error>>
    where
        C: CostModel,
        C::Item: Clone,
    {
        let mut best: Option<Candidate<C::Item>> = None;
        for &op in &self.operators {
            let candidate = op.apply(ordering, i, j);
            let candidate_cost = cost.total_cost(&candidate)?;
            let improves = match &best {
                Some(b) => candidate_cost < b.cost,
                None => true,
            };
            if improves {
                best = Some(Candidate {
                    ordering: candidate,
                    cost: candidate_cost,
                    operator: op,
                });
            }
        }
        best.ok_or_else(|| InvalidInputError::NoOperators.into())
    }
}

/// Greedy hybrid selection with the default three-operator set.
pub fn hybrid_select<C, R>(
    ordering: &[C::Item],
    cost: &C,
    rng: &mut R,
) -> Result<Candidate<C::Item>, Error<C::Error>>
where
    C: CostModel,
    C::Item: Clone,
    R: Rng,
{
    NeighborGenerator::default().hybrid_select(ordering, cost, rng)
}

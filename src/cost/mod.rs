//! Cost models for cyclic orderings.
//!
//! A [`CostModel`] prices a directed pair of items. The cost of a whole
//! ordering is the sum over every consecutive pair plus the wrap-around
//! pair from the last item back to the first, so an ordering of `N` items
//! is priced with exactly `N` pairwise terms.
//!
//! Symmetry is not assumed: `pairwise_cost(a, b)` may differ from
//! `pairwise_cost(b, a)`.
//!
//! # Provided models
//!
//! - [`Euclidean`]: straight-line distance between planar [`Point`]s
//! - [`Geodesic`]: great-circle distance in kilometres between [`Locate`] items
//! - [`DistanceMatrix`]: precomputed, possibly asymmetric, index-based costs
//! - [`FnCost`]: any closure `Fn(&T, &T) -> Result<f64, E>`

mod euclidean;
mod fn_cost;
mod geodesic;
mod matrix;

pub use euclidean::{Euclidean, Point};
pub use fn_cost::FnCost;
pub use geodesic::{City, GeoError, GeoPoint, Geodesic, Locate, EARTH_RADIUS_KM};
pub use matrix::{DistanceMatrix, MatrixError};

use crate::error::{Error, InvalidInputError};

/// Prices pairs of items and, from those, whole cyclic orderings.
///
/// Implementations must be pure: the same pair always costs the same and
/// evaluation has no side effects. Costs are expected to be non-negative.
pub trait CostModel {
    /// The item type being ordered.
    type Item;

    /// Error raised when a pair cannot be priced (e.g. an item that does
    /// not resolve to a location).
    type Error;

    /// Cost of travelling from `a` to `b`.
    fn pairwise_cost(&self, a: &Self::Item, b: &Self::Item) -> Result<f64, Self::Error>;

    /// Cost of the closed tour visiting `ordering` in sequence.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError::OrderingTooShort`] when fewer than two items are
    /// given; [`Error::Domain`] when any pair fails to price.
    fn total_cost(&self, ordering: &[Self::Item]) -> Result<f64, Error<Self::Error>> {
        if ordering.len() < 2 {
            return Err(InvalidInputError::OrderingTooShort {
                len: ordering.len(),
            }
            .into());
        }
        let mut total = 0.0;
        for (a, b) in cyclic_pairs(ordering) {
            total += self.pairwise_cost(a, b).map_err(Error::Domain)?;
        }
        Ok(total)
    }
}

impl<C: CostModel + ?Sized> CostModel for &C {
    type Item = C::Item;
    type Error = C::Error;

    fn pairwise_cost(&self, a: &Self::Item, b: &Self::Item) -> Result<f64, Self::Error> {
        (**self).pairwise_cost(a, b)
    }

    fn total_cost(&self, ordering: &[Self::Item]) -> Result<f64, Error<Self::Error>> {
        (**self).total_cost(ordering)
    }
}

/// Iterates the `N` directed edges of the closed tour over `ordering`:
/// `(o[0], o[1]), ..., (o[N-2], o[N-1]), (o[N-1], o[0])`.
///
/// Yields nothing for an empty slice and a single self-loop for one item.
pub fn cyclic_pairs<T>(ordering: &[T]) -> impl Iterator<Item = (&T, &T)> + '_ {
    let n = ordering.len();
    (0..n).map(move |k| (&ordering[k], &ordering[(k + 1) % n]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::convert::Infallible;

    /// Counts pairwise evaluations; every pair costs 1.
    struct Counting {
        calls: Cell<usize>,
    }

    impl CostModel for Counting {
        type Item = u32;
        type Error = Infallible;

        fn pairwise_cost(&self, _a: &u32, _b: &u32) -> Result<f64, Infallible> {
            self.calls.set(self.calls.get() + 1);
            Ok(1.0)
        }
    }

    #[test]
    fn test_total_cost_evaluates_n_terms() {
        for n in 2..12u32 {
            let model = Counting {
                calls: Cell::new(0),
            };
            let ordering: Vec<u32> = (0..n).collect();
            let total = model.total_cost(&ordering).unwrap();
            assert_eq!(model.calls.get(), n as usize);
            assert!((total - n as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_total_cost_rejects_short_ordering() {
        let model = Counting {
            calls: Cell::new(0),
        };
        let err = model.total_cost(&[7]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput(InvalidInputError::OrderingTooShort { len: 1 })
        );
        assert_eq!(model.calls.get(), 0);
    }

    #[test]
    fn test_cyclic_pairs_wraps() {
        let pairs: Vec<(char, char)> = cyclic_pairs(&['a', 'b', 'c'])
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(pairs, vec![('a', 'b'), ('b', 'c'), ('c', 'a')]);
    }

    #[test]
    fn test_asymmetric_wrap_direction() {
        // Only forward edges are priced, including last -> first.
        let model = FnCost::new(|a: &i32, b: &i32| -> Result<f64, Infallible> {
            Ok(if b > a { 1.0 } else { 10.0 })
        });
        let total = model.total_cost(&[1, 2, 3]).unwrap();
        assert!((total - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_impl_delegates() {
        let model = Euclidean;
        let by_ref = &model;
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        assert!((by_ref.total_cost(&square).unwrap() - 4.0).abs() < 1e-12);
    }
}

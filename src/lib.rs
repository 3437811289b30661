//! Simulated annealing for cyclic permutation problems.
//!
//! Finds an ordering of items that approximately minimizes the cost of the
//! closed tour through them, the classic traveling-salesman objective.
//!
//! - **Cost models** ([`cost`]): price a directed pair of items; the tour
//!   cost sums every consecutive pair plus the wrap-around pair.
//! - **Neighbor generation** ([`neighbor`]): segment-reverse,
//!   segment-relocate and pairwise-swap applied at one shared random
//!   position pair, keeping the cheapest result.
//! - **Annealing** ([`anneal`]): geometric cooling down to an absolute
//!   threshold, Metropolis acceptance, optional convergence trace and
//!   progress observers.
//!
//! # Architecture
//!
//! The crate owns no data source, file format or display. Callers supply an
//! initial ordering and a [`cost::CostModel`]; rendering hooks in through
//! [`anneal::AnnealObserver`]. All randomness flows through one seedable
//! generator, so runs with the same seed are reproducible.
//!
//! ```
//! use u_anneal::anneal::{AnnealConfig, AnnealingOptimizer};
//! use u_anneal::cost::{City, Geodesic};
//!
//! let cities = vec![
//!     City::new("Moscow", 55.7558, 37.6173),
//!     City::new("Novosibirsk", 55.0084, 82.9357),
//!     City::new("Saint Petersburg", 59.9343, 30.3351),
//!     City::new("Yekaterinburg", 56.8389, 60.6057),
//! ];
//! let config = AnnealConfig::default().with_cooling_rate(0.01).with_seed(1);
//! let result = AnnealingOptimizer::new(Geodesic::<City>::new(), config)
//!     .unwrap()
//!     .run(cities)
//!     .unwrap();
//! assert_eq!(result.ordering.len(), 4);
//! ```

pub mod anneal;
pub mod cost;
pub mod error;
pub mod neighbor;

pub use error::{Error, InvalidInputError, Result};

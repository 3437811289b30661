//! Neighbor generation for cyclic orderings.
//!
//! Three pure perturbation operators ([`Perturbation`]) transform an
//! ordering at two distinct positions. [`NeighborGenerator`] applies all of
//! them at one shared random pair, prices each result under a
//! [`CostModel`](crate::cost::CostModel), and hands back the cheapest as a
//! [`Candidate`] together with its cost so the caller never evaluates it
//! twice.
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems" (2-opt)
//! - Lin (1965), "Computer Solutions of the Traveling Salesman Problem"

mod generator;
mod operators;

pub use generator::{hybrid_select, Candidate, NeighborGenerator};
pub use operators::{draw_pair, Perturbation};

//! Simulated Annealing (SA) over cyclic orderings.
//!
//! A single-solution trajectory metaheuristic: starting from a
//! caller-supplied ordering, each step proposes the best of a small
//! neighborhood (see [`crate::neighbor`]) and accepts it by the Metropolis
//! rule at the current temperature. Temperature decays geometrically and
//! the run ends once it falls to 1.
//!
//! ```text
//! INITIALIZED --run()--> ITERATING --T <= 1 or cancel--> TERMINATED
//! ```
//!
//! An [`AnnealingOptimizer`] is the validated, initialized state; a `run*`
//! call drives the loop to completion and returns the terminated state as
//! an [`AnnealResult`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod observer;
mod runner;
mod types;

pub use config::{AnnealConfig, CoolingSchedule, TERMINAL_TEMPERATURE};
pub use observer::{AnnealObserver, FnObserver, NoopObserver, Progress, TracingObserver};
pub use runner::AnnealingOptimizer;
pub use types::{AnnealResult, ConvergenceTrace, TracePoint};

//! Error taxonomy for annealing runs.
//!
//! Two kinds of failure exist:
//!
//! - [`InvalidInputError`]: the caller handed in something the optimizer
//!   cannot work with (too-short ordering, out-of-range configuration).
//!   Detected before the first iteration.
//! - a domain error `E`: the cost model could not price a pair of items.
//!   It is carried by value inside [`Error::Domain`] exactly as the cost
//!   model produced it.
//!
//! Neither kind is retried.

use std::convert::Infallible;
use std::fmt;

/// Input or configuration rejected before any iteration runs.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// Orderings need at least two items to form a cycle.
    OrderingTooShort { len: usize },
    /// Initial temperature must be finite and strictly positive.
    InitialTemperature(f64),
    /// Cooling rate must lie in the open interval (0, 1).
    CoolingRate(f64),
    /// The neighbor generator was configured with no perturbation operators.
    NoOperators,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::OrderingTooShort { len } => {
                write!(f, "ordering must contain at least 2 items, got {len}")
            }
            InvalidInputError::InitialTemperature(t) => {
                write!(f, "initial_temperature must be positive and finite, got {t}")
            }
            InvalidInputError::CoolingRate(r) => {
                write!(f, "cooling_rate must be in (0, 1), got {r}")
            }
            InvalidInputError::NoOperators => {
                write!(f, "at least one perturbation operator is required")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Error returned by cost evaluation, neighbor selection and the optimizer.
///
/// `E` is the error type of the cost model in use; models that cannot fail
/// use [`Infallible`].
#[derive(Debug, Clone, PartialEq)]
pub enum Error<E = Infallible> {
    /// Rejected input or configuration.
    InvalidInput(InvalidInputError),
    /// The cost model failed to price a pair of items.
    Domain(E),
}

impl<E> Error<E> {
    /// Returns the domain error, if this is one.
    pub fn into_domain(self) -> Option<E> {
        match self {
            Error::Domain(e) => Some(e),
            Error::InvalidInput(_) => None,
        }
    }

    /// Returns `true` for [`Error::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

impl<E> From<InvalidInputError> for Error<E> {
    fn from(e: InvalidInputError) -> Self {
        Error::InvalidInput(e)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Error::Domain(e) => write!(f, "cost evaluation failed: {e}"),
        }
    }
}

impl<E> std::error::Error for Error<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidInput(e) => Some(e),
            Error::Domain(e) => Some(e),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Infallible> = std::result::Result<T, Error<E>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, PartialEq)]
    struct Unresolvable(&'static str);

    impl fmt::Display for Unresolvable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "cannot resolve {}", self.0)
        }
    }

    impl std::error::Error for Unresolvable {}

    #[test]
    fn test_display_invalid_input() {
        let err: Error = InvalidInputError::OrderingTooShort { len: 1 }.into();
        assert_eq!(
            err.to_string(),
            "invalid input: ordering must contain at least 2 items, got 1"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_domain_error_kept_unmodified() {
        let err: Error<Unresolvable> = Error::Domain(Unresolvable("Atlantis"));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("cannot resolve Atlantis".to_string())
        );
        assert_eq!(err.into_domain(), Some(Unresolvable("Atlantis")));
    }

    #[test]
    fn test_cooling_rate_message() {
        let msg = InvalidInputError::CoolingRate(1.5).to_string();
        assert!(msg.contains("(0, 1)"));
        assert!(msg.contains("1.5"));
    }
}

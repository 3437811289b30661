//! Closure-backed cost model.

use super::CostModel;
use std::fmt;
use std::marker::PhantomData;

/// Adapts a closure `Fn(&T, &T) -> Result<f64, E>` into a [`CostModel`].
///
/// ```
/// use std::convert::Infallible;
/// use u_anneal::cost::{CostModel, FnCost};
///
/// let line = FnCost::new(|a: &f64, b: &f64| -> Result<f64, Infallible> { Ok((a - b).abs()) });
/// assert_eq!(line.total_cost(&[0.0, 2.0, 5.0]).unwrap(), 10.0);
/// ```
pub struct FnCost<T, E, F> {
    f: F,
    _marker: PhantomData<fn(&T, &T) -> Result<f64, E>>,
}

impl<T, E, F> FnCost<T, E, F>
where
    F: Fn(&T, &T) -> Result<f64, E>,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<T, E, F> CostModel for FnCost<T, E, F>
where
    F: Fn(&T, &T) -> Result<f64, E>,
{
    type Item = T;
    type Error = E;

    fn pairwise_cost(&self, a: &T, b: &T) -> Result<f64, E> {
        (self.f)(a, b)
    }
}

impl<T, E, F> fmt::Debug for FnCost<T, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCost")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_domain_error_propagates() {
        let model = FnCost::new(|a: &&str, b: &&str| {
            if *a == "nowhere" || *b == "nowhere" {
                Err("unresolvable item".to_string())
            } else {
                Ok(1.0)
            }
        });
        assert_eq!(model.total_cost(&["a", "b", "c"]).unwrap(), 3.0);
        assert_eq!(
            model.total_cost(&["a", "nowhere", "c"]),
            Err(Error::Domain("unresolvable item".to_string()))
        );
    }
}

//! Precomputed index-based costs.

use super::CostModel;
use std::fmt;

/// Errors raised by [`DistanceMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Rows passed to [`DistanceMatrix::from_rows`] are not all of length `n`.
    NotSquare { row: usize, len: usize, expected: usize },
    /// An ordering referenced an item outside the matrix.
    UnknownItem { index: usize, size: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::NotSquare { row, len, expected } => {
                write!(f, "row {row} has {len} entries, expected {expected}")
            }
            MatrixError::UnknownItem { index, size } => {
                write!(f, "item {index} not in a {size}x{size} matrix")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// Dense `n x n` cost table indexed by item id. Entry `(i, j)` is the cost
/// of going from `i` to `j`; the table need not be symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from row vectors.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend(values);
        }
        Ok(Self { size, data })
    }

    /// Builds a matrix by pricing every ordered pair of `items` with `cost`.
    pub fn from_fn<T, F>(items: &[T], cost: F) -> Self
    where
        F: Fn(&T, &T) -> f64,
    {
        let size = items.len();
        let mut data = Vec::with_capacity(size * size);
        for a in items {
            for b in items {
                data.push(cost(a, b));
            }
        }
        Self { size, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost from `i` to `j`, or `None` when either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.data[i * self.size + j])
        } else {
            None
        }
    }
}

impl CostModel for DistanceMatrix {
    type Item = usize;
    type Error = MatrixError;

    fn pairwise_cost(&self, a: &usize, b: &usize) -> Result<f64, MatrixError> {
        self.get(*a, *b).ok_or_else(|| MatrixError::UnknownItem {
            index: if *a >= self.size { *a } else { *b },
            size: self.size,
        })
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::City;

/// Matrix entry marking an absent directed edge.
pub const NO_EDGE: i32 = -1;

pub const MAX_WEIGHT: i32 = 99;

/// Immutable `n x n` table of directed edge weights.
///
/// Serialized as nested rows (`[[0, 12, -1], ...]`), the same shape the matrix
/// is printed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct DistanceMatrix {
    n: usize,
    // Flattened for cache locality
    cells: Vec<i32>,
}

impl DistanceMatrix {
    /// Builds a matrix from row-major cells, checking the diagonal and weights.
    pub fn from_cells(n: usize, cells: Vec<i32>) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::Empty);
        }
        if cells.len() != n * n {
            return Err(MatrixError::NotSquare { n, cells: cells.len() });
        }

        for from in 0..n {
            for to in 0..n {
                let value = cells[from * n + to];
                if from == to {
                    if value != 0 {
                        return Err(MatrixError::NonZeroDiagonal { city: from, value });
                    }
                } else if value != NO_EDGE && !(1..=MAX_WEIGHT).contains(&value) {
                    return Err(MatrixError::WeightOutOfRange { from, to, value });
                }
            }
        }

        Ok(Self { n, cells })
    }

    /// Caller guarantees `cells.len() == n * n` and valid entries.
    pub(crate) fn new_unchecked(n: usize, cells: Vec<i32>) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { n, cells }
    }

    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixError::RaggedRow { row, len: values.len(), n });
            }
            cells.extend(values);
        }
        Self::from_cells(n, cells)
    }

    pub fn from_json_str(json: &str) -> Result<Self, MatrixError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of cities.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Raw entry: `0` on the diagonal, [`NO_EDGE`] when absent.
    #[inline(always)]
    pub fn raw(&self, from: City, to: City) -> i32 {
        self.cells[from * self.n + to]
    }

    /// Weight of the directed edge `from -> to`, if it exists.
    #[inline(always)]
    pub fn edge(&self, from: City, to: City) -> Option<u32> {
        match self.raw(from, to) {
            NO_EDGE => None,
            w => Some(w as u32),
        }
    }

    #[inline(always)]
    pub fn has_edge(&self, from: City, to: City) -> bool {
        self.raw(from, to) != NO_EDGE
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks(self.n)
    }

    /// Number of directed edges, diagonal excluded.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&w| w > 0).count()
    }
}

impl TryFrom<Vec<Vec<i32>>> for DistanceMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<i32>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.rows().map(<[i32]>::to_vec).collect()
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for row in self.rows() {
            write!(f, " [")?;
            for value in row {
                write!(f, "{value}, ")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_diagonal() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1, 3]]).unwrap_err();
        assert!(matches!(err, MatrixError::NonZeroDiagonal { city: 1, value: 3 }));
    }

    #[test]
    fn rejects_out_of_range_weight() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 100], vec![1, 0]]).unwrap_err();
        assert!(matches!(err, MatrixError::WeightOutOfRange { from: 0, to: 1, value: 100 }));

        let err = DistanceMatrix::from_rows(vec![vec![0, -2], vec![1, 0]]).unwrap_err();
        assert!(matches!(err, MatrixError::WeightOutOfRange { .. }));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert!(matches!(err, MatrixError::RaggedRow { row: 1, len: 1, n: 2 }));
    }

    #[test]
    fn edge_lookup() {
        let m = DistanceMatrix::from_rows(vec![vec![0, 7, -1], vec![-1, 0, 3], vec![2, -1, 0]]).unwrap();
        assert_eq!(m.edge(0, 1), Some(7));
        assert_eq!(m.edge(0, 2), None);
        assert!(m.has_edge(2, 0));
        assert_eq!(m.edge_count(), 3);
    }

    #[test]
    fn prints_nested_rows() {
        let m = DistanceMatrix::from_rows(vec![vec![0, 5], vec![-1, 0]]).unwrap();
        assert_eq!(m.to_string(), "[\n [0, 5, ]\n [-1, 0, ]\n]");
    }

    #[test]
    fn json_is_nested_rows() {
        let m = DistanceMatrix::from_json_str("[[0, 4], [9, 0]]").unwrap();
        assert_eq!(m.edge(1, 0), Some(9));
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[0,4],[9,0]]");
        assert!(DistanceMatrix::from_json_str("[[0, 4], [9, 1]]").is_err());
    }
}

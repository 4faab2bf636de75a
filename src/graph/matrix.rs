//! Symmetric stick-count matrix for one color.
//!
//! Entry `(i, j)` is the number of sticks of that color between vertices
//! `i` and `j`; `(i, i)` counts loops. Stored flat in an `im::Vector` so a
//! snapshot is an O(1) clone that later moves never touch.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Color, GraphError};

/// Square, symmetric, nonnegative stick-count matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vector<u32>,
}

impl AdjacencyMatrix {
    /// A `size x size` matrix with no sticks.
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(0).take(size * size).collect(),
        }
    }

    /// Validate `rows` as a `size x size` symmetric nonnegative matrix.
    ///
    /// `color` only labels the error.
    pub fn from_rows(color: Color, size: usize, rows: &[Vec<i64>]) -> Result<Self, GraphError> {
        if rows.len() != size {
            return Err(GraphError::RowCountMismatch { color, rows: rows.len(), size });
        }
        for (row, values) in rows.iter().enumerate() {
            let len = values.len();
            if len != size {
                return Err(GraphError::RowLength { color, row, len, size });
            }
        }

        let mut cells = Vector::new();
        for (i, values) in rows.iter().enumerate() {
            for (j, &value) in values.iter().enumerate() {
                if j > i && value != rows[j][i] {
                    return Err(GraphError::Asymmetric { color, i, j });
                }
                let count =
                    u32::try_from(value).map_err(|_| GraphError::InvalidEntry { color, i, j, value })?;
                cells.push_back(count);
            }
        }

        Ok(Self { size, cells })
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sticks between `i` and `j`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.size + j]
    }

    /// Set the count between `i` and `j` (both directions).
    pub fn set(&mut self, i: usize, j: usize, count: u32) {
        let size = self.size;
        self.cells.set(i * size + j, count);
        self.cells.set(j * size + i, count);
    }

    /// Remove one stick between `i` and `j`. Returns false if there is none.
    pub fn decrement(&mut self, i: usize, j: usize) -> bool {
        match self.get(i, j) {
            0 => false,
            count => {
                self.set(i, j, count - 1);
                true
            }
        }
    }

    /// Remove every stick touching `vertex`, returning how many were removed.
    pub fn clear_vertex(&mut self, vertex: usize) -> u64 {
        let mut removed = 0u64;
        for other in 0..self.size {
            let count = self.get(vertex, other);
            if count > 0 {
                removed += u64::from(count);
                self.set(vertex, other, 0);
            }
        }
        removed
    }

    /// Total number of sticks (each counted once).
    #[must_use]
    pub fn stick_count(&self) -> u64 {
        (0..self.size)
            .flat_map(|i| (i..self.size).map(move |j| (i, j)))
            .map(|(i, j)| u64::from(self.get(i, j)))
            .sum()
    }

    /// Whether any stick remains.
    #[must_use]
    pub fn has_sticks(&self) -> bool {
        self.cells.iter().any(|&count| count > 0)
    }

    /// Number of sticks touching `vertex` (a loop counts once).
    #[must_use]
    pub fn degree(&self, vertex: usize) -> u64 {
        (0..self.size).map(|other| u64::from(self.get(vertex, other))).sum()
    }

    /// Pairs `(i, j)` with `i <= j` holding at least one stick.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size)
            .flat_map(move |i| (i..self.size).map(move |j| (i, j)))
            .filter(move |&(i, j)| self.get(i, j) > 0)
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .map(|i| (0..self.size).map(|j| self.get(i, j)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Vec<Vec<i64>> {
        vec![vec![0, 1, 0], vec![1, 0, 2], vec![0, 2, 0]]
    }

    #[test]
    fn test_from_rows() {
        let m = AdjacencyMatrix::from_rows(Color::Red, 3, &path3()).unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(1, 2), 2);
        assert_eq!(m.get(2, 1), 2);
        assert_eq!(m.stick_count(), 3);
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        let err = AdjacencyMatrix::from_rows(Color::Red, 2, &path3()).unwrap_err();
        assert!(matches!(err, GraphError::RowCountMismatch { rows: 3, size: 2, .. }));

        let ragged = vec![vec![0, 1], vec![1]];
        let err = AdjacencyMatrix::from_rows(Color::Blue, 2, &ragged).unwrap_err();
        assert!(matches!(err, GraphError::RowLength { row: 1, len: 1, .. }));
    }

    #[test]
    fn test_from_rows_rejects_asymmetry_and_negatives() {
        let asym = vec![vec![0, 1], vec![0, 0]];
        let err = AdjacencyMatrix::from_rows(Color::Red, 2, &asym).unwrap_err();
        assert_eq!(err, GraphError::Asymmetric { color: Color::Red, i: 0, j: 1 });

        let negative = vec![vec![0, -1], vec![-1, 0]];
        let err = AdjacencyMatrix::from_rows(Color::Blue, 2, &negative).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEntry { value: -1, .. }));
    }

    #[test]
    fn test_decrement_symmetric_and_loop() {
        let rows = vec![vec![0, 2], vec![2, 1]];
        let mut m = AdjacencyMatrix::from_rows(Color::Red, 2, &rows).unwrap();

        assert!(m.decrement(1, 0));
        assert_eq!(m.get(0, 1), 1);
        assert_eq!(m.get(1, 0), 1);

        assert!(m.decrement(1, 1));
        assert_eq!(m.get(1, 1), 0);
        assert!(!m.decrement(1, 1));
    }

    #[test]
    fn test_clear_vertex() {
        let rows = vec![vec![0, 1, 0], vec![1, 1, 2], vec![0, 2, 0]];
        let mut m = AdjacencyMatrix::from_rows(Color::Blue, 3, &rows).unwrap();

        assert_eq!(m.clear_vertex(1), 4);
        assert!(!m.has_sticks());
        assert_eq!(m.clear_vertex(1), 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut m = AdjacencyMatrix::from_rows(Color::Red, 3, &path3()).unwrap();
        let snapshot = m.clone();
        m.clear_vertex(2);
        assert_eq!(snapshot.get(1, 2), 2);
        assert_eq!(m.get(1, 2), 0);
    }

    #[test]
    fn test_occupied() {
        let m = AdjacencyMatrix::from_rows(Color::Red, 3, &path3()).unwrap();
        let pairs: Vec<_> = m.occupied().collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
        assert_eq!(m.degree(1), 3);
    }
}

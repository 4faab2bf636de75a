//! Height-from-ground computation.
//!
//! Breadth-first search from the ground (vertex 0) over the union of red and
//! blue sticks. A reachable vertex's height is its BFS distance; an
//! unreachable vertex gets the sentinel `size + 1`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::matrix::AdjacencyMatrix;

/// The ground vertex.
pub const GROUND: usize = 0;

/// Per-vertex heights plus vertices grouped by height.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heights {
    heights: Vec<usize>,
    max_height: usize,
    /// `by_height[h]` lists vertices of height `h` in discovery order.
    by_height: Vec<Vec<usize>>,
}

impl Heights {
    /// Compute heights for the union graph of `red` and `blue`.
    #[must_use]
    pub fn compute(red: &AdjacencyMatrix, blue: &AdjacencyMatrix) -> Self {
        let size = red.size();
        let sentinel = size + 1;
        let mut heights = vec![sentinel; size];
        let mut by_height: Vec<Vec<usize>> = Vec::new();
        let mut max_height = 0;

        if size == 0 {
            return Self { heights, max_height, by_height };
        }

        let mut queue = VecDeque::new();
        heights[GROUND] = 0;
        by_height.push(vec![GROUND]);
        queue.push_back(GROUND);

        while let Some(current) = queue.pop_front() {
            let height = heights[current];
            max_height = max_height.max(height);
            for next in 0..size {
                let joined = red.get(current, next) > 0 || blue.get(current, next) > 0;
                if joined && heights[next] == sentinel {
                    heights[next] = height + 1;
                    if by_height.len() <= height + 1 {
                        by_height.push(Vec::new());
                    }
                    by_height[height + 1].push(next);
                    queue.push_back(next);
                }
            }
        }

        log::trace!("heights computed: max height {max_height} over {size} vertices");
        Self { heights, max_height, by_height }
    }

    /// Height marking a vertex with no path to the ground.
    #[inline]
    #[must_use]
    pub fn sentinel(&self) -> usize {
        self.heights.len() + 1
    }

    /// Height of `vertex`.
    #[inline]
    #[must_use]
    pub fn get(&self, vertex: usize) -> usize {
        self.heights[vertex]
    }

    #[inline]
    #[must_use]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.heights[vertex] != self.sentinel()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.heights
    }

    /// Largest finite height.
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.max_height
    }

    /// Vertices at `height`, in discovery order.
    #[must_use]
    pub fn at_height(&self, height: usize) -> &[usize] {
        self.by_height.get(height).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertices with no path to the ground.
    pub fn unreachable(&self) -> impl Iterator<Item = usize> + '_ {
        let sentinel = self.sentinel();
        self.heights
            .iter()
            .enumerate()
            .filter(move |&(_, &h)| h == sentinel)
            .map(|(v, _)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn matrix(rows: &[Vec<i64>]) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(Color::Red, rows.len(), rows).unwrap()
    }

    #[test]
    fn test_path_heights() {
        // 0 - 1 - 2 - 3
        let red = matrix(&[
            vec![0, 1, 0, 0],
            vec![1, 0, 1, 0],
            vec![0, 1, 0, 1],
            vec![0, 0, 1, 0],
        ]);
        let blue = AdjacencyMatrix::zeros(4);
        let heights = Heights::compute(&red, &blue);

        assert_eq!(heights.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(heights.max_height(), 3);
        assert_eq!(heights.at_height(2), &[2]);
        assert!(heights.at_height(4).is_empty());
    }

    #[test]
    fn test_unreachable_sentinel() {
        // 0 - 1 (red), 2 - 3 (blue) floating
        let red = matrix(&[
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let blue = matrix(&[
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 1, 0],
        ]);
        let heights = Heights::compute(&red, &blue);

        assert_eq!(heights.as_slice(), &[0, 1, 5, 5]);
        assert_eq!(heights.sentinel(), 5);
        assert!(!heights.is_reachable(2));
        assert_eq!(heights.unreachable().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(heights.max_height(), 1);
    }

    #[test]
    fn test_union_of_colors() {
        // 0 -red- 2 -blue- 1
        let red = matrix(&[vec![0, 0, 1], vec![0, 0, 0], vec![1, 0, 0]]);
        let blue = matrix(&[vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 0]]);
        let heights = Heights::compute(&red, &blue);

        assert_eq!(heights.as_slice(), &[0, 2, 1]);
        assert_eq!(heights.at_height(1), &[2]);
        assert_eq!(heights.at_height(2), &[1]);
    }

    #[test]
    fn test_empty_graph() {
        let empty = AdjacencyMatrix::zeros(0);
        let heights = Heights::compute(&empty, &empty);
        assert!(heights.as_slice().is_empty());
        assert_eq!(heights.max_height(), 0);
    }
}

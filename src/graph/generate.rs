//! Seeded random positions.
//!
//! Used for practice boards, property tests and benchmarks. The same seed
//! and parameters always produce the same position.

use super::game_graph::GameGraph;
use super::matrix::AdjacencyMatrix;
use crate::core::{Color, EngineConfig, PositionRng};

/// A random rooted tree on `size` vertices.
///
/// Each vertex `v > 0` hangs from a uniformly chosen earlier vertex by a
/// single stick, red with probability `red_probability`.
#[must_use]
pub fn random_tree(rng: &mut PositionRng, size: usize, red_probability: f64) -> GameGraph {
    let mut red = AdjacencyMatrix::zeros(size);
    let mut blue = AdjacencyMatrix::zeros(size);

    for vertex in 1..size {
        let parent = rng.gen_range_usize(0..vertex);
        match rng.gen_color(red_probability) {
            Color::Red => red.set(parent, vertex, 1),
            Color::Blue => blue.set(parent, vertex, 1),
        }
    }

    GameGraph::from_matrices(EngineConfig::default(), red, blue)
}

/// A random multigraph with `sticks` sticks on `size` vertices.
///
/// Endpoints are uniform, so loops, parallel sticks, cycles and floating
/// pieces all occur; floating pieces are pruned on construction.
#[must_use]
pub fn random_position(
    rng: &mut PositionRng,
    size: usize,
    sticks: usize,
    red_probability: f64,
) -> GameGraph {
    let mut red = AdjacencyMatrix::zeros(size);
    let mut blue = AdjacencyMatrix::zeros(size);

    if size > 0 {
        for _ in 0..sticks {
            let i = rng.gen_range_usize(0..size);
            let j = rng.gen_range_usize(0..size);
            let matrix = match rng.gen_color(red_probability) {
                Color::Red => &mut red,
                Color::Blue => &mut blue,
            };
            let count = matrix.get(i, j);
            matrix.set(i, j, count + 1);
        }
    }

    GameGraph::from_matrices(EngineConfig::default(), red, blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tree_is_tree() {
        let mut rng = PositionRng::new(42);
        for size in 1..20 {
            let graph = random_tree(&mut rng, size, 0.5);
            assert!(graph.is_tree());
            let sticks = graph.stick_count(Color::Red) + graph.stick_count(Color::Blue);
            assert_eq!(sticks, size as u64 - 1);
        }
    }

    #[test]
    fn test_random_tree_deterministic() {
        let a = random_tree(&mut PositionRng::new(9), 12, 0.5);
        let b = random_tree(&mut PositionRng::new(9), 12, 0.5);
        assert_eq!(a.edges(Color::Red), b.edges(Color::Red));
        assert_eq!(a.edges(Color::Blue), b.edges(Color::Blue));
    }

    #[test]
    fn test_random_position_pruned() {
        let mut rng = PositionRng::new(5);
        for _ in 0..20 {
            let graph = random_position(&mut rng, 8, 10, 0.5);
            let heights = graph.height_map();
            for vertex in heights.unreachable() {
                assert_eq!(graph.edges(Color::Red).degree(vertex), 0);
                assert_eq!(graph.edges(Color::Blue).degree(vertex), 0);
            }
        }
    }

    #[test]
    fn test_empty_position() {
        let graph = random_position(&mut PositionRng::new(1), 0, 5, 0.5);
        assert_eq!(graph.size(), 0);
        assert!(!graph.is_tree());
    }
}

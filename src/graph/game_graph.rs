//! Mutable Hackenbush position.
//!
//! A `GameGraph` holds one symmetric stick-count matrix per color over
//! vertices `0..size`, with vertex 0 as the ground. After construction and
//! after every move, any stick that no longer connects to the ground falls
//! away, so a vertex at the sentinel height never has a stick touching it.
//!
//! ## Versions
//!
//! Every successful move bumps `version()`. Structures derived from a
//! position (edge snapshots, `GameTree`) are point-in-time copies; compare
//! versions before trusting one.
//!
//! ```
//! use hackenbush::core::{Color, GameStatus};
//! use hackenbush::graph::GameGraph;
//!
//! // Ground with a red stick and a blue stick side by side.
//! let red = vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]];
//! let blue = vec![vec![0, 0, 1], vec![0, 0, 0], vec![1, 0, 0]];
//! let mut graph = GameGraph::new(3, &red, &blue).unwrap();
//!
//! let outcome = graph.apply_move(Color::Red, 0, 1).unwrap();
//! assert_eq!(outcome.status, GameStatus::BlueWon);
//! assert_eq!(
//!     outcome.to_string(),
//!     "This move removed 1 red sticks and 0 blue sticks. Blue has won."
//! );
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::heights::{Heights, GROUND};
use super::matrix::AdjacencyMatrix;
use crate::core::{Color, EngineConfig, GameStatus, GraphError, MoveError};

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Who moved.
    pub color: Color,
    /// The stick's endpoints as requested.
    pub endpoints: (usize, usize),
    /// Red sticks removed, including the cut stick if red.
    pub red_removed: u64,
    /// Blue sticks removed, including the cut stick if blue.
    pub blue_removed: u64,
    /// Status after the move, with this move as the last move.
    pub status: GameStatus,
    /// Position version after the move.
    pub version: u64,
}

impl MoveOutcome {
    /// Sticks that fell because they lost contact with the ground.
    #[must_use]
    pub fn cascaded(&self) -> u64 {
        self.red_removed + self.blue_removed - 1
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "This move removed {} red sticks and {} blue sticks. {}",
            self.red_removed, self.blue_removed, self.status
        )
    }
}

/// Sticks removed by a cascade pass, per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pruned {
    pub red: u64,
    pub blue: u64,
}

/// A Red-Blue Hackenbush position rooted at vertex 0.
#[derive(Clone, Debug)]
pub struct GameGraph {
    size: usize,
    red: AdjacencyMatrix,
    blue: AdjacencyMatrix,
    heights: Heights,
    version: u64,
    config: EngineConfig,
}

impl GameGraph {
    /// Build a position from red and blue stick-count rows.
    ///
    /// Both matrices must be `size x size`, symmetric and nonnegative.
    /// Sticks not connected to the ground are pruned immediately.
    pub fn new(size: usize, red: &[Vec<i64>], blue: &[Vec<i64>]) -> Result<Self, GraphError> {
        Self::with_config(EngineConfig::default(), size, red, blue)
    }

    /// Build a position under a custom configuration.
    pub fn with_config(
        config: EngineConfig,
        size: usize,
        red: &[Vec<i64>],
        blue: &[Vec<i64>],
    ) -> Result<Self, GraphError> {
        if let Some(limit) = config.max_vertices {
            if size > limit {
                return Err(GraphError::SizeLimit { size, limit });
            }
        }
        let red = AdjacencyMatrix::from_rows(Color::Red, size, red)?;
        let blue = AdjacencyMatrix::from_rows(Color::Blue, size, blue)?;
        Ok(Self::from_matrices(config, red, blue))
    }

    /// Build from already-validated matrices of equal size.
    pub(crate) fn from_matrices(
        config: EngineConfig,
        red: AdjacencyMatrix,
        blue: AdjacencyMatrix,
    ) -> Self {
        debug_assert_eq!(red.size(), blue.size());
        let heights = Heights::compute(&red, &blue);
        let mut graph = Self {
            size: red.size(),
            red,
            blue,
            heights,
            version: 0,
            config,
        };
        let pruned = graph.prune_detached();
        if pruned != Pruned::default() {
            log::debug!(
                "pruned {} red and {} blue detached sticks at construction",
                pruned.red,
                pruned.blue
            );
        }
        graph
    }

    // === Queries ===

    /// Number of vertices, connected or not.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Incremented by every successful move.
    #[inline]
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub(crate) fn restore_version(&mut self, version: u64) {
        self.version = version;
    }

    /// Point-in-time copy of one color's matrix.
    #[must_use]
    pub fn edges(&self, color: Color) -> AdjacencyMatrix {
        self.matrix(color).clone()
    }

    pub(crate) fn matrix(&self, color: Color) -> &AdjacencyMatrix {
        match color {
            Color::Red => &self.red,
            Color::Blue => &self.blue,
        }
    }

    /// Per-vertex heights; `size + 1` marks a vertex cut off from the ground.
    #[must_use]
    pub fn heights(&self) -> &[usize] {
        self.heights.as_slice()
    }

    /// Heights with per-height vertex groups, for layout consumers.
    #[must_use]
    pub fn height_map(&self) -> &Heights {
        &self.heights
    }

    #[must_use]
    pub fn max_height(&self) -> usize {
        self.heights.max_height()
    }

    /// Sticks of `color` remaining.
    #[must_use]
    pub fn stick_count(&self, color: Color) -> u64 {
        self.matrix(color).stick_count()
    }

    /// Every `(i, j)` with `i <= j` where `color` may cut a stick.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<(usize, usize)> {
        self.matrix(color).occupied().collect()
    }

    /// Status of the position given who moved last.
    ///
    /// With both colors present the game goes on. With one color left,
    /// that color wins. With nothing left, the last mover wins because
    /// the opponent has no move.
    #[must_use]
    pub fn status(&self, last_move: Color) -> GameStatus {
        match (self.red.has_sticks(), self.blue.has_sticks()) {
            (true, true) => GameStatus::Ongoing,
            (true, false) => GameStatus::RedWon,
            (false, true) => GameStatus::BlueWon,
            (false, false) => GameStatus::Cleared(last_move),
        }
    }

    /// Whether the position is a rooted tree.
    ///
    /// Breadth-first from the ground: fails on an empty graph, on any pair
    /// joined by more than one stick (of either color), on a loop, and on
    /// reaching a visited vertex through a second stick. Vertices with no
    /// sticks at all are allowed.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        if self.size == 0 {
            return false;
        }

        let mut visited = vec![false; self.size];
        let mut parent: Vec<Option<usize>> = vec![None; self.size];
        let mut queue = VecDeque::new();
        visited[GROUND] = true;
        queue.push_back(GROUND);

        while let Some(current) = queue.pop_front() {
            for next in 0..self.size {
                match self.multiplicity(current, next) {
                    0 => continue,
                    1 => {}
                    _ => return false,
                }
                if next == current {
                    return false;
                }
                if parent[current] == Some(next) {
                    continue;
                }
                if visited[next] {
                    return false;
                }
                visited[next] = true;
                parent[next] = Some(current);
                queue.push_back(next);
            }
        }
        true
    }

    /// Combined red and blue sticks between `i` and `j`.
    #[must_use]
    pub fn multiplicity(&self, i: usize, j: usize) -> u64 {
        u64::from(self.red.get(i, j)) + u64::from(self.blue.get(i, j))
    }

    // === Mutation ===

    /// Cut one `color` stick between `i` and `j`.
    ///
    /// On success, sticks that lost contact with the ground fall away and
    /// the outcome reports everything removed. On error the position is
    /// unchanged.
    pub fn apply_move(&mut self, color: Color, i: usize, j: usize) -> Result<MoveOutcome, MoveError> {
        for vertex in [i, j] {
            if vertex >= self.size {
                return Err(MoveError::VertexOutOfRange { vertex, size: self.size });
            }
        }
        if self.config.strict_termination {
            let status = self.status(color.opponent());
            if status.is_over() {
                return Err(MoveError::GameOver(status));
            }
        }

        let cut = match color {
            Color::Red => self.red.decrement(i, j),
            Color::Blue => self.blue.decrement(i, j),
        };
        if !cut {
            return Err(MoveError::NoSuchEdge { color, i, j });
        }

        let pruned = self.prune_detached();
        self.version += 1;

        let (red_removed, blue_removed) = match color {
            Color::Red => (pruned.red + 1, pruned.blue),
            Color::Blue => (pruned.red, pruned.blue + 1),
        };
        let outcome = MoveOutcome {
            color,
            endpoints: (i, j),
            red_removed,
            blue_removed,
            status: self.status(color),
            version: self.version,
        };
        log::debug!(
            "{color} cut ({i}, {j}): removed {red_removed} red, {blue_removed} blue; {}",
            outcome.status
        );
        Ok(outcome)
    }

    /// Recompute heights, then strip every stick touching a vertex that
    /// can no longer reach the ground.
    fn prune_detached(&mut self) -> Pruned {
        self.heights = Heights::compute(&self.red, &self.blue);
        let detached: Vec<usize> = self.heights.unreachable().collect();

        let mut pruned = Pruned::default();
        for vertex in detached {
            pruned.red += self.red.clear_vertex(vertex);
            pruned.blue += self.blue.clear_vertex(vertex);
        }
        if pruned != Pruned::default() {
            log::trace!("cascade removed {} red and {} blue sticks", pruned.red, pruned.blue);
        }
        pruned
    }
}

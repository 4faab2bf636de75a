//! Mutable Hackenbush positions.
//!
//! - `AdjacencyMatrix`: one color's stick counts, snapshot-friendly
//! - `Heights`: BFS distance from the ground, grouped by height
//! - `GameGraph`: moves, cascade pruning, status, tree certification
//! - `generate`: seeded random positions

pub mod codec;
pub mod game_graph;
pub mod generate;
pub mod heights;
pub mod matrix;

pub use game_graph::{GameGraph, MoveOutcome, Pruned};
pub use generate::{random_position, random_tree};
pub use heights::{Heights, GROUND};
pub use matrix::AdjacencyMatrix;

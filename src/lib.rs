//! # hackenbush
//!
//! A Red-Blue Hackenbush engine: a mutable position with cascading stick
//! removal, plus exact values for tree-shaped positions.
//!
//! ## Design Principles
//!
//! 1. **Ground at vertex 0**: every position is a symmetric colored
//!    multigraph over `0..size`; a stick that loses its path to vertex 0
//!    falls away immediately.
//!
//! 2. **Snapshots, not shared state**: edge snapshots and `GameTree`s are
//!    point-in-time copies stamped with the position's version.
//!
//! 3. **Exact arithmetic**: values are `Rational`s in lowest terms with
//!    checked `i64` arithmetic.
//!
//! ## Modules
//!
//! - `core`: colors, status, configuration, errors, RNG
//! - `value`: exact rationals
//! - `graph`: positions, moves, heights, tree certification, codec
//! - `tree`: tree snapshots and the value rule

pub mod core;
pub mod graph;
pub mod tree;
pub mod value;

// Re-export commonly used types
pub use crate::core::{
    Color, GameStatus,
    EngineConfig, ZeroDenominatorPolicy,
    GraphError, MoveError, TreeError, ValueError,
    PositionRng,
};

pub use crate::graph::{
    AdjacencyMatrix, GameGraph, Heights, MoveOutcome, Pruned, GROUND,
    random_position, random_tree,
};

pub use crate::tree::{GameTree, NodeId, TreeNode, TreeStats};

pub use crate::value::Rational;

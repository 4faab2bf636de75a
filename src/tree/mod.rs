//! Tree positions and their exact values.
//!
//! - `TreeNode`, `NodeId`: arena nodes with index links
//! - `GameTree`: immutable snapshot of a certified tree position
//! - `report`: value-or-status summary of any position

pub mod game_tree;
pub mod node;
pub mod report;

pub use game_tree::{stem_value, GameTree, TreeStats};
pub use node::{NodeId, TreeNode};

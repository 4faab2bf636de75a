//! Whole-position report: the exact value for trees, the status otherwise.

use super::game_tree::GameTree;
use crate::core::{Color, TreeError};
use crate::graph::GameGraph;

impl GameGraph {
    /// Take a tree snapshot of the current position.
    pub fn to_tree(&self) -> Result<GameTree, TreeError> {
        GameTree::from_graph(self)
    }

    /// Printable summary of the position.
    ///
    /// For a tree this is its value as `"numerator/denominator"`. Any other
    /// position, or a tree whose value cannot be represented, reports the
    /// status given who moved last.
    #[must_use]
    pub fn report(&self, last_move: Color) -> String {
        match self.to_tree().map(|tree| tree.value()) {
            Ok(Ok(value)) => value.to_text(),
            Ok(Err(err)) => {
                log::warn!("tree value unavailable ({err}), reporting status");
                self.status(last_move).to_string()
            }
            Err(TreeError::NotATree) => self.status(last_move).to_string(),
            Err(err) => {
                log::warn!("no tree snapshot ({err}), reporting status");
                self.status(last_move).to_string()
            }
        }
    }
}

//! Binary position codec.
//!
//! Positions are stored with `bincode` and fully re-validated on decode, so
//! a corrupted or hand-edited record can never produce an invalid graph.

use serde::{Deserialize, Serialize};

use super::game_graph::GameGraph;
use crate::core::{Color, EngineConfig, GraphError};

#[derive(Serialize, Deserialize)]
struct PositionRecord {
    size: usize,
    red: Vec<Vec<u32>>,
    blue: Vec<Vec<u32>>,
    version: u64,
    config: EngineConfig,
}

fn widen(rows: Vec<Vec<u32>>) -> Vec<Vec<i64>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(i64::from).collect())
        .collect()
}

impl GameGraph {
    /// Encode the position, its version and its configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GraphError> {
        let record = PositionRecord {
            size: self.size(),
            red: self.matrix(Color::Red).to_rows(),
            blue: self.matrix(Color::Blue).to_rows(),
            version: self.version(),
            config: self.config().clone(),
        };
        bincode::serialize(&record).map_err(|e| GraphError::Codec(e.to_string()))
    }

    /// Decode a position written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GraphError> {
        let record: PositionRecord =
            bincode::deserialize(bytes).map_err(|e| GraphError::Codec(e.to_string()))?;
        let mut graph = GameGraph::with_config(
            record.config,
            record.size,
            &widen(record.red),
            &widen(record.blue),
        )?;
        graph.restore_version(record.version);
        Ok(graph)
    }
}

//! Core engine types: colors, status, configuration, errors, RNG.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use color::{Color, GameStatus};
pub use config::{EngineConfig, ZeroDenominatorPolicy};
pub use error::{GraphError, MoveError, TreeError, ValueError};
pub use rng::PositionRng;

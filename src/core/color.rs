//! Stick colors and game status.
//!
//! ## Color
//!
//! Red and Blue are the two players of Red-Blue Hackenbush. Each stick
//! belongs to exactly one of them, and a player may only remove sticks of
//! their own color.
//!
//! ## GameStatus
//!
//! `Ongoing` while both colors still have sticks. When one color is left
//! that color has won. When the board is empty the last mover has won
//! (`Cleared`); a red win on an empty board prints without the closing
//! period, matching the texts older tools produced.
//!
//! ```
//! use hackenbush::core::{Color, GameStatus};
//!
//! assert_eq!(Color::Red.opponent(), Color::Blue);
//! assert_eq!(GameStatus::Cleared(Color::Red).winner(), Some(Color::Red));
//! ```

use serde::{Deserialize, Serialize};

/// A player, and the color of the sticks that player may remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Both colors, red first.
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Single-character token, `'r'` or `'b'`.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
        }
    }

    /// Parse a single-character token. Accepts upper or lower case.
    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        match token.to_ascii_lowercase() {
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

/// Status of a position after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Both colors still have at least one stick.
    Ongoing,
    /// Only red sticks remain.
    RedWon,
    /// Only blue sticks remain.
    BlueWon,
    /// No sticks remain; the last mover won.
    Cleared(Color),
}

impl GameStatus {
    /// The winner, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::RedWon => Some(Color::Red),
            GameStatus::BlueWon => Some(Color::Blue),
            GameStatus::Cleared(color) => Some(color),
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "The game is not yet won."),
            GameStatus::RedWon => write!(f, "Red has won."),
            GameStatus::BlueWon | GameStatus::Cleared(Color::Blue) => write!(f, "Blue has won."),
            GameStatus::Cleared(Color::Red) => write!(f, "Red has won"),
        }
    }
}

//! Final result of a game.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Board filled with no winner.
    Draw,
}

/// End-of-game message, told from the human's side.
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(Player::Human) => write!(f, "Player wins"),
            Outcome::Winner(Player::Computer) => write!(f, "Player losses"),
            Outcome::Draw => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::Winner(Player::Human).to_string(), "Player wins");
        assert_eq!(Outcome::Winner(Player::Computer).to_string(), "Player losses");
        assert_eq!(Outcome::Draw.to_string(), "Tie");
    }
}

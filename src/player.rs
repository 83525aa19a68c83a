//! Player identity.

use crate::board::Mark;
use serde::{Deserialize, Serialize};

/// A named participant bound to a mark.
///
/// Immutable after creation. The engine owns both instances for the
/// lifetime of the game; restart keeps them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// One-line identity string for display.
    pub fn info(&self) -> String {
        format!("Name: {}, Symbol: {}", self.name, self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_format() {
        let player = Player::new("player1", Mark::X);
        assert_eq!(player.info(), "Name: player1, Symbol: x");
    }
}

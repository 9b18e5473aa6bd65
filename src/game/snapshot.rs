//! Serializable captures of a running game.
//!
//! A [`GameSnapshot`] holds the three pieces that determine everything
//! a game will do next: the state, both decks (including which jail
//! cards are out), and the dice stream position. Restoring a snapshot
//! and replaying with the same agents reproduces the original game
//! move for move.
//!
//! Agents, observers, and the event log are deliberately not captured.
//! Agents are seated afresh on restore and the log restarts empty.

use serde::{Deserialize, Serialize};

use crate::cards::CardDecks;
use crate::core::GameRngState;
use crate::game::session::Game;
use crate::state::GameState;

/// Everything needed to resume a game later, on this machine or
/// another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The authoritative state
    pub state: GameState,
    /// Both draw piles, in order
    pub decks: CardDecks,
    /// Position of the dice stream
    pub dice: GameRngState,
}

impl GameSnapshot {
    /// Capture a game as it stands.
    #[must_use]
    pub fn capture(game: &Game) -> Self {
        Self {
            state: game.state().clone(),
            decks: game.decks().clone(),
            dice: game.dice_rng_state(),
        }
    }

    /// Encode to a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::PassiveAgent;
    use crate::game::session::GameBuilder;

    fn game() -> Game {
        GameBuilder::new()
            .player("Ada", PassiveAgent)
            .player("Babbage", PassiveAgent)
            .build(77)
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut game = game();
        game.play(3);

        let snapshot = game.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        let back = GameSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = game().snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn test_restored_game_carries_on_identically() {
        let mut original = game();
        original.play(2);
        let snapshot = original.snapshot();

        let mut restored = Game::from_snapshot(
            snapshot,
            vec![Box::new(PassiveAgent), Box::new(PassiveAgent)],
        );

        original.play(5);
        restored.play(5);
        assert_eq!(original.state(), restored.state());
    }
}

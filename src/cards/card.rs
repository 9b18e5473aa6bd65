//! Card data: text plus a closed effect.
//!
//! Cards do not execute themselves. The effect enum is interpreted by
//! the turn orchestrator, which owns the state and the decks; a card is
//! just the instruction and the sentence printed on it.

use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::core::Money;

/// What a drawn card does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Move forward to a fixed tile, collecting the GO bonus on the way
    /// past.
    Advance(TileId),
    /// Move forward to the next railway; rent there is doubled.
    AdvanceToNearestRailway,
    /// Move forward to the next utility; rent there is ten times the
    /// dice.
    AdvanceToNearestUtility,
    /// Move backward this many tiles. Never collects the GO bonus.
    GoBack(u8),
    /// Collect from the bank.
    Collect(Money),
    /// Pay the bank.
    Pay(Money),
    /// Collect this amount from every other player.
    CollectFromEach(Money),
    /// Pay this amount to every other player.
    PayEach(Money),
    /// Straight to jail, ending the turn.
    GoToJail,
    /// Keep the card until needed; it leaves the deck while held.
    GetOutOfJailFree,
    /// Pay per building standing on the holder's groups.
    Repairs { per_house: Money, per_hotel: Money },
}

/// One card: its printed text and its effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub text: String,
    pub effect: CardEffect,
}

impl Card {
    #[must_use]
    pub fn new(text: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            text: text.into(),
            effect,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_printed_text() {
        let card = Card::new("Advance to GO", CardEffect::Advance(TileId::new(0)));
        assert_eq!(card.to_string(), "Advance to GO");
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(
            "Make general repairs",
            CardEffect::Repairs {
                per_house: 25,
                per_hotel: 100,
            },
        );
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}

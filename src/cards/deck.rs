//! Deck cycling and the held-out jail card.
//!
//! A [`Deck`] is a cycle: the drawn card goes straight to the bottom.
//! The one exception is the get-out-of-jail card, which stays with the
//! player who drew it and rejoins the bottom of a deck only when spent
//! or refused.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardEffect};
use crate::core::GameRng;

/// One shuffled draw pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
    /// The jail card, while a player holds it
    held_jail_card: Option<Card>,
}

impl Deck {
    /// Shuffle `cards` into a fresh deck.
    #[must_use]
    pub fn new(mut cards: Vec<Card>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into(),
            held_jail_card: None,
        }
    }

    /// Build a deck in exactly the given order.
    #[must_use]
    pub fn in_order(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
            held_jail_card: None,
        }
    }

    /// Draw the top card.
    ///
    /// Ordinary cards cycle to the bottom immediately. A drawn
    /// get-out-of-jail card leaves the deck until
    /// [`Deck::return_jail_card`].
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop_front()?;
        if card.effect == CardEffect::GetOutOfJailFree {
            self.held_jail_card = Some(card.clone());
        } else {
            self.cards.push_back(card.clone());
        }
        Some(card)
    }

    /// Put the held jail card back on the bottom.
    ///
    /// Returns false if this deck's jail card is not out.
    pub fn return_jail_card(&mut self) -> bool {
        match self.held_jail_card.take() {
            Some(card) => {
                self.cards.push_back(card);
                true
            }
            None => false,
        }
    }

    /// Whether this deck's jail card is with a player.
    #[must_use]
    pub fn jail_card_out(&self) -> bool {
        self.held_jail_card.is_some()
    }

    /// Cards currently in the pile (excludes a held-out jail card).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top-to-bottom view of the pile.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// The two draw piles of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDecks {
    pub chance: Deck,
    pub community_chest: Deck,
}

impl CardDecks {
    /// Shuffle the standard card sets, each from its own RNG stream.
    #[must_use]
    pub fn standard(rng: &GameRng) -> Self {
        let mut chance_rng = rng.for_context("chance-deck");
        let mut chest_rng = rng.for_context("community-chest-deck");
        Self {
            chance: Deck::new(crate::cards::standard_chance_cards(), &mut chance_rng),
            community_chest: Deck::new(
                crate::cards::standard_community_chest_cards(),
                &mut chest_rng,
            ),
        }
    }

    /// Return a spent or refused jail card to the bottom of a deck,
    /// chance first.
    pub fn return_jail_card(&mut self) -> bool {
        self.chance.return_jail_card() || self.community_chest.return_jail_card()
    }

    /// How many jail cards are with players right now.
    #[must_use]
    pub fn jail_cards_out(&self) -> u8 {
        u8::from(self.chance.jail_card_out()) + u8::from(self.community_chest.jail_card_out())
    }
}

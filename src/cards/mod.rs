//! Chance and community chest cards.
//!
//! ## Key Types
//!
//! - `Card`: Instruction text plus a [`CardEffect`]
//! - `CardEffect`: What happens when the card is drawn
//! - `Deck`: A shuffled cycle of cards, drawn from the top and
//!   returned to the bottom
//! - `CardDecks`: The chance and community chest decks for one game
//!
//! ## Get Out of Jail Free
//!
//! A drawn jail card leaves its deck and is held by the player until
//! spent, at which point it returns to the bottom of a deck that is
//! missing one. Every other card goes straight back to the bottom on
//! draw, so decks never shrink.

pub mod card;
pub mod deck;
pub mod standard;

pub use card::{Card, CardEffect};
pub use deck::{CardDecks, Deck};
pub use standard::{standard_chance_cards, standard_community_chest_cards};

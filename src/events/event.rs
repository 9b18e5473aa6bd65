//! Event records: what happened, to whom, with what numbers.
//!
//! Every state change the engine performs is mirrored by exactly one
//! [`Event`]. The kind set is closed: consumers can match exhaustively
//! and a new kind is an engine change, not configuration.

use serde::{Deserialize, Serialize};

use crate::board::{GroupId, TileId};
use crate::core::{DiceRoll, Money, PlayerId};

/// Everything the engine reports having done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    TurnStarted,
    DiceRolled,
    Moved,
    GoBonus,
    PropertyPurchased,
    RentPaid,
    TaxPaid,
    ChanceDrawn,
    CommunityChestDrawn,
    CardIncome,
    CardCharge,
    SentToJail,
    JailEscapeFailed,
    JailFinePaid,
    JailCardUsed,
    JailCardReceived,
    ReleasedFromJail,
    HouseBuilt,
    HouseSold,
    HotelBuilt,
    HotelSold,
    Mortgaged,
    Unmortgaged,
    TradeExecuted,
    TradeRejected,
    PlayerBankrupt,
}

/// One entry in the game's history.
///
/// Events carry the acting player plus whichever context applies:
/// - `other`: the counterparty (rent recipient, trade partner)
/// - `tile` / `group`: where it happened
/// - `amount`: money moved
/// - `dice`: the roll involved
/// - `note`: free text, used for card descriptions
///
/// `seq` is assigned by the log when the event is recorded; it is 0 on
/// a freshly built event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub seq: u64,
    pub kind: EventKind,
    pub player: PlayerId,
    pub other: Option<PlayerId>,
    pub tile: Option<TileId>,
    pub group: Option<GroupId>,
    pub amount: Option<Money>,
    pub dice: Option<DiceRoll>,
    pub note: Option<String>,
}

impl Event {
    /// Create an event with just a kind and the acting player.
    #[must_use]
    pub fn new(kind: EventKind, player: PlayerId) -> Self {
        Self {
            seq: 0,
            kind,
            player,
            other: None,
            tile: None,
            group: None,
            amount: None,
            dice: None,
            note: None,
        }
    }

    /// Set the counterparty (builder pattern).
    #[must_use]
    pub fn with_other(mut self, other: PlayerId) -> Self {
        self.other = Some(other);
        self
    }

    /// Set the tile involved (builder pattern).
    #[must_use]
    pub fn with_tile(mut self, tile: TileId) -> Self {
        self.tile = Some(tile);
        self
    }

    /// Set the colour group involved (builder pattern).
    #[must_use]
    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// Set the money amount (builder pattern).
    #[must_use]
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the dice roll (builder pattern).
    #[must_use]
    pub fn with_dice(mut self, dice: DiceRoll) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Attach free text, e.g. a card description (builder pattern).
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Human-readable description, derived from the fields.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let amount = self.amount.unwrap_or(0);
        match self.kind {
            EventKind::TurnStarted => write!(f, "{} starts a turn", self.player),
            EventKind::DiceRolled => match self.dice {
                Some(dice) => write!(f, "{} rolls {}", self.player, dice),
                None => write!(f, "{} rolls", self.player),
            },
            EventKind::Moved => match self.tile {
                Some(tile) => write!(f, "{} moves to {}", self.player, tile),
                None => write!(f, "{} moves", self.player),
            },
            EventKind::GoBonus => {
                write!(f, "{} collects {} for passing GO", self.player, amount)
            }
            EventKind::PropertyPurchased => match self.tile {
                Some(tile) => write!(f, "{} buys {} for {}", self.player, tile, amount),
                None => write!(f, "{} buys a property for {}", self.player, amount),
            },
            EventKind::RentPaid => {
                write!(f, "{} pays {} rent", self.player, amount)?;
                if let Some(tile) = self.tile {
                    write!(f, " on {}", tile)?;
                }
                if let Some(other) = self.other {
                    write!(f, " to {}", other)?;
                }
                Ok(())
            }
            EventKind::TaxPaid => {
                write!(f, "{} pays {} tax", self.player, amount)?;
                if let Some(tile) = self.tile {
                    write!(f, " on {}", tile)?;
                }
                Ok(())
            }
            EventKind::ChanceDrawn => match &self.note {
                Some(note) => write!(f, "{} draws chance: {}", self.player, note),
                None => write!(f, "{} draws a chance card", self.player),
            },
            EventKind::CommunityChestDrawn => match &self.note {
                Some(note) => write!(f, "{} draws community chest: {}", self.player, note),
                None => write!(f, "{} draws a community chest card", self.player),
            },
            EventKind::CardIncome => match self.other {
                Some(other) => write!(f, "{} collects {} from {}", self.player, amount, other),
                None => write!(f, "{} collects {} from the bank", self.player, amount),
            },
            EventKind::CardCharge => match self.other {
                Some(other) => write!(f, "{} pays {} to {}", self.player, amount, other),
                None => write!(f, "{} pays {} to the bank", self.player, amount),
            },
            EventKind::SentToJail => write!(f, "{} is sent to jail", self.player),
            EventKind::JailEscapeFailed => match self.dice {
                Some(dice) => write!(f, "{} fails to roll out of jail ({})", self.player, dice),
                None => write!(f, "{} fails to roll out of jail", self.player),
            },
            EventKind::JailFinePaid => {
                write!(f, "{} pays the {} jail fine", self.player, amount)
            }
            EventKind::JailCardUsed => {
                write!(f, "{} plays a get-out-of-jail card", self.player)
            }
            EventKind::JailCardReceived => {
                write!(f, "{} receives a get-out-of-jail card", self.player)
            }
            EventKind::ReleasedFromJail => write!(f, "{} leaves jail", self.player),
            EventKind::HouseBuilt => match self.group {
                Some(group) => write!(f, "{} builds a house on {} for {}", self.player, group, amount),
                None => write!(f, "{} builds a house for {}", self.player, amount),
            },
            EventKind::HouseSold => match self.group {
                Some(group) => write!(f, "{} sells a house on {} for {}", self.player, group, amount),
                None => write!(f, "{} sells a house for {}", self.player, amount),
            },
            EventKind::HotelBuilt => match self.group {
                Some(group) => write!(f, "{} builds a hotel on {} for {}", self.player, group, amount),
                None => write!(f, "{} builds a hotel for {}", self.player, amount),
            },
            EventKind::HotelSold => match self.group {
                Some(group) => write!(f, "{} sells a hotel on {} for {}", self.player, group, amount),
                None => write!(f, "{} sells a hotel for {}", self.player, amount),
            },
            EventKind::Mortgaged => match self.tile {
                Some(tile) => write!(f, "{} mortgages {} for {}", self.player, tile, amount),
                None => write!(f, "{} mortgages a property for {}", self.player, amount),
            },
            EventKind::Unmortgaged => match self.tile {
                Some(tile) => write!(f, "{} unmortgages {} for {}", self.player, tile, amount),
                None => write!(f, "{} unmortgages a property for {}", self.player, amount),
            },
            EventKind::TradeExecuted => match self.other {
                Some(other) => write!(f, "{} trades with {}", self.player, other),
                None => write!(f, "{} completes a trade", self.player),
            },
            EventKind::TradeRejected => match self.other {
                Some(other) => write!(f, "{}'s trade with {} is rejected", self.player, other),
                None => write!(f, "{}'s trade is rejected", self.player),
            },
            EventKind::PlayerBankrupt => {
                write!(f, "{} goes bankrupt owing {}", self.player, amount)
            }
        }
    }
}

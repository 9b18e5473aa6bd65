//! Trade offers: two-sided bundles of properties, money and jail cards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::TileId;
use crate::core::{Money, PlayerId};
use crate::rules::{self, RuleViolation};
use crate::state::GameState;

/// One side of a trade: what a player hands over.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSide {
    /// Tiles changing hands
    pub properties: SmallVec<[TileId; 4]>,
    /// Cash on top, non-negative
    pub money: Money,
    /// Get-out-of-jail cards handed over
    pub jail_cards: u8,
}

impl TradeSide {
    /// True when the side moves nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.money == 0 && self.jail_cards == 0
    }
}

/// A proposed exchange between two players.
///
/// `gives` flows from `source` to `target`; `takes` flows back. An
/// offer is plain data until [`execute_trade`] validates and applies
/// it as a unit.
///
/// ## Usage
///
/// ```
/// use monopoly_engine::board::TileId;
/// use monopoly_engine::core::PlayerId;
/// use monopoly_engine::trade::TradeOffer;
///
/// let offer = TradeOffer::new(PlayerId::new(0), PlayerId::new(1))
///     .give_property(TileId::new(1))
///     .take_money(120);
/// assert_eq!(offer.gives.money, 0);
/// assert_eq!(offer.takes.money, 120);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffer {
    pub source: PlayerId,
    pub target: PlayerId,
    pub gives: TradeSide,
    pub takes: TradeSide,
}

impl TradeOffer {
    /// An empty offer between two players.
    #[must_use]
    pub fn new(source: PlayerId, target: PlayerId) -> Self {
        Self {
            source,
            target,
            gives: TradeSide::default(),
            takes: TradeSide::default(),
        }
    }

    // === Builders ===

    #[must_use]
    pub fn give_property(mut self, tile: TileId) -> Self {
        self.gives.properties.push(tile);
        self
    }

    #[must_use]
    pub fn take_property(mut self, tile: TileId) -> Self {
        self.takes.properties.push(tile);
        self
    }

    #[must_use]
    pub fn give_money(mut self, amount: Money) -> Self {
        self.gives.money = amount;
        self
    }

    #[must_use]
    pub fn take_money(mut self, amount: Money) -> Self {
        self.takes.money = amount;
        self
    }

    #[must_use]
    pub fn give_jail_cards(mut self, count: u8) -> Self {
        self.gives.jail_cards = count;
        self
    }

    #[must_use]
    pub fn take_jail_cards(mut self, count: u8) -> Self {
        self.takes.jail_cards = count;
        self
    }

    // === Validation ===

    /// Check the whole offer against the current state.
    ///
    /// Money is checked gross: each player must cover their own cash
    /// obligation from their present balance, without netting the two
    /// flows against each other.
    pub fn validate(&self, state: &GameState) -> Result<(), RuleViolation> {
        rules::ensure_player(state, self.source)?;
        rules::ensure_player(state, self.target)?;
        if self.source == self.target {
            return Err(RuleViolation::SamePlayer(self.source));
        }
        rules::ensure_amount(self.gives.money)?;
        rules::ensure_amount(self.takes.money)?;

        let moves_assets = !self.gives.properties.is_empty()
            || !self.takes.properties.is_empty()
            || self.gives.jail_cards > 0
            || self.takes.jail_cards > 0;
        if !moves_assets {
            return Err(RuleViolation::MoneyOnlyTrade);
        }

        let mut all_tiles: Vec<TileId> = self
            .gives
            .properties
            .iter()
            .chain(self.takes.properties.iter())
            .copied()
            .collect();
        all_tiles.sort_unstable();
        for pair in all_tiles.windows(2) {
            if pair[0] == pair[1] {
                return Err(RuleViolation::AssetOnBothSides(pair[0]));
            }
        }

        for &tile in &self.gives.properties {
            rules::can_transfer_property(state, self.source, self.target, tile)?;
        }
        for &tile in &self.takes.properties {
            rules::can_transfer_property(state, self.target, self.source, tile)?;
        }

        rules::ensure_funds(state, self.source, self.gives.money)?;
        rules::ensure_funds(state, self.target, self.takes.money)?;

        rules::can_exchange_jail_cards(
            state,
            self.source,
            self.target,
            self.gives.jail_cards,
            self.takes.jail_cards,
        )
    }
}

/// Validate an offer and apply every leg of it, or nothing.
///
/// Application happens on a scratch copy that only replaces the live
/// state once every step has gone through, so a refused step can never
/// leave a half-applied trade behind.
pub fn execute_trade(state: &mut GameState, offer: &TradeOffer) -> Result<(), RuleViolation> {
    offer.validate(state)?;

    let mut scratch = state.clone();
    if offer.gives.money > 0 {
        scratch.transfer(offer.source, offer.target, offer.gives.money)?;
    }
    if offer.takes.money > 0 {
        scratch.transfer(offer.target, offer.source, offer.takes.money)?;
    }
    for &tile in &offer.gives.properties {
        scratch.transfer_property(offer.source, offer.target, tile)?;
    }
    for &tile in &offer.takes.properties {
        scratch.transfer_property(offer.target, offer.source, tile)?;
    }
    if offer.gives.jail_cards > 0 || offer.takes.jail_cards > 0 {
        scratch.exchange_jail_cards(
            offer.source,
            offer.target,
            offer.gives.jail_cards,
            offer.takes.jail_cards,
        )?;
    }
    *state = scratch;
    Ok(())
}

//! The decision interface between the turn loop and player brains.

use crate::board::{GroupId, TileId};
use crate::core::{Money, PlayerId};
use crate::events::Event;
use crate::state::GameState;
use crate::trade::TradeOffer;

/// A liquidation plan raised against a balance shortfall.
///
/// The turn loop applies building sales first (hotels before houses),
/// then mortgages, then trades, re-attempting the failed payment once
/// the plan has run. Each entry in `downgrades` sells one level: the
/// hotel if one stands, otherwise one house from every street in the
/// group. List a group several times to sell several levels.
#[derive(Clone, Debug, Default)]
pub struct BankruptcyRequest {
    /// Groups to sell one building level from, one entry per level
    pub downgrades: Vec<GroupId>,
    /// Properties to mortgage
    pub mortgages: Vec<TileId>,
    /// Offers to put to other players
    pub trade_offers: Vec<TradeOffer>,
}

impl BankruptcyRequest {
    /// True when the plan raises nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.downgrades.is_empty() && self.mortgages.is_empty() && self.trade_offers.is_empty()
    }
}

/// Decision provider for one player.
///
/// The turn loop calls these hooks synchronously and blocks on every
/// answer. Agents inspect state read-only; whatever they return goes
/// through validation before it is applied, and an invalid suggestion
/// is skipped rather than aborting the turn.
///
/// Every method has a conservative default (decline, suggest nothing),
/// so an implementation only overrides what it cares about.
pub trait Agent: Send {
    /// Whether to buy the unowned property the player landed on.
    fn should_buy_property(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        _tile: TileId,
    ) -> bool {
        false
    }

    /// Groups to build one house level (or the hotel) on this turn.
    fn upgrade_suggestions(&mut self, _state: &GameState, _player: PlayerId) -> Vec<GroupId> {
        Vec::new()
    }

    /// Groups to sell one building level from this turn.
    fn downgrade_suggestions(&mut self, _state: &GameState, _player: PlayerId) -> Vec<GroupId> {
        Vec::new()
    }

    /// Properties to mortgage this turn.
    fn mortgage_suggestions(&mut self, _state: &GameState, _player: PlayerId) -> Vec<TileId> {
        Vec::new()
    }

    /// Mortgaged properties to buy back this turn.
    fn unmortgage_suggestions(&mut self, _state: &GameState, _player: PlayerId) -> Vec<TileId> {
        Vec::new()
    }

    /// Whether to pay the fine and leave jail before rolling.
    fn should_pay_jail_fine(&mut self, _state: &GameState, _player: PlayerId) -> bool {
        false
    }

    /// Whether to spend a held get-out-of-jail card.
    fn should_use_jail_card(&mut self, _state: &GameState, _player: PlayerId) -> bool {
        false
    }

    /// Whether to accept an offer another player has proposed.
    ///
    /// The offer has already been validated against current state when
    /// this is called.
    fn should_accept_trade(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        _offer: &TradeOffer,
    ) -> bool {
        false
    }

    /// Offers to put to other players this turn.
    fn trade_offers(&mut self, _state: &GameState, _player: PlayerId) -> Vec<TradeOffer> {
        Vec::new()
    }

    /// Plan to raise at least `shortfall` before being declared
    /// bankrupt. An empty plan concedes.
    fn handle_bankruptcy(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        _shortfall: Money,
    ) -> BankruptcyRequest {
        BankruptcyRequest::default()
    }

    /// Called with every event as it is recorded, in emission order.
    fn on_event(&mut self, _event: &Event) {}
}

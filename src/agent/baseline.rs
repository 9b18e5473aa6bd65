//! Baseline agents for simulations and tests.

use crate::agent::{Agent, BankruptcyRequest};
use crate::board::{GroupId, TileId};
use crate::core::{GameRng, Money, PlayerId};
use crate::state::GameState;
use crate::trade::TradeOffer;

/// Declines every decision it is asked.
///
/// Useful as a counterparty that never interferes, and for exercising
/// the forced paths: the forced jail fine after two failed rolls, and
/// bankruptcy with an empty plan.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassiveAgent;

impl Agent for PassiveAgent {}

/// Coin-flip decisions from a seeded stream.
///
/// Buys what it can afford half the time, occasionally builds on a
/// fully owned group, and liquidates everything when facing
/// bankruptcy. Two agents built from the same seed make the same
/// choices when shown the same states.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    fn pick_one<T: Copy>(&mut self, candidates: &[T]) -> Vec<T> {
        if candidates.is_empty() || !self.rng.gen_bool(0.5) {
            return Vec::new();
        }
        match self.rng.choose(candidates) {
            Some(&picked) => vec![picked],
            None => Vec::new(),
        }
    }
}

impl Agent for RandomAgent {
    fn should_buy_property(&mut self, state: &GameState, player: PlayerId, tile: TileId) -> bool {
        match state.board().tile(tile).price() {
            Some(price) => state.balance(player) >= price && self.rng.gen_bool(0.5),
            None => false,
        }
    }

    fn upgrade_suggestions(&mut self, state: &GameState, player: PlayerId) -> Vec<GroupId> {
        let candidates: Vec<GroupId> = state
            .board()
            .groups()
            .iter()
            .filter(|group| state.owns_entire_group(player, group.id))
            .filter(|group| !state.development(group.id).hotel)
            .map(|group| group.id)
            .collect();
        self.pick_one(&candidates)
    }

    fn unmortgage_suggestions(&mut self, state: &GameState, player: PlayerId) -> Vec<TileId> {
        let candidates: Vec<TileId> = state
            .properties_sorted(player)
            .into_iter()
            .filter(|tile| state.is_mortgaged(*tile))
            .collect();
        self.pick_one(&candidates)
    }

    fn should_pay_jail_fine(&mut self, state: &GameState, player: PlayerId) -> bool {
        state.balance(player) >= state.board().jail_fine() && self.rng.gen_bool(0.5)
    }

    fn should_use_jail_card(&mut self, state: &GameState, player: PlayerId) -> bool {
        state.jail_cards(player) > 0 && self.rng.gen_bool(0.5)
    }

    fn should_accept_trade(
        &mut self,
        _state: &GameState,
        _player: PlayerId,
        _offer: &TradeOffer,
    ) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn handle_bankruptcy(
        &mut self,
        state: &GameState,
        player: PlayerId,
        _shortfall: Money,
    ) -> BankruptcyRequest {
        let mut request = BankruptcyRequest::default();
        for group in state.board().groups() {
            if !state.owns_entire_group(player, group.id) {
                continue;
            }
            let built = state.development(group.id);
            let levels = built.houses + u8::from(built.hotel);
            for _ in 0..levels {
                request.downgrades.push(group.id);
            }
        }
        for tile in state.properties_sorted(player) {
            if !state.is_mortgaged(tile) {
                request.mortgages.push(tile);
            }
        }
        request
    }
}

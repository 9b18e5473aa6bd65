//! The authoritative game state and its validated mutators.
//!
//! ## Shape
//!
//! Per-player columns (balance, position, jail status, holdings) live in
//! [`PlayerMap`]s; shared facts (who owns what, what is mortgaged, what
//! is built) live in set and map fields. The [`Board`] rides along as
//! immutable data.
//!
//! ## Mutation discipline
//!
//! Every mutator validates through [`crate::rules`] before touching a
//! field. On `Err` the state is untouched; on `Ok` the whole transition
//! has been applied. Mutators fire no events; orchestration layers
//! record what they did.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Board, GroupId, TileId};
use crate::core::{Money, PlayerId, PlayerMap};
use crate::rules::{self, RentModifier, RuleViolation};

/// Buildings standing on a colour group.
///
/// Development is group-wide: every member street carries the same
/// house count, and a hotel replaces the four houses on all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Development {
    /// Houses per member street (0 to 4)
    pub houses: u8,
    /// Whether the group has been upgraded to a hotel
    pub hotel: bool,
}

impl Development {
    /// True when nothing is built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.houses == 0 && !self.hotel
    }
}

/// Complete state of one game in progress.
///
/// ## Usage
///
/// ```
/// use monopoly_engine::board::{Board, TileId};
/// use monopoly_engine::core::PlayerId;
/// use monopoly_engine::state::GameState;
///
/// let mut state = GameState::new(
///     Board::standard(),
///     vec!["Ada".to_string(), "Babbage".to_string()],
///     1500,
/// );
///
/// let ada = PlayerId::new(0);
/// let old_kent = TileId::new(1);
/// state.buy_property(ada, old_kent)?;
/// assert_eq!(state.balance(ada), 1440);
/// assert_eq!(state.owner_of(old_kent), Some(ada));
/// # Ok::<(), monopoly_engine::rules::RuleViolation>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    // === Per-player columns ===
    names: PlayerMap<String>,
    balances: PlayerMap<Money>,
    positions: PlayerMap<TileId>,
    in_jail: PlayerMap<bool>,
    turns_in_jail: PlayerMap<u8>,
    jail_cards: PlayerMap<u8>,

    // === Holdings ===
    properties: PlayerMap<ImHashSet<TileId>>,
    /// Union of all players' holdings, for O(1) ownership checks
    owned: ImHashSet<TileId>,
    mortgaged: ImHashSet<TileId>,
    development: FxHashMap<GroupId, Development>,

    // === Turn order ===
    current: PlayerId,
    turn_number: u32,
}

impl GameState {
    // === Construction ===

    /// Start a game on `board` with everyone at GO holding
    /// `starting_balance`.
    ///
    /// Panics if fewer than two names are given.
    #[must_use]
    pub fn new(board: Board, names: Vec<String>, starting_balance: Money) -> Self {
        let n = names.len();
        Self {
            names: PlayerMap::new(n, |p| names[p.index()].clone()),
            balances: PlayerMap::with_value(n, starting_balance),
            positions: PlayerMap::with_value(n, TileId::new(0)),
            in_jail: PlayerMap::with_value(n, false),
            turns_in_jail: PlayerMap::with_value(n, 0),
            jail_cards: PlayerMap::with_value(n, 0),
            properties: PlayerMap::new(n, |_| ImHashSet::new()),
            owned: ImHashSet::new(),
            mortgaged: ImHashSet::new(),
            development: FxHashMap::default(),
            current: PlayerId::new(0),
            turn_number: 1,
            board,
        }
    }

    // === Players ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.names.player_count()
    }

    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.names.contains(player)
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// Display name of a player.
    ///
    /// Panics if the player is out of range.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    // === Money ===

    #[must_use]
    pub fn balance(&self, player: PlayerId) -> Money {
        self.balances[player]
    }

    /// Pay `amount` to `player` from the bank.
    pub fn credit(&mut self, player: PlayerId, amount: Money) -> Result<(), RuleViolation> {
        rules::ensure_player(self, player)?;
        rules::ensure_amount(amount)?;
        self.balances[player] += amount;
        Ok(())
    }

    /// Take `amount` from `player` to the bank.
    pub fn debit(&mut self, player: PlayerId, amount: Money) -> Result<(), RuleViolation> {
        rules::ensure_player(self, player)?;
        rules::ensure_amount(amount)?;
        rules::ensure_funds(self, player, amount)?;
        self.balances[player] -= amount;
        Ok(())
    }

    /// Move `amount` between two players.
    pub fn transfer(
        &mut self,
        from: PlayerId,
        to: PlayerId,
        amount: Money,
    ) -> Result<(), RuleViolation> {
        rules::ensure_player(self, from)?;
        rules::ensure_player(self, to)?;
        rules::ensure_amount(amount)?;
        rules::ensure_funds(self, from, amount)?;
        self.balances[from] -= amount;
        self.balances[to] += amount;
        Ok(())
    }

    // === Position and movement ===

    #[must_use]
    pub fn position(&self, player: PlayerId) -> TileId {
        self.positions[player]
    }

    /// Move `steps` tiles forward, collecting the GO bonus on a wrap.
    ///
    /// Returns the destination and whether GO was passed.
    pub fn move_forward(
        &mut self,
        player: PlayerId,
        steps: u8,
    ) -> Result<(TileId, bool), RuleViolation> {
        rules::ensure_player(self, player)?;
        let (destination, passed_go) = self.board.advance(self.positions[player], steps);
        self.positions[player] = destination;
        if passed_go {
            self.balances[player] += self.board.go_bonus();
        }
        Ok((destination, passed_go))
    }

    /// Move `steps` tiles backward. Never pays the GO bonus.
    pub fn move_back(&mut self, player: PlayerId, steps: u8) -> Result<TileId, RuleViolation> {
        rules::ensure_player(self, player)?;
        let destination = self.board.retreat(self.positions[player], steps);
        self.positions[player] = destination;
        Ok(destination)
    }

    // === Jail ===

    #[must_use]
    pub fn in_jail(&self, player: PlayerId) -> bool {
        self.in_jail[player]
    }

    /// Failed escape rolls so far this stay (0 to 2).
    #[must_use]
    pub fn turns_in_jail(&self, player: PlayerId) -> u8 {
        self.turns_in_jail[player]
    }

    #[must_use]
    pub fn jail_cards(&self, player: PlayerId) -> u8 {
        self.jail_cards[player]
    }

    /// Put a player in jail. Moving there pays no GO bonus.
    pub fn send_to_jail(&mut self, player: PlayerId) -> Result<(), RuleViolation> {
        rules::ensure_player(self, player)?;
        if self.in_jail[player] {
            return Err(RuleViolation::AlreadyInJail(player));
        }
        self.positions[player] = self.board.jail_tile();
        self.in_jail[player] = true;
        self.turns_in_jail[player] = 0;
        Ok(())
    }

    /// Clear jail status without charging anything (a doubles escape).
    pub fn release_from_jail(&mut self, player: PlayerId) -> Result<(), RuleViolation> {
        rules::ensure_player(self, player)?;
        if !self.in_jail[player] {
            return Err(RuleViolation::NotInJail(player));
        }
        self.in_jail[player] = false;
        self.turns_in_jail[player] = 0;
        Ok(())
    }

    /// Pay the fine and walk free. Returns the fine charged.
    pub fn pay_jail_fine(&mut self, player: PlayerId) -> Result<Money, RuleViolation> {
        rules::can_pay_jail_fine(self, player)?;
        let fine = self.board.jail_fine();
        self.balances[player] -= fine;
        self.in_jail[player] = false;
        self.turns_in_jail[player] = 0;
        Ok(fine)
    }

    /// Spend a held get-out-of-jail card and walk free.
    pub fn use_jail_card(&mut self, player: PlayerId) -> Result<(), RuleViolation> {
        rules::can_use_jail_card(self, player)?;
        self.jail_cards[player] -= 1;
        self.in_jail[player] = false;
        self.turns_in_jail[player] = 0;
        Ok(())
    }

    /// Hand the player a get-out-of-jail card.
    pub fn grant_jail_card(&mut self, player: PlayerId) -> Result<(), RuleViolation> {
        rules::can_grant_jail_card(self, player)?;
        self.jail_cards[player] += 1;
        Ok(())
    }

    /// Note a failed escape roll. Returns the updated failure count.
    pub fn record_jail_failure(&mut self, player: PlayerId) -> Result<u8, RuleViolation> {
        rules::ensure_player(self, player)?;
        if !self.in_jail[player] {
            return Err(RuleViolation::NotInJail(player));
        }
        self.turns_in_jail[player] += 1;
        Ok(self.turns_in_jail[player])
    }

    // === Ownership and mortgages ===

    #[must_use]
    pub fn is_owned(&self, tile: TileId) -> bool {
        self.owned.contains(&tile)
    }

    #[must_use]
    pub fn owner_of(&self, tile: TileId) -> Option<PlayerId> {
        if !self.owned.contains(&tile) {
            return None;
        }
        self.player_ids().find(|&p| self.properties[p].contains(&tile))
    }

    /// A player's holdings as a set.
    #[must_use]
    pub fn properties(&self, player: PlayerId) -> &ImHashSet<TileId> {
        &self.properties[player]
    }

    /// A player's holdings in board order.
    ///
    /// Use this wherever iteration order feeds back into the game, so
    /// runs stay reproducible.
    #[must_use]
    pub fn properties_sorted(&self, player: PlayerId) -> Vec<TileId> {
        let mut tiles: Vec<TileId> = self.properties[player].iter().copied().collect();
        tiles.sort_unstable();
        tiles
    }

    #[must_use]
    pub fn is_mortgaged(&self, tile: TileId) -> bool {
        self.mortgaged.contains(&tile)
    }

    #[must_use]
    pub fn owns_entire_group(&self, player: PlayerId, group: GroupId) -> bool {
        self.board
            .tiles_in_group(group)
            .iter()
            .all(|t| self.properties[player].contains(t))
    }

    /// How many railways the player holds.
    #[must_use]
    pub fn owned_railways(&self, player: PlayerId) -> usize {
        self.board
            .railways()
            .iter()
            .filter(|t| self.properties[player].contains(t))
            .count()
    }

    /// Whether the player holds every utility on the board.
    #[must_use]
    pub fn owns_all_utilities(&self, player: PlayerId) -> bool {
        self.board
            .utilities()
            .iter()
            .all(|t| self.properties[player].contains(t))
    }

    /// Buy an unowned tile from the bank. Returns the price paid.
    pub fn buy_property(&mut self, player: PlayerId, tile: TileId) -> Result<Money, RuleViolation> {
        rules::can_buy_property(self, player, tile)?;
        let price = self
            .board
            .tile(tile)
            .price()
            .ok_or(RuleViolation::NotPurchasable(tile))?;
        self.balances[player] -= price;
        self.properties[player].insert(tile);
        self.owned.insert(tile);
        Ok(price)
    }

    /// Mortgage a tile for cash. Returns the amount credited.
    pub fn mortgage(&mut self, player: PlayerId, tile: TileId) -> Result<Money, RuleViolation> {
        rules::can_mortgage(self, player, tile)?;
        let value = self
            .board
            .tile(tile)
            .mortgage_value()
            .ok_or(RuleViolation::NotPurchasable(tile))?;
        self.mortgaged.insert(tile);
        self.balances[player] += value;
        Ok(value)
    }

    /// Lift a mortgage. Returns the buyback cost charged.
    pub fn unmortgage(&mut self, player: PlayerId, tile: TileId) -> Result<Money, RuleViolation> {
        rules::can_unmortgage(self, player, tile)?;
        let cost = self
            .board
            .tile(tile)
            .buyback_cost()
            .ok_or(RuleViolation::NotPurchasable(tile))?;
        self.mortgaged.remove(&tile);
        self.balances[player] -= cost;
        Ok(cost)
    }

    // === Buildings ===

    /// Buildings currently standing on a group.
    #[must_use]
    pub fn development(&self, group: GroupId) -> Development {
        self.development.get(&group).copied().unwrap_or_default()
    }

    /// Add one house to every street of the group. Returns the cost.
    pub fn build_house(&mut self, player: PlayerId, group: GroupId) -> Result<Money, RuleViolation> {
        rules::can_build_house(self, player, group)?;
        let cost = self.board.group(group).house_level_cost();
        self.development.entry(group).or_default().houses += 1;
        self.balances[player] -= cost;
        Ok(cost)
    }

    /// Sell one house from every street of the group back to the bank
    /// at half price. Returns the refund.
    pub fn sell_house(&mut self, player: PlayerId, group: GroupId) -> Result<Money, RuleViolation> {
        rules::can_sell_house(self, player, group)?;
        let refund = self.board.group(group).house_level_cost() / 2;
        if let Some(development) = self.development.get_mut(&group) {
            development.houses -= 1;
            if development.is_empty() {
                self.development.remove(&group);
            }
        }
        self.balances[player] += refund;
        Ok(refund)
    }

    /// Upgrade four houses to a hotel. Returns the cost.
    pub fn build_hotel(&mut self, player: PlayerId, group: GroupId) -> Result<Money, RuleViolation> {
        rules::can_build_hotel(self, player, group)?;
        let cost = self.board.group(group).hotel_cost;
        let development = self.development.entry(group).or_default();
        development.houses = 0;
        development.hotel = true;
        self.balances[player] -= cost;
        Ok(cost)
    }

    /// Sell a hotel at half price, restoring the four houses beneath
    /// it. Returns the refund.
    pub fn sell_hotel(&mut self, player: PlayerId, group: GroupId) -> Result<Money, RuleViolation> {
        rules::can_sell_hotel(self, player, group)?;
        let refund = self.board.group(group).hotel_cost / 2;
        if let Some(development) = self.development.get_mut(&group) {
            development.hotel = false;
            development.houses = 4;
        }
        self.balances[player] += refund;
        Ok(refund)
    }

    // === Rent and tax ===

    /// Charge `payer` the rent due on `tile` and credit its owner.
    /// Returns the amount moved.
    pub fn pay_rent(
        &mut self,
        payer: PlayerId,
        tile: TileId,
        dice_total: u8,
        modifier: RentModifier,
    ) -> Result<Money, RuleViolation> {
        let amount = rules::rent_due(self, payer, tile, dice_total, modifier)?;
        rules::ensure_funds(self, payer, amount)?;
        let owner = self.owner_of(tile).ok_or(RuleViolation::NotOwned(tile))?;
        self.balances[payer] -= amount;
        self.balances[owner] += amount;
        Ok(amount)
    }

    /// Charge the tax on a tax tile. Returns the amount paid.
    pub fn pay_tax(&mut self, player: PlayerId, tile: TileId) -> Result<Money, RuleViolation> {
        rules::ensure_player(self, player)?;
        let amount = rules::tax_due(self, tile)?;
        rules::ensure_funds(self, player, amount)?;
        self.balances[player] -= amount;
        Ok(amount)
    }

    // === Transfers ===

    /// Move a tile between players (for trades).
    pub fn transfer_property(
        &mut self,
        from: PlayerId,
        to: PlayerId,
        tile: TileId,
    ) -> Result<(), RuleViolation> {
        rules::can_transfer_property(self, from, to, tile)?;
        self.properties[from].remove(&tile);
        self.properties[to].insert(tile);
        Ok(())
    }

    /// Swap get-out-of-jail cards between players in one step.
    pub fn exchange_jail_cards(
        &mut self,
        source: PlayerId,
        target: PlayerId,
        source_gives: u8,
        target_gives: u8,
    ) -> Result<(), RuleViolation> {
        rules::can_exchange_jail_cards(self, source, target, source_gives, target_gives)?;
        self.jail_cards[source] = self.jail_cards[source] - source_gives + target_gives;
        self.jail_cards[target] = self.jail_cards[target] - target_gives + source_gives;
        Ok(())
    }

    // === Turn order ===

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Player-turns completed so far, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Hand the turn to the next player in seating order.
    ///
    /// This is the only end-of-turn transition; nothing else moves the
    /// turn marker.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.current = self.current.next(self.player_count());
        self.turn_number += 1;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(
            Board::standard(),
            vec!["Ada".to_string(), "Babbage".to_string(), "Curie".to_string()],
            1500,
        )
    }

    fn p(id: u8) -> PlayerId {
        PlayerId::new(id)
    }

    fn t(id: u8) -> TileId {
        TileId::new(id)
    }

    fn g(id: u8) -> GroupId {
        GroupId::new(id)
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.player_count(), 3);
        assert_eq!(state.current_player(), p(0));
        assert_eq!(state.turn_number(), 1);
        for player in state.player_ids() {
            assert_eq!(state.balance(player), 1500);
            assert_eq!(state.position(player), t(0));
            assert!(!state.in_jail(player));
            assert_eq!(state.jail_cards(player), 0);
            assert!(state.properties(player).is_empty());
        }
        assert_eq!(state.name(p(1)), "Babbage");
    }

    #[test]
    fn test_credit_and_debit() {
        let mut state = state();
        state.credit(p(0), 300).unwrap();
        assert_eq!(state.balance(p(0)), 1800);

        state.debit(p(0), 1800).unwrap();
        assert_eq!(state.balance(p(0)), 0);

        assert!(matches!(
            state.debit(p(0), 1),
            Err(RuleViolation::InsufficientBalance { .. })
        ));
        assert_eq!(
            state.credit(p(0), -5),
            Err(RuleViolation::NegativeAmount(-5))
        );
        assert_eq!(state.balance(p(0)), 0);
    }

    #[test]
    fn test_transfer_conserves_money() {
        let mut state = state();
        state.transfer(p(0), p(1), 400).unwrap();
        assert_eq!(state.balance(p(0)), 1100);
        assert_eq!(state.balance(p(1)), 1900);

        assert!(matches!(
            state.transfer(p(0), p(1), 1200),
            Err(RuleViolation::InsufficientBalance { .. })
        ));
        assert_eq!(state.balance(p(0)), 1100);
    }

    #[test]
    fn test_buy_property() {
        let mut state = state();
        let price = state.buy_property(p(0), t(39)).unwrap();
        assert_eq!(price, 400);
        assert_eq!(state.balance(p(0)), 1100);
        assert_eq!(state.owner_of(t(39)), Some(p(0)));
        assert!(state.is_owned(t(39)));
        assert_eq!(state.owner_of(t(37)), None);

        assert!(matches!(
            state.buy_property(p(1), t(39)),
            Err(RuleViolation::AlreadyOwned { .. })
        ));
    }

    #[test]
    fn test_mortgage_cycle() {
        let mut state = state();
        state.buy_property(p(0), t(1)).unwrap();
        assert_eq!(state.balance(p(0)), 1440);

        let credited = state.mortgage(p(0), t(1)).unwrap();
        assert_eq!(credited, 30);
        assert!(state.is_mortgaged(t(1)));
        assert_eq!(state.balance(p(0)), 1470);

        let cost = state.unmortgage(p(0), t(1)).unwrap();
        assert_eq!(cost, 33);
        assert!(!state.is_mortgaged(t(1)));
        assert_eq!(state.balance(p(0)), 1437);
    }

    #[test]
    fn test_building_money_flows() {
        let mut state = state();
        state.credit(p(0), 2000).unwrap();
        state.buy_property(p(0), t(1)).unwrap();
        state.buy_property(p(0), t(3)).unwrap();
        let after_purchases = state.balance(p(0));

        // Brown group: 2 streets at 50 per house
        let cost = state.build_house(p(0), g(0)).unwrap();
        assert_eq!(cost, 100);
        assert_eq!(state.development(g(0)).houses, 1);
        assert_eq!(state.balance(p(0)), after_purchases - 100);

        let refund = state.sell_house(p(0), g(0)).unwrap();
        assert_eq!(refund, 50);
        assert!(state.development(g(0)).is_empty());
        assert_eq!(state.balance(p(0)), after_purchases - 50);
    }

    #[test]
    fn test_hotel_replaces_houses_and_restores_them() {
        let mut state = state();
        state.credit(p(0), 2000).unwrap();
        state.buy_property(p(0), t(1)).unwrap();
        state.buy_property(p(0), t(3)).unwrap();
        for _ in 0..4 {
            state.build_house(p(0), g(0)).unwrap();
        }

        let cost = state.build_hotel(p(0), g(0)).unwrap();
        assert_eq!(cost, 50);
        let development = state.development(g(0));
        assert!(development.hotel);
        assert_eq!(development.houses, 0);

        let refund = state.sell_hotel(p(0), g(0)).unwrap();
        assert_eq!(refund, 25);
        let development = state.development(g(0));
        assert!(!development.hotel);
        assert_eq!(development.houses, 4);
    }

    #[test]
    fn test_movement_and_go_bonus() {
        let mut state = state();
        let (destination, passed_go) = state.move_forward(p(0), 10).unwrap();
        assert_eq!(destination, t(10));
        assert!(!passed_go);
        assert_eq!(state.balance(p(0)), 1500);

        let (destination, passed_go) = state.move_forward(p(0), 35).unwrap();
        assert_eq!(destination, t(5));
        assert!(passed_go);
        assert_eq!(state.balance(p(0)), 1700);
    }

    #[test]
    fn test_move_back_never_pays() {
        let mut state = state();
        let destination = state.move_back(p(0), 3).unwrap();
        assert_eq!(destination, t(37));
        assert_eq!(state.balance(p(0)), 1500);
    }

    #[test]
    fn test_jail_cycle() {
        let mut state = state();
        state.send_to_jail(p(0)).unwrap();
        assert!(state.in_jail(p(0)));
        assert_eq!(state.position(p(0)), t(10));
        assert_eq!(
            state.send_to_jail(p(0)),
            Err(RuleViolation::AlreadyInJail(p(0)))
        );

        assert_eq!(state.record_jail_failure(p(0)), Ok(1));
        assert_eq!(state.record_jail_failure(p(0)), Ok(2));

        let fine = state.pay_jail_fine(p(0)).unwrap();
        assert_eq!(fine, 50);
        assert!(!state.in_jail(p(0)));
        assert_eq!(state.turns_in_jail(p(0)), 0);
        assert_eq!(state.balance(p(0)), 1450);
        // Paying the fine does not move the player off the corner
        assert_eq!(state.position(p(0)), t(10));
    }

    #[test]
    fn test_jail_card_escape() {
        let mut state = state();
        state.grant_jail_card(p(0)).unwrap();
        state.send_to_jail(p(0)).unwrap();
        state.use_jail_card(p(0)).unwrap();
        assert!(!state.in_jail(p(0)));
        assert_eq!(state.jail_cards(p(0)), 0);
        assert_eq!(state.balance(p(0)), 1500);
    }

    #[test]
    fn test_jailed_entry_resets_failure_count() {
        let mut state = state();
        state.send_to_jail(p(0)).unwrap();
        state.record_jail_failure(p(0)).unwrap();
        state.release_from_jail(p(0)).unwrap();
        state.send_to_jail(p(0)).unwrap();
        assert_eq!(state.turns_in_jail(p(0)), 0);
    }

    #[test]
    fn test_rent_moves_money_between_players() {
        let mut state = state();
        state.buy_property(p(0), t(5)).unwrap();
        let amount = state
            .pay_rent(p(1), t(5), 7, RentModifier::Standard)
            .unwrap();
        assert_eq!(amount, 25);
        assert_eq!(state.balance(p(1)), 1475);
        assert_eq!(state.balance(p(0)), 1325);

        let total: Money = state.player_ids().map(|p| state.balance(p)).sum();
        assert_eq!(total, 4500 - 200); // only the purchase left the table
    }

    #[test]
    fn test_rent_insufficient_funds_leaves_state_alone() {
        let mut state = state();
        state.credit(p(0), 2000).unwrap();
        state.buy_property(p(0), t(39)).unwrap();
        state.buy_property(p(0), t(37)).unwrap();
        for _ in 0..4 {
            state.build_house(p(0), g(7)).unwrap();
        }
        state.build_hotel(p(0), g(7)).unwrap();

        state.debit(p(1), 1400).unwrap();
        let before = state.clone();
        // Mayfair with hotel: 2000 rent, payer holds 100
        assert!(matches!(
            state.pay_rent(p(1), t(39), 7, RentModifier::Standard),
            Err(RuleViolation::InsufficientBalance { .. })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_pay_tax() {
        let mut state = state();
        let amount = state.pay_tax(p(0), t(4)).unwrap();
        assert_eq!(amount, 200);
        assert_eq!(state.balance(p(0)), 1300);
        assert_eq!(
            state.pay_tax(p(0), t(0)),
            Err(RuleViolation::NotTaxTile(t(0)))
        );
    }

    #[test]
    fn test_transfer_property() {
        let mut state = state();
        state.buy_property(p(0), t(1)).unwrap();
        state.transfer_property(p(0), p(1), t(1)).unwrap();
        assert_eq!(state.owner_of(t(1)), Some(p(1)));
        assert!(state.properties(p(0)).is_empty());
        assert!(state.is_owned(t(1)));
    }

    #[test]
    fn test_exchange_jail_cards() {
        let mut state = state();
        state.grant_jail_card(p(0)).unwrap();
        state.grant_jail_card(p(0)).unwrap();
        state.exchange_jail_cards(p(0), p(1), 2, 0).unwrap();
        assert_eq!(state.jail_cards(p(0)), 0);
        assert_eq!(state.jail_cards(p(1)), 2);
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = state();
        assert_eq!(state.advance_turn(), p(1));
        assert_eq!(state.advance_turn(), p(2));
        assert_eq!(state.advance_turn(), p(0));
        assert_eq!(state.turn_number(), 4);
    }

    #[test]
    fn test_properties_sorted() {
        let mut state = state();
        state.buy_property(p(0), t(39)).unwrap();
        state.buy_property(p(0), t(1)).unwrap();
        state.buy_property(p(0), t(15)).unwrap();
        assert_eq!(state.properties_sorted(p(0)), vec![t(1), t(15), t(39)]);
    }

    #[test]
    fn test_railway_and_utility_census() {
        let mut state = state();
        state.buy_property(p(0), t(5)).unwrap();
        state.buy_property(p(0), t(25)).unwrap();
        assert_eq!(state.owned_railways(p(0)), 2);

        state.buy_property(p(0), t(12)).unwrap();
        assert!(!state.owns_all_utilities(p(0)));
        state.buy_property(p(0), t(28)).unwrap();
        assert!(state.owns_all_utilities(p(0)));
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = state();
        state.buy_property(p(0), t(1)).unwrap();
        state.buy_property(p(0), t(3)).unwrap();
        state.build_house(p(0), g(0)).unwrap();
        state.buy_property(p(0), t(5)).unwrap();
        state.mortgage(p(0), t(5)).unwrap();
        state.send_to_jail(p(1)).unwrap();
        state.advance_turn();

        let bytes = bincode::serialize(&state).unwrap();
        let restored: GameState = bincode::deserialize(&bytes).unwrap();
        assert_eq!(state, restored);
    }
}

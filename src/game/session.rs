//! The synchronous turn loop that drives a full game.
//!
//! [`Game`] owns the validated [`GameState`], both card decks, the dice
//! stream, the event log, and one [`Agent`] per seat. [`GameBuilder`]
//! assembles all of that from a single seed. Every turn runs the same
//! shape:
//!
//! 1. Jail resolution, if the player is locked up. Staying put ends the
//!    turn immediately.
//! 2. A fresh roll and forward movement, paying the GO bonus in
//!    passing.
//! 3. Landing resolution. Cards apply on the spot and may move the
//!    player again, re-entering resolution at the new tile.
//! 4. The trade phase, then the portfolio phase (building sales,
//!    mortgages, buy-backs, builds, in that order).
//! 5. On a double the whole sequence repeats, unless the player bought
//!    their way out of jail this turn.
//!
//! Agent suggestions are never trusted: each one goes through the same
//! validated mutators as everything else, and a refused suggestion is
//! logged and dropped. The one violation with teeth is a balance
//! shortfall, which opens the bankruptcy flow: the agent proposes a
//! liquidation plan, the loop applies it (hotels, then houses, then
//! mortgages, then trades), and the payment is re-attempted once. A
//! player who still cannot pay is bankrupt and the game is over.

use tracing::warn;

use crate::agent::{Agent, BankruptcyRequest};
use crate::board::{Board, GroupId, TileId, TileKind};
use crate::cards::{Card, CardDecks, CardEffect};
use crate::core::{DiceCup, DiceRoll, GameRng, GameRngState, Money, PlayerId, PlayerMap};
use crate::events::{Event, EventKind, EventLog, EventObserver, DEFAULT_RECENT_CAPACITY};
use crate::game::snapshot::GameSnapshot;
use crate::rules::{Bankruptcy, RentModifier, RuleViolation};
use crate::state::GameState;
use crate::trade::{execute_trade, TradeOffer};

/// Default starting balance handed to every player.
pub const DEFAULT_STARTING_BALANCE: Money = 1500;

/// How far [`Game::play`] got and why it stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Turns fully or partially played, including the fatal one
    pub turns_played: u32,
    /// The bankruptcy that ended play, if one did
    pub bankruptcy: Option<Bankruptcy>,
}

/// Where control goes after a landing has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    EndTurn,
}

/// How a jailed player's turn segment began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum JailExit {
    /// Still locked up; the turn is over
    Stayed,
    /// Rolled a double; moves now and may roll again after
    ByDoubles,
    /// Paid the fine or spent a card; moves now but never rolls again
    ByPayment,
}

// === Builder ===

/// Assembles a [`Game`] one seat at a time.
///
/// ```
/// use monopoly_engine::agent::PassiveAgent;
/// use monopoly_engine::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player("Ada", PassiveAgent)
///     .player("Babbage", PassiveAgent)
///     .build(42);
/// assert_eq!(game.state().player_count(), 2);
/// ```
pub struct GameBuilder {
    board: Board,
    starting_balance: Money,
    recent_events: usize,
    names: Vec<String>,
    agents: Vec<Box<dyn Agent>>,
    observers: Vec<Box<dyn EventObserver + Send>>,
}

impl GameBuilder {
    /// Standard board, standard balances, no players yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            starting_balance: DEFAULT_STARTING_BALANCE,
            recent_events: DEFAULT_RECENT_CAPACITY,
            names: Vec::new(),
            agents: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Play on a custom board.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Cash handed to every player at the start.
    #[must_use]
    pub fn starting_balance(mut self, amount: Money) -> Self {
        self.starting_balance = amount;
        self
    }

    /// Size of the event log's diagnostic ring.
    #[must_use]
    pub fn recent_events(mut self, capacity: usize) -> Self {
        self.recent_events = capacity;
        self
    }

    /// Seat a player, in turn order.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, agent: impl Agent + 'static) -> Self {
        self.names.push(name.into());
        self.agents.push(Box::new(agent));
        self
    }

    /// Register an observer for every event the game records.
    #[must_use]
    pub fn observer(mut self, observer: impl EventObserver + Send + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the game. One seed drives the dice and both deck
    /// shuffles, each on its own stream.
    ///
    /// # Panics
    /// Panics unless two or more players are seated.
    #[must_use]
    pub fn build(self, seed: u64) -> Game {
        let rng = GameRng::new(seed);
        let decks = CardDecks::standard(&rng);
        let dice = DiceCup::new(rng.for_context("dice"));
        let state = GameState::new(self.board, self.names, self.starting_balance);
        Game {
            state,
            decks,
            dice,
            events: EventLog::with_recent_capacity(self.recent_events),
            agents: PlayerMap::from_vec(self.agents),
            observers: self.observers,
        }
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// === Game ===

/// A running game: authoritative state plus everything that drives it.
pub struct Game {
    state: GameState,
    decks: CardDecks,
    dice: DiceCup,
    events: EventLog,
    agents: PlayerMap<Box<dyn Agent>>,
    observers: Vec<Box<dyn EventObserver + Send>>,
}

impl Game {
    /// The authoritative state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for scenario setup.
    ///
    /// Every mutator on [`GameState`] validates for itself, so this
    /// cannot corrupt the state; changes made here simply bypass the
    /// event log.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Both draw piles.
    #[must_use]
    pub fn decks(&self) -> &CardDecks {
        &self.decks
    }

    /// The event log.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The event log, for draining the consumer queue.
    pub fn events_mut(&mut self) -> &mut EventLog {
        &mut self.events
    }

    /// Current position of the dice stream, for snapshots.
    #[must_use]
    pub fn dice_rng_state(&self) -> GameRngState {
        self.dice.rng().state()
    }

    /// Register an observer for every event from here on.
    pub fn add_observer(&mut self, observer: impl EventObserver + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Capture everything needed to resume this game later.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// Resume a captured game with a fresh set of agents.
    ///
    /// The event log restarts empty and observers must be re-added;
    /// neither is part of a snapshot.
    ///
    /// # Panics
    /// Panics unless `agents` has one entry per seated player.
    #[must_use]
    pub fn from_snapshot(snapshot: GameSnapshot, agents: Vec<Box<dyn Agent>>) -> Self {
        assert_eq!(
            agents.len(),
            snapshot.state.player_count(),
            "One agent per seated player"
        );
        Self {
            state: snapshot.state,
            decks: snapshot.decks,
            dice: DiceCup::from_rng(GameRng::from_state(&snapshot.dice)),
            events: EventLog::new(),
            agents: PlayerMap::from_vec(agents),
            observers: Vec::new(),
        }
    }

    // === Playing ===

    /// Play one full turn for the current player.
    ///
    /// The turn marker does not move; call [`Game::advance_turn`] when
    /// ready. `Err` means the current turn bankrupted someone (not
    /// necessarily the player whose turn it was) and the game is over.
    pub fn play_turn(&mut self) -> Result<(), Bankruptcy> {
        let player = self.state.current_player();
        self.emit(Event::new(EventKind::TurnStarted, player));
        self.run_segment(player)
    }

    /// Hand the turn to the next player in seating order.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.state.advance_turn()
    }

    /// Play up to `max_turns` turns, stopping early at a bankruptcy.
    pub fn play(&mut self, max_turns: u32) -> PlayOutcome {
        for played in 0..max_turns {
            if let Err(bankruptcy) = self.play_turn() {
                return PlayOutcome {
                    turns_played: played + 1,
                    bankruptcy: Some(bankruptcy),
                };
            }
            self.advance_turn();
        }
        PlayOutcome {
            turns_played: max_turns,
            bankruptcy: None,
        }
    }

    // === Event fan-out ===

    fn emit(&mut self, event: Event) {
        let event = self.events.record(event);
        for agent in self.agents.values_mut() {
            agent.on_event(&event);
        }
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    // === Turn segments ===

    /// One roll-move-resolve pass, repeated on doubles.
    fn run_segment(&mut self, player: PlayerId) -> Result<(), Bankruptcy> {
        let mut paid_out_of_jail = false;
        if self.state.in_jail(player) {
            match self.jail_phase(player)? {
                JailExit::Stayed => return Ok(()),
                JailExit::ByDoubles => {}
                JailExit::ByPayment => paid_out_of_jail = true,
            }
        }

        let roll = self.dice.roll();
        self.emit(Event::new(EventKind::DiceRolled, player).with_dice(roll));

        let (destination, passed_go) = self
            .state
            .move_forward(player, roll.total())
            .expect("Current player can move");
        self.emit(
            Event::new(EventKind::Moved, player)
                .with_tile(destination)
                .with_dice(roll),
        );
        if passed_go {
            let bonus = self.state.board().go_bonus();
            self.emit(Event::new(EventKind::GoBonus, player).with_amount(bonus));
        }

        if self.resolve_landing(player, destination, roll, RentModifier::Standard)? == Flow::EndTurn
        {
            return Ok(());
        }

        self.trade_phase(player);
        self.portfolio_phase(player)?;

        if roll.is_double() && !paid_out_of_jail {
            return self.run_segment(player);
        }
        Ok(())
    }

    /// The decision ladder for a jailed player.
    ///
    /// An escape roll comes first and a double walks free on the spot.
    /// After two failed escapes the fine is compulsory. Otherwise the
    /// agent may spend a held card, then may pay the fine; declining
    /// everything records the failure and ends the turn.
    fn jail_phase(&mut self, player: PlayerId) -> Result<JailExit, Bankruptcy> {
        let roll = self.dice.roll();
        self.emit(Event::new(EventKind::DiceRolled, player).with_dice(roll));
        if roll.is_double() {
            self.state
                .release_from_jail(player)
                .expect("Jailed player can be released");
            self.emit(Event::new(EventKind::ReleasedFromJail, player).with_dice(roll));
            return Ok(JailExit::ByDoubles);
        }

        if self.state.turns_in_jail(player) >= 2 {
            return self.pay_fine_exit(player);
        }

        if self.state.jail_cards(player) > 0
            && self.agents[player].should_use_jail_card(&self.state, player)
        {
            match self.state.use_jail_card(player) {
                Ok(()) => {
                    self.decks.return_jail_card();
                    self.emit(Event::new(EventKind::JailCardUsed, player));
                    return Ok(JailExit::ByPayment);
                }
                Err(violation) => warn!(player = %player, %violation, "jail card skipped"),
            }
        }

        if self.agents[player].should_pay_jail_fine(&self.state, player) {
            return self.pay_fine_exit(player);
        }

        self.state
            .record_jail_failure(player)
            .expect("Jailed player can record a failure");
        self.emit(Event::new(EventKind::JailEscapeFailed, player).with_dice(roll));
        Ok(JailExit::Stayed)
    }

    fn pay_fine_exit(&mut self, player: PlayerId) -> Result<JailExit, Bankruptcy> {
        match self.settle(player, move |state| state.pay_jail_fine(player))? {
            Some(paid) => {
                self.emit(Event::new(EventKind::JailFinePaid, player).with_amount(paid));
                Ok(JailExit::ByPayment)
            }
            None => Ok(JailExit::Stayed),
        }
    }

    // === Payments and bankruptcy ===

    /// Apply a payment attempt for `player`.
    ///
    /// `Ok(Some(amount))` is success. A balance shortfall escalates
    /// through the bankruptcy flow, which may still succeed after
    /// liquidation. Any other violation is logged and skipped as
    /// `Ok(None)`, leaving the state untouched.
    fn settle<F>(&mut self, player: PlayerId, mut attempt: F) -> Result<Option<Money>, Bankruptcy>
    where
        F: FnMut(&mut GameState) -> Result<Money, RuleViolation>,
    {
        match attempt(&mut self.state) {
            Ok(amount) => Ok(Some(amount)),
            Err(RuleViolation::InsufficientBalance {
                required, balance, ..
            }) => self.escalate(player, required - balance, attempt),
            Err(violation) => {
                warn!(player = %player, %violation, "payment skipped");
                Ok(None)
            }
        }
    }

    /// Give a short player one chance to liquidate, then retry.
    fn escalate<F>(
        &mut self,
        player: PlayerId,
        shortfall: Money,
        mut attempt: F,
    ) -> Result<Option<Money>, Bankruptcy>
    where
        F: FnMut(&mut GameState) -> Result<Money, RuleViolation>,
    {
        let request = self.agents[player].handle_bankruptcy(&self.state, player, shortfall);
        if request.is_empty() {
            return Err(self.declare_bankrupt(player, shortfall));
        }
        self.run_liquidation(player, &request);

        match attempt(&mut self.state) {
            Ok(amount) => Ok(Some(amount)),
            Err(RuleViolation::InsufficientBalance {
                required, balance, ..
            }) => Err(self.declare_bankrupt(player, required - balance)),
            Err(violation) => {
                warn!(player = %player, %violation, "payment skipped after liquidation");
                Ok(None)
            }
        }
    }

    fn declare_bankrupt(&mut self, player: PlayerId, shortfall: Money) -> Bankruptcy {
        self.emit(Event::new(EventKind::PlayerBankrupt, player).with_amount(shortfall));
        Bankruptcy { player, shortfall }
    }

    /// Apply a liquidation plan: hotels, then houses, then mortgages,
    /// then trades. Invalid entries are logged and skipped.
    fn run_liquidation(&mut self, player: PlayerId, request: &BankruptcyRequest) {
        let mut house_levels = Vec::new();
        for &group in &request.downgrades {
            if self.state.development(group).hotel {
                self.sell_one_level(player, group);
            } else {
                house_levels.push(group);
            }
        }
        for group in house_levels {
            self.sell_one_level(player, group);
        }

        for &tile in &request.mortgages {
            self.apply_mortgage(player, tile);
        }

        for offer in &request.trade_offers {
            self.run_trade(player, offer);
        }
    }

    /// Sell one building level from a group: the hotel if one stands,
    /// otherwise a house from every street.
    fn sell_one_level(&mut self, player: PlayerId, group: GroupId) {
        if self.state.development(group).hotel {
            match self.state.sell_hotel(player, group) {
                Ok(refund) => self.emit(
                    Event::new(EventKind::HotelSold, player)
                        .with_group(group)
                        .with_amount(refund),
                ),
                Err(violation) => warn!(player = %player, %group, %violation, "hotel sale skipped"),
            }
        } else {
            match self.state.sell_house(player, group) {
                Ok(refund) => self.emit(
                    Event::new(EventKind::HouseSold, player)
                        .with_group(group)
                        .with_amount(refund),
                ),
                Err(violation) => warn!(player = %player, %group, %violation, "house sale skipped"),
            }
        }
    }

    fn apply_mortgage(&mut self, player: PlayerId, tile: TileId) {
        match self.state.mortgage(player, tile) {
            Ok(amount) => self.emit(
                Event::new(EventKind::Mortgaged, player)
                    .with_tile(tile)
                    .with_amount(amount),
            ),
            Err(violation) => warn!(player = %player, %tile, %violation, "mortgage skipped"),
        }
    }

    // === Trades ===

    /// Put one validated offer to its target and apply it on
    /// acceptance.
    fn run_trade(&mut self, proposer: PlayerId, offer: &TradeOffer) {
        if let Err(violation) = offer.validate(&self.state) {
            warn!(player = %proposer, %violation, "trade offer skipped");
            return;
        }
        let target = offer.target;
        if !self.agents[target].should_accept_trade(&self.state, target, offer) {
            self.emit(Event::new(EventKind::TradeRejected, offer.source).with_other(target));
            return;
        }
        match execute_trade(&mut self.state, offer) {
            Ok(()) => {
                self.emit(Event::new(EventKind::TradeExecuted, offer.source).with_other(target));
            }
            Err(violation) => warn!(player = %proposer, %violation, "trade failed to apply"),
        }
    }

    fn trade_phase(&mut self, player: PlayerId) {
        let offers = self.agents[player].trade_offers(&self.state, player);
        for offer in &offers {
            if offer.source != player {
                warn!(player = %player, source = %offer.source, "offer from the wrong seat skipped");
                continue;
            }
            self.run_trade(player, offer);
        }
    }

    // === Portfolio ===

    /// Run the voluntary portfolio actions in a fixed order: building
    /// sales, mortgages, buy-backs, then builds.
    fn portfolio_phase(&mut self, player: PlayerId) -> Result<(), Bankruptcy> {
        let downgrades = self.agents[player].downgrade_suggestions(&self.state, player);
        for group in downgrades {
            self.sell_one_level(player, group);
        }

        let mortgages = self.agents[player].mortgage_suggestions(&self.state, player);
        for tile in mortgages {
            self.apply_mortgage(player, tile);
        }

        let unmortgages = self.agents[player].unmortgage_suggestions(&self.state, player);
        for tile in unmortgages {
            if let Some(cost) = self.settle(player, move |state| state.unmortgage(player, tile))? {
                self.emit(
                    Event::new(EventKind::Unmortgaged, player)
                        .with_tile(tile)
                        .with_amount(cost),
                );
            }
        }

        let upgrades = self.agents[player].upgrade_suggestions(&self.state, player);
        for group in upgrades {
            let development = self.state.development(group);
            if development.hotel {
                warn!(player = %player, %group, "group is fully developed");
            } else if development.houses == 4 {
                if let Some(cost) =
                    self.settle(player, move |state| state.build_hotel(player, group))?
                {
                    self.emit(
                        Event::new(EventKind::HotelBuilt, player)
                            .with_group(group)
                            .with_amount(cost),
                    );
                }
            } else if let Some(cost) =
                self.settle(player, move |state| state.build_house(player, group))?
            {
                self.emit(
                    Event::new(EventKind::HouseBuilt, player)
                        .with_group(group)
                        .with_amount(cost),
                );
            }
        }
        Ok(())
    }

    // === Landing resolution ===

    /// React to the tile under the player. Cards may move the player
    /// again and re-enter this resolution at the new tile.
    fn resolve_landing(
        &mut self,
        player: PlayerId,
        tile: TileId,
        roll: DiceRoll,
        modifier: RentModifier,
    ) -> Result<Flow, Bankruptcy> {
        let kind = self.state.board().tile(tile).kind.clone();
        match kind {
            TileKind::Go | TileKind::Jail | TileKind::FreeParking => Ok(Flow::Continue),
            TileKind::GoToJail => {
                self.state.send_to_jail(player).expect("Player can be jailed");
                self.emit(
                    Event::new(EventKind::SentToJail, player)
                        .with_tile(self.state.position(player)),
                );
                Ok(Flow::EndTurn)
            }
            TileKind::Tax { .. } => {
                if let Some(paid) = self.settle(player, move |state| state.pay_tax(player, tile))? {
                    self.emit(
                        Event::new(EventKind::TaxPaid, player)
                            .with_tile(tile)
                            .with_amount(paid),
                    );
                }
                Ok(Flow::Continue)
            }
            TileKind::Chance => {
                let Some(card) = self.decks.chance.draw() else {
                    return Ok(Flow::Continue);
                };
                self.emit(
                    Event::new(EventKind::ChanceDrawn, player)
                        .with_tile(tile)
                        .with_note(card.text.clone()),
                );
                self.apply_card(player, &card, roll)
            }
            TileKind::CommunityChest => {
                let Some(card) = self.decks.community_chest.draw() else {
                    return Ok(Flow::Continue);
                };
                self.emit(
                    Event::new(EventKind::CommunityChestDrawn, player)
                        .with_tile(tile)
                        .with_note(card.text.clone()),
                );
                self.apply_card(player, &card, roll)
            }
            TileKind::Property { .. } | TileKind::Railway { .. } | TileKind::Utility { .. } => {
                self.resolve_purchasable(player, tile, roll, modifier)
            }
        }
    }

    /// Rent, or an offer to buy, on a property tile.
    fn resolve_purchasable(
        &mut self,
        player: PlayerId,
        tile: TileId,
        roll: DiceRoll,
        modifier: RentModifier,
    ) -> Result<Flow, Bankruptcy> {
        match self.state.owner_of(tile) {
            Some(owner) if owner == player => Ok(Flow::Continue),
            Some(owner) => {
                if self.state.is_mortgaged(tile) {
                    return Ok(Flow::Continue);
                }
                let total = roll.total();
                if let Some(paid) = self.settle(player, move |state| {
                    state.pay_rent(player, tile, total, modifier)
                })? {
                    self.emit(
                        Event::new(EventKind::RentPaid, player)
                            .with_other(owner)
                            .with_tile(tile)
                            .with_amount(paid),
                    );
                }
                Ok(Flow::Continue)
            }
            None => {
                if self.agents[player].should_buy_property(&self.state, player, tile) {
                    if let Some(price) =
                        self.settle(player, move |state| state.buy_property(player, tile))?
                    {
                        self.emit(
                            Event::new(EventKind::PropertyPurchased, player)
                                .with_tile(tile)
                                .with_amount(price),
                        );
                    }
                }
                Ok(Flow::Continue)
            }
        }
    }

    // === Cards ===

    /// Apply a drawn card on the spot.
    ///
    /// Movement cards resolve the new tile immediately, carrying the
    /// rent modifier the card dictates, and the roll that drew the
    /// card keeps feeding any dice-based rent.
    fn apply_card(
        &mut self,
        player: PlayerId,
        card: &Card,
        roll: DiceRoll,
    ) -> Result<Flow, Bankruptcy> {
        match card.effect {
            CardEffect::Advance(target) => {
                let steps = self
                    .state
                    .board()
                    .forward_distance(self.state.position(player), target);
                self.advance_and_resolve(player, steps, roll, RentModifier::Standard)
            }
            CardEffect::AdvanceToNearestRailway => {
                let from = self.state.position(player);
                match self.state.board().nearest_railway(from) {
                    Some(target) => {
                        let steps = self.state.board().forward_distance(from, target);
                        self.advance_and_resolve(player, steps, roll, RentModifier::DoubleRailway)
                    }
                    None => Ok(Flow::Continue),
                }
            }
            CardEffect::AdvanceToNearestUtility => {
                let from = self.state.position(player);
                match self.state.board().nearest_utility(from) {
                    Some(target) => {
                        let steps = self.state.board().forward_distance(from, target);
                        self.advance_and_resolve(player, steps, roll, RentModifier::TenTimesDice)
                    }
                    None => Ok(Flow::Continue),
                }
            }
            CardEffect::GoBack(steps) => {
                let destination = self
                    .state
                    .move_back(player, steps)
                    .expect("Current player can move");
                self.emit(Event::new(EventKind::Moved, player).with_tile(destination));
                self.resolve_landing(player, destination, roll, RentModifier::Standard)
            }
            CardEffect::Collect(amount) => {
                self.state
                    .credit(player, amount)
                    .expect("Current player can be credited");
                self.emit(Event::new(EventKind::CardIncome, player).with_amount(amount));
                Ok(Flow::Continue)
            }
            CardEffect::Pay(amount) => {
                if let Some(paid) = self.settle(player, move |state| {
                    state.debit(player, amount).map(|()| amount)
                })? {
                    self.emit(Event::new(EventKind::CardCharge, player).with_amount(paid));
                }
                Ok(Flow::Continue)
            }
            CardEffect::CollectFromEach(amount) => {
                let others: Vec<PlayerId> = self
                    .state
                    .player_ids()
                    .filter(|&other| other != player)
                    .collect();
                for other in others {
                    if let Some(paid) = self.settle(other, move |state| {
                        state.transfer(other, player, amount).map(|()| amount)
                    })? {
                        self.emit(
                            Event::new(EventKind::CardIncome, player)
                                .with_other(other)
                                .with_amount(paid),
                        );
                    }
                }
                Ok(Flow::Continue)
            }
            CardEffect::PayEach(amount) => {
                let others: Vec<PlayerId> = self
                    .state
                    .player_ids()
                    .filter(|&other| other != player)
                    .collect();
                for other in others {
                    if let Some(paid) = self.settle(player, move |state| {
                        state.transfer(player, other, amount).map(|()| amount)
                    })? {
                        self.emit(
                            Event::new(EventKind::CardCharge, player)
                                .with_other(other)
                                .with_amount(paid),
                        );
                    }
                }
                Ok(Flow::Continue)
            }
            CardEffect::GoToJail => {
                self.state.send_to_jail(player).expect("Player can be jailed");
                self.emit(
                    Event::new(EventKind::SentToJail, player)
                        .with_tile(self.state.position(player)),
                );
                Ok(Flow::EndTurn)
            }
            CardEffect::GetOutOfJailFree => {
                match self.state.grant_jail_card(player) {
                    Ok(()) => self.emit(Event::new(EventKind::JailCardReceived, player)),
                    Err(violation) => {
                        // At the holding cap the card goes straight back
                        self.decks.return_jail_card();
                        warn!(player = %player, %violation, "jail card refused");
                    }
                }
                Ok(Flow::Continue)
            }
            CardEffect::Repairs {
                per_house,
                per_hotel,
            } => {
                let bill = self.repairs_bill(player, per_house, per_hotel);
                if bill > 0 {
                    if let Some(paid) = self.settle(player, move |state| {
                        state.debit(player, bill).map(|()| bill)
                    })? {
                        self.emit(Event::new(EventKind::CardCharge, player).with_amount(paid));
                    }
                }
                Ok(Flow::Continue)
            }
        }
    }

    /// Move forward by `steps` and resolve the landing.
    fn advance_and_resolve(
        &mut self,
        player: PlayerId,
        steps: u8,
        roll: DiceRoll,
        modifier: RentModifier,
    ) -> Result<Flow, Bankruptcy> {
        let (destination, passed_go) = self
            .state
            .move_forward(player, steps)
            .expect("Current player can move");
        self.emit(Event::new(EventKind::Moved, player).with_tile(destination));
        if passed_go {
            let bonus = self.state.board().go_bonus();
            self.emit(Event::new(EventKind::GoBonus, player).with_amount(bonus));
        }
        self.resolve_landing(player, destination, roll, modifier)
    }

    /// Total repair charge across the player's buildings.
    ///
    /// Buildings stand on streets, so a group with two houses per
    /// street bills two houses for every member. A hotel bills one
    /// hotel per member street.
    fn repairs_bill(&self, player: PlayerId, per_house: Money, per_hotel: Money) -> Money {
        let mut bill = 0;
        for group in self.state.board().groups() {
            if !self.state.owns_entire_group(player, group.id) {
                continue;
            }
            let development = self.state.development(group.id);
            let streets = group.size() as Money;
            bill += per_house * Money::from(development.houses) * streets;
            if development.hotel {
                bill += per_hotel * streets;
            }
        }
        bill
    }
}

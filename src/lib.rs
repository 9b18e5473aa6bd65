//! # monopoly-engine
//!
//! A rules engine for Monopoly-style board games, built for
//! simulation.
//!
//! ## Design Principles
//!
//! 1. **Authoritative State**: Every mutation goes through a validated
//!    method on `GameState`. Agents suggest; the engine decides.
//!
//! 2. **Validate Then Apply**: Each mutator checks the full rule
//!    precondition first and touches nothing on failure. Funds are
//!    checked last, so a balance shortfall is always the final gate.
//!
//! 3. **Deterministic Replay**: One seed drives dice and both deck
//!    shuffles on independent streams. Same seed, same agents, same
//!    game.
//!
//! ## Architecture
//!
//! - **Synchronous Turn Loop**: `Game` runs the whole turn machine in
//!   one call, blocking on agent decisions. No queues, no async.
//!
//! - **Events As The Record**: Every applied change emits exactly one
//!   `Event`, in order, to an append-only log with synchronous
//!   fan-out.
//!
//! - **Persistent Collections**: Ownership sets use `im-rs`, so
//!   cloning a state for a snapshot or a what-if is cheap.
//!
//! ## Modules
//!
//! - `core`: Player IDs, money, seeded RNG, dice
//! - `board`: Tiles, colour groups, the standard board
//! - `rules`: Pure validation and the violation taxonomy
//! - `state`: The authoritative `GameState` and its mutators
//! - `trade`: Atomic multi-asset trade offers
//! - `events`: The event record, log, and observers
//! - `cards`: Chance and community chest decks
//! - `agent`: The decision trait and baseline implementations
//! - `game`: The turn loop, bankruptcy flow, and snapshots

pub mod agent;
pub mod board;
pub mod cards;
pub mod core;
pub mod events;
pub mod game;
pub mod rules;
pub mod state;
pub mod trade;

// Re-export commonly used types
pub use crate::core::{DiceCup, DiceRoll, GameRng, GameRngState, Money, PlayerId, PlayerMap};

pub use crate::board::{Board, GroupId, PropertyGroup, PropertyRent, Tile, TileId, TileKind};

pub use crate::rules::{Bankruptcy, RentModifier, RuleViolation};

pub use crate::state::{Development, GameState};

pub use crate::trade::{execute_trade, TradeOffer, TradeSide};

pub use crate::events::{Event, EventKind, EventLog, EventObserver};

pub use crate::cards::{Card, CardDecks, CardEffect, Deck};

pub use crate::agent::{Agent, BankruptcyRequest, PassiveAgent, RandomAgent};

pub use crate::game::{Game, GameBuilder, GameSnapshot, PlayOutcome};

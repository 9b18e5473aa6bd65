//! Core engine types: players, money, dice, RNG.
//!
//! This module contains the fundamental building blocks shared by every
//! other layer. Board data, validation and turn orchestration live in
//! their own modules and build on these.

pub mod dice;
pub mod player;
pub mod rng;

pub use dice::{DiceCup, DiceRoll};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};

/// Currency amounts throughout the engine.
///
/// Signed so that intermediate arithmetic (debts, shortfalls, trade
/// deltas) stays in one type; validated state never stores a negative
/// balance.
pub type Money = i64;

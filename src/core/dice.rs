//! Dice rolls and the cup that produces them.
//!
//! A [`DiceRoll`] is a plain value: two die faces plus derived queries
//! (total, doubles). The [`DiceCup`] owns the RNG stream that dice are
//! drawn from, so rolls are deterministic per game seed and independent
//! of deck shuffles or agent randomness.

use crate::core::GameRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of rolling two six-sided dice.
///
/// ```
/// use monopoly_engine::core::DiceRoll;
///
/// let roll = DiceRoll::new(3, 3);
/// assert_eq!(roll.total(), 6);
/// assert!(roll.is_double());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    /// First die face (1-6)
    pub first: u8,
    /// Second die face (1-6)
    pub second: u8,
}

impl DiceRoll {
    /// Create a roll from two die faces.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Sum of both dice (2-12).
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.first + self.second
    }

    /// True when both dice show the same face.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}={}", self.first, self.second, self.total())
    }
}

/// Source of dice rolls for one game.
///
/// Wraps a dedicated [`GameRng`] stream so that dice consumption never
/// perturbs other randomness domains.
#[derive(Clone, Debug)]
pub struct DiceCup {
    rng: GameRng,
}

impl DiceCup {
    /// Create a cup over its own RNG stream.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Roll both dice.
    pub fn roll(&mut self) -> DiceRoll {
        DiceRoll::new(self.rng.roll_die(), self.rng.roll_die())
    }

    /// Access the underlying RNG state for snapshots.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Rebuild a cup from a restored RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

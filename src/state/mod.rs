//! Authoritative game state.
//!
//! One [`GameState`] per game, owning the board and every mutable fact:
//! balances, positions, jail status, holdings, mortgages, buildings and
//! the turn marker.
//!
//! All mutation goes through validated methods that check with
//! [`crate::rules`] first and apply as a whole or not at all. The read
//! API is plain accessors; none of it allocates beyond the sorted
//! holdings helper.

pub mod game_state;

pub use game_state::{Development, GameState};

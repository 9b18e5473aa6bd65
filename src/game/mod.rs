//! Game orchestration: the turn loop, agents' seats at the table, and
//! snapshots.
//!
//! This is the layer that strings everything together. The state,
//! board, decks, and dice know nothing about turns; [`Game`] runs the
//! turn machine over them, consults one [`crate::agent::Agent`] per
//! seat, and records an [`crate::events::Event`] for every change it
//! applies.
//!
//! ## Key Types
//!
//! - `GameBuilder`: Seats players and seeds all randomness
//! - `Game`: The running game and its turn loop
//! - `PlayOutcome`: How a bounded run ended
//! - `GameSnapshot`: A serializable capture for later resumption
//!
//! ## Usage
//!
//! ```
//! use monopoly_engine::agent::{PassiveAgent, RandomAgent};
//! use monopoly_engine::game::GameBuilder;
//!
//! let mut game = GameBuilder::new()
//!     .player("Ada", RandomAgent::new(7))
//!     .player("Babbage", PassiveAgent)
//!     .build(42);
//!
//! let outcome = game.play(50);
//! assert!(outcome.turns_played <= 50);
//! ```

pub mod session;
pub mod snapshot;

pub use session::{Game, GameBuilder, PlayOutcome, DEFAULT_STARTING_BALANCE};
pub use snapshot::GameSnapshot;

//! Decision providers that drive player choices.
//!
//! ## Key Types
//!
//! - `Agent`: The decision hooks the turn loop queries
//! - `BankruptcyRequest`: A liquidation plan raised against a shortfall
//! - `PassiveAgent`: Declines everything
//! - `RandomAgent`: Coin-flip decisions from a seeded stream
//!
//! Agents read state, they never write it. Every suggestion an agent
//! returns is validated by the turn loop before it is applied; an
//! invalid one is logged and skipped, so a badly behaved agent
//! degrades the game rather than aborting it.

pub mod baseline;
pub mod traits;

pub use baseline::{PassiveAgent, RandomAgent};
pub use traits::{Agent, BankruptcyRequest};

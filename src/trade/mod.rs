//! Trading between players.
//!
//! A [`TradeOffer`] names two players and what each hands over:
//! properties, cash, get-out-of-jail cards. Offers are inert data;
//! [`execute_trade`] validates the whole bundle against the state and
//! applies every leg or none of them.
//!
//! Mortgaged tiles and members of developed groups never trade, and a
//! pure cash swap is refused; the consent question ("does the other
//! side agree?") belongs to the orchestration layer, not here.

pub mod offer;

pub use offer::{execute_trade, TradeOffer, TradeSide};

//! The validation layer: pure rule checks and rent arithmetic.
//!
//! Rules never mutate anything. State transitions live on
//! [`crate::state::GameState`], which calls in here first and applies
//! only after an `Ok`. An `Err` therefore always means the state is
//! exactly as it was.
//!
//! ## Key Types
//!
//! - `RuleViolation`: Closed enum of every way a request can be refused
//! - `Bankruptcy`: Terminal error raised after liquidation fails
//! - `RentModifier`: Card-driven rent adjustments
//!
//! The `can_*` functions mirror the mutators one-to-one; `rent_due` and
//! `tax_due` are the money tables.

pub mod error;
pub mod validate;

pub use error::{Bankruptcy, RuleViolation};
pub use validate::{
    can_build_hotel, can_build_house, can_buy_property, can_exchange_jail_cards,
    can_grant_jail_card, can_mortgage, can_pay_jail_fine, can_sell_hotel, can_sell_house,
    can_transfer_property, can_unmortgage, can_use_jail_card, ensure_amount, ensure_funds,
    ensure_owned_by, ensure_player, rent_due, tax_due, RentModifier, JAIL_CARD_LIMIT,
};

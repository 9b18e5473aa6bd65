//! Pure validation over game state.
//!
//! Every function here is read-only: it inspects a [`GameState`] and
//! either blesses an operation with `Ok` or names the violation. The
//! state mutators call these before touching anything, so a returned
//! error always means nothing changed.
//!
//! Funds are always the **last** check. Callers distinguish "you cannot
//! do that" from "you cannot afford that", and only the latter opens
//! the liquidation path.

use crate::board::{GroupId, TileId, TileKind};
use crate::core::{Money, PlayerId};
use crate::rules::RuleViolation;
use crate::state::GameState;

/// Most get-out-of-jail cards a player may hold at once.
///
/// Matches the number of such cards in circulation on the standard
/// decks (one per deck).
pub const JAIL_CARD_LIMIT: u8 = 2;

/// Adjustment to a rent computation, carried by the card that caused
/// the landing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RentModifier {
    #[default]
    Standard,
    /// Railway rent is doubled.
    DoubleRailway,
    /// Utility rent is ten times the dice, regardless of holdings.
    TenTimesDice,
}

/// Check the player exists in this game.
pub fn ensure_player(state: &GameState, player: PlayerId) -> Result<(), RuleViolation> {
    if state.has_player(player) {
        Ok(())
    } else {
        Err(RuleViolation::NoSuchPlayer(player))
    }
}

/// Check an amount is non-negative.
pub fn ensure_amount(amount: Money) -> Result<(), RuleViolation> {
    if amount < 0 {
        Err(RuleViolation::NegativeAmount(amount))
    } else {
        Ok(())
    }
}

/// Check the player can cover `required`.
pub fn ensure_funds(
    state: &GameState,
    player: PlayerId,
    required: Money,
) -> Result<(), RuleViolation> {
    let balance = state.balance(player);
    if balance < required {
        Err(RuleViolation::InsufficientBalance {
            player,
            required,
            balance,
        })
    } else {
        Ok(())
    }
}

/// May `player` buy `tile` from the bank?
pub fn can_buy_property(
    state: &GameState,
    player: PlayerId,
    tile: TileId,
) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    let price = state
        .board()
        .tile(tile)
        .price()
        .ok_or(RuleViolation::NotPurchasable(tile))?;
    if let Some(owner) = state.owner_of(tile) {
        return Err(RuleViolation::AlreadyOwned { tile, owner });
    }
    ensure_funds(state, player, price)
}

/// May `player` mortgage `tile`?
pub fn can_mortgage(
    state: &GameState,
    player: PlayerId,
    tile: TileId,
) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    ensure_owned_by(state, player, tile)?;
    if state.is_mortgaged(tile) {
        return Err(RuleViolation::AlreadyMortgaged(tile));
    }
    if let Some(group) = state.board().tile(tile).group() {
        let development = state.development(group);
        if development.houses > 0 || development.hotel {
            return Err(RuleViolation::GroupHasBuildings { tile, group });
        }
    }
    Ok(())
}

/// May `player` lift the mortgage on `tile`?
pub fn can_unmortgage(
    state: &GameState,
    player: PlayerId,
    tile: TileId,
) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    ensure_owned_by(state, player, tile)?;
    if !state.is_mortgaged(tile) {
        return Err(RuleViolation::NotMortgaged(tile));
    }
    let buyback = state
        .board()
        .tile(tile)
        .buyback_cost()
        .ok_or(RuleViolation::NotPurchasable(tile))?;
    ensure_funds(state, player, buyback)
}

/// May `player` add one house to every street of `group`?
pub fn can_build_house(
    state: &GameState,
    player: PlayerId,
    group: GroupId,
) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    ensure_group_buildable(state, player, group)?;
    let development = state.development(group);
    if development.hotel {
        return Err(RuleViolation::HotelPresent(group));
    }
    if development.houses >= 4 {
        return Err(RuleViolation::MaxHouses(group));
    }
    ensure_funds(state, player, state.board().group(group).house_level_cost())
}

/// May `player` sell one house from every street of `group`?
pub fn can_sell_house(
    state: &GameState,
    player: PlayerId,
    group: GroupId,
) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    ensure_whole_group_owned(state, player, group)?;
    let development = state.development(group);
    if development.hotel {
        return Err(RuleViolation::HotelPresent(group));
    }
    if development.houses == 0 {
        return Err(RuleViolation::NoHousesToSell(group));
    }
    Ok(())
}

/// May `player` upgrade `group` from four houses to a hotel?
pub fn can_build_hotel(
    state: &GameState,
    player: PlayerId,
    group: GroupId,
) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    ensure_group_buildable(state, player, group)?;
    let development = state.development(group);
    if development.hotel {
        return Err(RuleViolation::HotelPresent(group));
    }
    if development.houses != 4 {
        return Err(RuleViolation::NotEnoughHouses {
            group,
            houses: development.houses,
        });
    }
    ensure_funds(state, player, state.board().group(group).hotel_cost)
}

/// May `player` sell the hotel on `group` back to the bank?
pub fn can_sell_hotel(
    state: &GameState,
    player: PlayerId,
    group: GroupId,
) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    ensure_whole_group_owned(state, player, group)?;
    if !state.development(group).hotel {
        return Err(RuleViolation::NoHotelToSell(group));
    }
    Ok(())
}

/// May `player` buy their way out of jail?
pub fn can_pay_jail_fine(state: &GameState, player: PlayerId) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    if !state.in_jail(player) {
        return Err(RuleViolation::NotInJail(player));
    }
    ensure_funds(state, player, state.board().jail_fine())
}

/// May `player` play a get-out-of-jail card?
pub fn can_use_jail_card(state: &GameState, player: PlayerId) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    if !state.in_jail(player) {
        return Err(RuleViolation::NotInJail(player));
    }
    if state.jail_cards(player) == 0 {
        return Err(RuleViolation::NoJailCard(player));
    }
    Ok(())
}

/// May `player` receive one more get-out-of-jail card?
pub fn can_grant_jail_card(state: &GameState, player: PlayerId) -> Result<(), RuleViolation> {
    ensure_player(state, player)?;
    if state.jail_cards(player) >= JAIL_CARD_LIMIT {
        return Err(RuleViolation::JailCardLimit {
            player,
            limit: JAIL_CARD_LIMIT,
        });
    }
    Ok(())
}

/// Rent owed by `payer` after landing on `tile` with `dice_total`.
///
/// Covers streets (development and monopoly scaling), railways (count
/// scaling) and utilities (dice multiple). Mortgaged tiles yield no
/// rent and landing on your own tile owes nothing; both are violations
/// here because the orchestrator checks them before asking.
pub fn rent_due(
    state: &GameState,
    payer: PlayerId,
    tile: TileId,
    dice_total: u8,
    modifier: RentModifier,
) -> Result<Money, RuleViolation> {
    ensure_player(state, payer)?;
    let owner = state.owner_of(tile).ok_or(RuleViolation::NotOwned(tile))?;
    if owner == payer {
        return Err(RuleViolation::SelfRent {
            player: payer,
            tile,
        });
    }
    if state.is_mortgaged(tile) {
        return Err(RuleViolation::RentOnMortgaged(tile));
    }

    match &state.board().tile(tile).kind {
        TileKind::Property { group, rent, .. } => {
            let development = state.development(*group);
            let amount = if development.hotel {
                rent.with_hotel
            } else if development.houses > 0 {
                rent.with_houses[development.houses as usize - 1]
            } else if state.owns_entire_group(owner, *group) {
                rent.full_group
            } else {
                rent.base
            };
            Ok(amount)
        }
        TileKind::Railway { rent, .. } => {
            let owned = state.owned_railways(owner);
            let amount = rent[owned - 1];
            Ok(match modifier {
                RentModifier::DoubleRailway => amount * 2,
                _ => amount,
            })
        }
        TileKind::Utility { .. } => {
            let multiplier = match modifier {
                RentModifier::TenTimesDice => 10,
                _ if state.owns_all_utilities(owner) => 10,
                _ => 4,
            };
            Ok(multiplier * Money::from(dice_total))
        }
        _ => Err(RuleViolation::NotPurchasable(tile)),
    }
}

/// Tax owed on a tax tile.
pub fn tax_due(state: &GameState, tile: TileId) -> Result<Money, RuleViolation> {
    match state.board().tile(tile).kind {
        TileKind::Tax { amount } => Ok(amount),
        _ => Err(RuleViolation::NotTaxTile(tile)),
    }
}

/// May `tile` change hands from `from` to `to`?
///
/// Mortgaged tiles and members of developed groups never move; a trade
/// has to unwind those first.
pub fn can_transfer_property(
    state: &GameState,
    from: PlayerId,
    to: PlayerId,
    tile: TileId,
) -> Result<(), RuleViolation> {
    ensure_player(state, from)?;
    ensure_player(state, to)?;
    if from == to {
        return Err(RuleViolation::SamePlayer(from));
    }
    ensure_owned_by(state, from, tile)?;
    if state.is_mortgaged(tile) {
        return Err(RuleViolation::AlreadyMortgaged(tile));
    }
    if let Some(group) = state.board().tile(tile).group() {
        let development = state.development(group);
        if development.houses > 0 || development.hotel {
            return Err(RuleViolation::GroupHasBuildings { tile, group });
        }
    }
    Ok(())
}

/// May the two players swap get-out-of-jail cards in these quantities?
///
/// Checked as a net exchange: each player must hold what they give and
/// must end at or below [`JAIL_CARD_LIMIT`].
pub fn can_exchange_jail_cards(
    state: &GameState,
    source: PlayerId,
    target: PlayerId,
    source_gives: u8,
    target_gives: u8,
) -> Result<(), RuleViolation> {
    ensure_player(state, source)?;
    ensure_player(state, target)?;
    if source == target {
        return Err(RuleViolation::SamePlayer(source));
    }
    if state.jail_cards(source) < source_gives {
        return Err(RuleViolation::NoJailCard(source));
    }
    if state.jail_cards(target) < target_gives {
        return Err(RuleViolation::NoJailCard(target));
    }
    if state.jail_cards(source) - source_gives + target_gives > JAIL_CARD_LIMIT {
        return Err(RuleViolation::JailCardLimit {
            player: source,
            limit: JAIL_CARD_LIMIT,
        });
    }
    if state.jail_cards(target) - target_gives + source_gives > JAIL_CARD_LIMIT {
        return Err(RuleViolation::JailCardLimit {
            player: target,
            limit: JAIL_CARD_LIMIT,
        });
    }
    Ok(())
}

/// Check `tile` is held by exactly `player`.
pub fn ensure_owned_by(
    state: &GameState,
    player: PlayerId,
    tile: TileId,
) -> Result<(), RuleViolation> {
    match state.owner_of(tile) {
        None => Err(RuleViolation::NotOwned(tile)),
        Some(owner) if owner != player => Err(RuleViolation::NotTheOwner {
            tile,
            owner,
            player,
        }),
        Some(_) => Ok(()),
    }
}

fn ensure_whole_group_owned(
    state: &GameState,
    player: PlayerId,
    group: GroupId,
) -> Result<(), RuleViolation> {
    if state.owns_entire_group(player, group) {
        Ok(())
    } else {
        Err(RuleViolation::IncompleteGroup { player, group })
    }
}

/// Complete group ownership plus no mortgaged member. Required for any
/// building step.
fn ensure_group_buildable(
    state: &GameState,
    player: PlayerId,
    group: GroupId,
) -> Result<(), RuleViolation> {
    ensure_whole_group_owned(state, player, group)?;
    for &member in state.board().tiles_in_group(group) {
        if state.is_mortgaged(member) {
            return Err(RuleViolation::MortgagedMember {
                group,
                tile: member,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn state() -> GameState {
        GameState::new(
            Board::standard(),
            vec!["Ada".to_string(), "Babbage".to_string()],
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

    /// Give player 0 the brown group (tiles 1 and 3), fully paid.
    fn with_brown_group() -> GameState {
        let mut state = state();
        state.buy_property(p(0), t(1)).unwrap();
        state.buy_property(p(0), t(3)).unwrap();
        state
    }

    #[test]
    fn test_ensure_player() {
        let state = state();
        assert!(ensure_player(&state, p(0)).is_ok());
        assert_eq!(
            ensure_player(&state, p(7)),
            Err(RuleViolation::NoSuchPlayer(p(7)))
        );
    }

    #[test]
    fn test_ensure_funds() {
        let state = state();
        assert!(ensure_funds(&state, p(0), 1500).is_ok());
        assert_eq!(
            ensure_funds(&state, p(0), 1501),
            Err(RuleViolation::InsufficientBalance {
                player: p(0),
                required: 1501,
                balance: 1500
            })
        );
    }

    #[test]
    fn test_buy_checks() {
        let state = with_brown_group();

        // Non-purchasable tile
        assert_eq!(
            can_buy_property(&state, p(1), t(0)),
            Err(RuleViolation::NotPurchasable(t(0)))
        );
        // Already owned
        assert_eq!(
            can_buy_property(&state, p(1), t(1)),
            Err(RuleViolation::AlreadyOwned {
                tile: t(1),
                owner: p(0)
            })
        );
        // Fine otherwise
        assert!(can_buy_property(&state, p(1), t(6)).is_ok());
    }

    #[test]
    fn test_buy_requires_funds() {
        let mut state = state();
        state.debit(p(0), 1450).unwrap();
        // Mayfair costs 400, only 50 left
        assert!(matches!(
            can_buy_property(&state, p(0), t(39)),
            Err(RuleViolation::InsufficientBalance { required: 400, .. })
        ));
    }

    #[test]
    fn test_mortgage_checks() {
        let mut state = with_brown_group();

        assert_eq!(
            can_mortgage(&state, p(1), t(1)),
            Err(RuleViolation::NotTheOwner {
                tile: t(1),
                owner: p(0),
                player: p(1)
            })
        );
        assert_eq!(
            can_mortgage(&state, p(0), t(6)),
            Err(RuleViolation::NotOwned(t(6)))
        );

        assert!(can_mortgage(&state, p(0), t(1)).is_ok());
        state.mortgage(p(0), t(1)).unwrap();
        assert_eq!(
            can_mortgage(&state, p(0), t(1)),
            Err(RuleViolation::AlreadyMortgaged(t(1)))
        );
    }

    #[test]
    fn test_mortgage_blocked_by_buildings() {
        let mut state = with_brown_group();
        state.build_house(p(0), g(0)).unwrap();
        assert_eq!(
            can_mortgage(&state, p(0), t(1)),
            Err(RuleViolation::GroupHasBuildings {
                tile: t(1),
                group: g(0)
            })
        );
    }

    #[test]
    fn test_unmortgage_checks() {
        let mut state = with_brown_group();
        assert_eq!(
            can_unmortgage(&state, p(0), t(1)),
            Err(RuleViolation::NotMortgaged(t(1)))
        );
        state.mortgage(p(0), t(1)).unwrap();
        assert!(can_unmortgage(&state, p(0), t(1)).is_ok());
    }

    #[test]
    fn test_build_house_requires_complete_group() {
        let mut state = state();
        state.buy_property(p(0), t(1)).unwrap();
        assert_eq!(
            can_build_house(&state, p(0), g(0)),
            Err(RuleViolation::IncompleteGroup {
                player: p(0),
                group: g(0)
            })
        );
    }

    #[test]
    fn test_build_house_blocked_by_mortgaged_member() {
        let mut state = with_brown_group();
        state.mortgage(p(0), t(3)).unwrap();
        assert_eq!(
            can_build_house(&state, p(0), g(0)),
            Err(RuleViolation::MortgagedMember {
                group: g(0),
                tile: t(3)
            })
        );
    }

    #[test]
    fn test_house_ladder_limits() {
        let mut state = with_brown_group();
        for _ in 0..4 {
            state.build_house(p(0), g(0)).unwrap();
        }
        assert_eq!(
            can_build_house(&state, p(0), g(0)),
            Err(RuleViolation::MaxHouses(g(0)))
        );

        assert!(can_build_hotel(&state, p(0), g(0)).is_ok());
        state.build_hotel(p(0), g(0)).unwrap();
        assert_eq!(
            can_build_house(&state, p(0), g(0)),
            Err(RuleViolation::HotelPresent(g(0)))
        );
        assert_eq!(
            can_build_hotel(&state, p(0), g(0)),
            Err(RuleViolation::HotelPresent(g(0)))
        );
    }

    #[test]
    fn test_hotel_requires_four_houses() {
        let mut state = with_brown_group();
        state.build_house(p(0), g(0)).unwrap();
        assert_eq!(
            can_build_hotel(&state, p(0), g(0)),
            Err(RuleViolation::NotEnoughHouses {
                group: g(0),
                houses: 1
            })
        );
    }

    #[test]
    fn test_selling_buildings() {
        let mut state = with_brown_group();
        assert_eq!(
            can_sell_house(&state, p(0), g(0)),
            Err(RuleViolation::NoHousesToSell(g(0)))
        );
        assert_eq!(
            can_sell_hotel(&state, p(0), g(0)),
            Err(RuleViolation::NoHotelToSell(g(0)))
        );

        for _ in 0..4 {
            state.build_house(p(0), g(0)).unwrap();
        }
        state.build_hotel(p(0), g(0)).unwrap();

        // Hotel blocks house sales until it goes first
        assert_eq!(
            can_sell_house(&state, p(0), g(0)),
            Err(RuleViolation::HotelPresent(g(0)))
        );
        assert!(can_sell_hotel(&state, p(0), g(0)).is_ok());
    }

    #[test]
    fn test_jail_checks() {
        let mut state = state();
        assert_eq!(
            can_pay_jail_fine(&state, p(0)),
            Err(RuleViolation::NotInJail(p(0)))
        );
        assert_eq!(
            can_use_jail_card(&state, p(0)),
            Err(RuleViolation::NotInJail(p(0)))
        );

        state.send_to_jail(p(0)).unwrap();
        assert!(can_pay_jail_fine(&state, p(0)).is_ok());
        assert_eq!(
            can_use_jail_card(&state, p(0)),
            Err(RuleViolation::NoJailCard(p(0)))
        );

        state.grant_jail_card(p(0)).unwrap();
        assert!(can_use_jail_card(&state, p(0)).is_ok());
    }

    #[test]
    fn test_jail_card_limit() {
        let mut state = state();
        state.grant_jail_card(p(0)).unwrap();
        state.grant_jail_card(p(0)).unwrap();
        assert_eq!(
            can_grant_jail_card(&state, p(0)),
            Err(RuleViolation::JailCardLimit {
                player: p(0),
                limit: JAIL_CARD_LIMIT
            })
        );
    }

    #[test]
    fn test_transfer_property_checks() {
        let mut state = state();
        state.buy_property(p(0), t(1)).unwrap();

        assert_eq!(
            can_transfer_property(&state, p(0), p(0), t(1)),
            Err(RuleViolation::SamePlayer(p(0)))
        );
        assert_eq!(
            can_transfer_property(&state, p(1), p(0), t(1)),
            Err(RuleViolation::NotTheOwner {
                tile: t(1),
                owner: p(0),
                player: p(1)
            })
        );
        assert!(can_transfer_property(&state, p(0), p(1), t(1)).is_ok());

        state.mortgage(p(0), t(1)).unwrap();
        assert_eq!(
            can_transfer_property(&state, p(0), p(1), t(1)),
            Err(RuleViolation::AlreadyMortgaged(t(1)))
        );
    }

    #[test]
    fn test_transfer_blocked_by_group_buildings() {
        let mut state = with_brown_group();
        state.build_house(p(0), g(0)).unwrap();
        assert_eq!(
            can_transfer_property(&state, p(0), p(1), t(1)),
            Err(RuleViolation::GroupHasBuildings {
                tile: t(1),
                group: g(0)
            })
        );
    }

    #[test]
    fn test_jail_card_exchange_net_cap() {
        let mut state = state();
        state.grant_jail_card(p(0)).unwrap();
        state.grant_jail_card(p(0)).unwrap();
        state.grant_jail_card(p(1)).unwrap();
        state.grant_jail_card(p(1)).unwrap();

        // Net inflow would push the target over the cap
        assert_eq!(
            can_exchange_jail_cards(&state, p(0), p(1), 2, 1),
            Err(RuleViolation::JailCardLimit {
                player: p(1),
                limit: JAIL_CARD_LIMIT
            })
        );
        // A one-for-one swap keeps both at the cap
        assert!(can_exchange_jail_cards(&state, p(0), p(1), 1, 1).is_ok());
        // One-way gift would push the target over
        assert_eq!(
            can_exchange_jail_cards(&state, p(0), p(1), 1, 0),
            Err(RuleViolation::JailCardLimit {
                player: p(1),
                limit: JAIL_CARD_LIMIT
            })
        );

        // Cannot give more cards than held
        assert_eq!(
            can_exchange_jail_cards(&state, p(1), p(0), 3, 0),
            Err(RuleViolation::NoJailCard(p(1)))
        );
    }

    #[test]
    fn test_street_rent_ladder() {
        let mut state = state();
        state.buy_property(p(0), t(1)).unwrap();

        // Lone street: base rent
        assert_eq!(rent_due(&state, p(1), t(1), 7, RentModifier::Standard), Ok(2));

        // Complete group, undeveloped: doubled
        state.buy_property(p(0), t(3)).unwrap();
        assert_eq!(rent_due(&state, p(1), t(1), 7, RentModifier::Standard), Ok(4));

        // Houses override the monopoly rate
        state.build_house(p(0), g(0)).unwrap();
        assert_eq!(
            rent_due(&state, p(1), t(1), 7, RentModifier::Standard),
            Ok(10)
        );
        for _ in 0..3 {
            state.build_house(p(0), g(0)).unwrap();
        }
        assert_eq!(
            rent_due(&state, p(1), t(1), 7, RentModifier::Standard),
            Ok(160)
        );

        state.build_hotel(p(0), g(0)).unwrap();
        assert_eq!(
            rent_due(&state, p(1), t(1), 7, RentModifier::Standard),
            Ok(250)
        );
    }

    #[test]
    fn test_railway_rent_scales_with_count() {
        let mut state = state();
        state.buy_property(p(0), t(5)).unwrap();
        assert_eq!(
            rent_due(&state, p(1), t(5), 7, RentModifier::Standard),
            Ok(25)
        );

        state.buy_property(p(0), t(15)).unwrap();
        state.buy_property(p(0), t(25)).unwrap();
        state.buy_property(p(0), t(35)).unwrap();
        assert_eq!(
            rent_due(&state, p(1), t(5), 7, RentModifier::Standard),
            Ok(200)
        );

        assert_eq!(
            rent_due(&state, p(1), t(5), 7, RentModifier::DoubleRailway),
            Ok(400)
        );
    }

    #[test]
    fn test_utility_rent_multiplies_dice() {
        let mut state = state();
        state.buy_property(p(0), t(12)).unwrap();
        assert_eq!(
            rent_due(&state, p(1), t(12), 7, RentModifier::Standard),
            Ok(28)
        );

        state.buy_property(p(0), t(28)).unwrap();
        assert_eq!(
            rent_due(&state, p(1), t(12), 7, RentModifier::Standard),
            Ok(70)
        );
    }

    #[test]
    fn test_utility_card_modifier_overrides_holdings() {
        let mut state = state();
        state.buy_property(p(0), t(12)).unwrap();
        assert_eq!(
            rent_due(&state, p(1), t(12), 4, RentModifier::TenTimesDice),
            Ok(40)
        );
    }

    #[test]
    fn test_rent_rejections() {
        let mut state = state();
        assert_eq!(
            rent_due(&state, p(1), t(1), 7, RentModifier::Standard),
            Err(RuleViolation::NotOwned(t(1)))
        );

        state.buy_property(p(0), t(1)).unwrap();
        assert_eq!(
            rent_due(&state, p(0), t(1), 7, RentModifier::Standard),
            Err(RuleViolation::SelfRent {
                player: p(0),
                tile: t(1)
            })
        );

        state.mortgage(p(0), t(1)).unwrap();
        assert_eq!(
            rent_due(&state, p(1), t(1), 7, RentModifier::Standard),
            Err(RuleViolation::RentOnMortgaged(t(1)))
        );
    }

    #[test]
    fn test_tax_due() {
        let state = state();
        assert_eq!(tax_due(&state, t(4)), Ok(200));
        assert_eq!(tax_due(&state, t(38)), Ok(100));
        assert_eq!(tax_due(&state, t(0)), Err(RuleViolation::NotTaxTile(t(0))));
    }
}

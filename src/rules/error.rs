//! Rule violations and the bankruptcy terminal error.
//!
//! Every validated operation returns `Result<_, RuleViolation>`. A
//! violation means the state was left untouched. [`Bankruptcy`] is
//! different: it is not a rejected request but the end of a player,
//! raised by the turn orchestrator after liquidation fails.

use crate::board::{GroupId, TileId};
use crate::core::{Money, PlayerId};
use thiserror::Error;

/// A rejected operation. The state is unchanged when one of these
/// comes back.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    // === Players and money ===
    #[error("no such player: {0}")]
    NoSuchPlayer(PlayerId),
    #[error("{player} needs {required} but holds {balance}")]
    InsufficientBalance {
        player: PlayerId,
        required: Money,
        balance: Money,
    },
    #[error("money amounts must be non-negative, got {0}")]
    NegativeAmount(Money),

    // === Ownership ===
    #[error("{0} cannot be bought")]
    NotPurchasable(TileId),
    #[error("{tile} is already owned by {owner}")]
    AlreadyOwned { tile: TileId, owner: PlayerId },
    #[error("{0} is unowned")]
    NotOwned(TileId),
    #[error("{tile} belongs to {owner}, not {player}")]
    NotTheOwner {
        tile: TileId,
        owner: PlayerId,
        player: PlayerId,
    },

    // === Mortgages ===
    #[error("{0} is already mortgaged")]
    AlreadyMortgaged(TileId),
    #[error("{0} is not mortgaged")]
    NotMortgaged(TileId),
    #[error("cannot mortgage {tile} while {group} has buildings")]
    GroupHasBuildings { tile: TileId, group: GroupId },

    // === Building ===
    #[error("{player} does not own all of {group}")]
    IncompleteGroup { player: PlayerId, group: GroupId },
    #[error("cannot build on {group}: {tile} is mortgaged")]
    MortgagedMember { group: GroupId, tile: TileId },
    #[error("{0} already has four houses")]
    MaxHouses(GroupId),
    #[error("{0} already has a hotel")]
    HotelPresent(GroupId),
    #[error("a hotel on {group} requires four houses, found {houses}")]
    NotEnoughHouses { group: GroupId, houses: u8 },
    #[error("{0} has no houses to sell")]
    NoHousesToSell(GroupId),
    #[error("{0} has no hotel to sell")]
    NoHotelToSell(GroupId),

    // === Rent and tax ===
    #[error("{0} is not a tax tile")]
    NotTaxTile(TileId),
    #[error("{player} cannot owe rent on their own {tile}")]
    SelfRent { player: PlayerId, tile: TileId },
    #[error("no rent is due on mortgaged {0}")]
    RentOnMortgaged(TileId),

    // === Jail ===
    #[error("{0} is not in jail")]
    NotInJail(PlayerId),
    #[error("{0} is already in jail")]
    AlreadyInJail(PlayerId),
    #[error("{0} holds no get-out-of-jail card")]
    NoJailCard(PlayerId),
    #[error("{player} cannot hold more than {limit} jail cards")]
    JailCardLimit { player: PlayerId, limit: u8 },

    // === Trades ===
    #[error("a trade needs two distinct players, got {0} twice")]
    SamePlayer(PlayerId),
    #[error("{0} is listed twice in the trade")]
    AssetOnBothSides(TileId),
    #[error("a trade must move at least one property or jail card")]
    MoneyOnlyTrade,
}

/// A player has gone under: a debt came due, liquidation was attempted,
/// and the shortfall remained.
///
/// This is terminal for the turn. The engine records the event and
/// surfaces the error; it does not remove the player or redistribute
/// their assets.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{player} is bankrupt, short {shortfall}")]
pub struct Bankruptcy {
    pub player: PlayerId,
    pub shortfall: Money,
}

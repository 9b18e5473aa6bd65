//! Tiles and the closed set of tile kinds.
//!
//! Every board position is one [`Tile`]. The [`TileKind`] enum is closed:
//! landing resolution matches on it exhaustively, so adding a kind is a
//! deliberate engine change rather than a data tweak.

use crate::board::GroupId;
use crate::core::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a tile on the board.
///
/// Positions are dense indices starting at 0 (GO). Movement arithmetic
/// wraps modulo the board length.
///
/// ```
/// use monopoly_engine::board::TileId;
///
/// let go = TileId::new(0);
/// assert_eq!(go.index(), 0);
/// assert_eq!(go.to_string(), "Tile 0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(u8);

impl TileId {
    /// Create a tile id for a board position.
    #[must_use]
    pub const fn new(position: u8) -> Self {
        Self(position)
    }

    /// The raw board position.
    #[must_use]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// Position as a usize for indexing.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile {}", self.0)
    }
}

/// Rent schedule for a street property.
///
/// Which entry applies depends on ownership and development: `base` for a
/// lone holding, `full_group` once the owner holds the whole colour group
/// undeveloped, then the house levels and finally the hotel rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRent {
    /// Rent with no group monopoly and no buildings
    pub base: Money,
    /// Rent when the owner holds the complete group, undeveloped
    pub full_group: Money,
    /// Rent at 1 through 4 houses
    pub with_houses: [Money; 4],
    /// Rent with a hotel
    pub with_hotel: Money,
}

/// What a tile is and the numbers attached to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// The starting corner. Passing it pays the board's GO bonus.
    Go,
    /// A street property belonging to a colour group.
    Property {
        group: GroupId,
        price: Money,
        rent: PropertyRent,
        mortgage: Money,
        buyback: Money,
    },
    /// Draw from the community chest deck.
    CommunityChest,
    /// Pay a fixed amount to the bank.
    Tax { amount: Money },
    /// A railway station. Rent scales with how many the owner holds.
    Railway {
        price: Money,
        /// Rent at 1 through 4 railways owned
        rent: [Money; 4],
        mortgage: Money,
        buyback: Money,
    },
    /// Draw from the chance deck.
    Chance,
    /// The jail corner. Harmless when just visiting.
    Jail,
    /// A utility. Rent is a multiple of the dice roll that landed here.
    Utility {
        price: Money,
        mortgage: Money,
        buyback: Money,
    },
    /// The free corner. Nothing happens.
    FreeParking,
    /// Landing here sends the player to jail and ends the turn.
    GoToJail,
}

/// One board position: a name plus its kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub name: String,
    pub kind: TileKind,
}

impl Tile {
    // === Queries ===

    /// True for tiles a player can own (streets, railways, utilities).
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        matches!(
            self.kind,
            TileKind::Property { .. } | TileKind::Railway { .. } | TileKind::Utility { .. }
        )
    }

    /// Purchase price, for purchasable tiles.
    #[must_use]
    pub fn price(&self) -> Option<Money> {
        match self.kind {
            TileKind::Property { price, .. }
            | TileKind::Railway { price, .. }
            | TileKind::Utility { price, .. } => Some(price),
            _ => None,
        }
    }

    /// Amount the bank pays when this tile is mortgaged.
    #[must_use]
    pub fn mortgage_value(&self) -> Option<Money> {
        match self.kind {
            TileKind::Property { mortgage, .. }
            | TileKind::Railway { mortgage, .. }
            | TileKind::Utility { mortgage, .. } => Some(mortgage),
            _ => None,
        }
    }

    /// Cost to lift a mortgage (principal plus interest).
    #[must_use]
    pub fn buyback_cost(&self) -> Option<Money> {
        match self.kind {
            TileKind::Property { buyback, .. }
            | TileKind::Railway { buyback, .. }
            | TileKind::Utility { buyback, .. } => Some(buyback),
            _ => None,
        }
    }

    /// Colour group, for street properties only.
    #[must_use]
    pub fn group(&self) -> Option<GroupId> {
        match self.kind {
            TileKind::Property { group, .. } => Some(group),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

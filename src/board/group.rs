//! Colour groups and their building economics.

use crate::board::TileId;
use crate::core::Money;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Identifier for a colour group of street properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(u8);

impl GroupId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(&self) -> u8 {
        self.0
    }

    /// Id as a usize for indexing.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {}", self.0)
    }
}

/// A colour group: its member streets and what building on it costs.
///
/// Development is tracked per group, not per street. Houses are built on
/// every member at once, so one build step costs `house_cost` times the
/// group size. The hotel upgrade is a flat `hotel_cost`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroup {
    pub id: GroupId,
    pub name: String,
    /// Board positions of the member streets
    pub members: SmallVec<[TileId; 4]>,
    /// Cost of one house on one member street
    pub house_cost: Money,
    /// Flat cost to upgrade the group from four houses to a hotel
    pub hotel_cost: Money,
}

impl PropertyGroup {
    /// Number of streets in the group.
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Cost of one house level across the whole group.
    #[must_use]
    pub fn house_level_cost(&self) -> Money {
        self.house_cost * self.members.len() as Money
    }

    #[must_use]
    pub fn contains(&self, tile: TileId) -> bool {
        self.members.contains(&tile)
    }
}

impl fmt::Display for PropertyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn brown() -> PropertyGroup {
        PropertyGroup {
            id: GroupId::new(0),
            name: "Brown".to_string(),
            members: smallvec![TileId::new(1), TileId::new(3)],
            house_cost: 50,
            hotel_cost: 50,
        }
    }

    #[test]
    fn test_size_and_membership() {
        let group = brown();
        assert_eq!(group.size(), 2);
        assert!(group.contains(TileId::new(1)));
        assert!(!group.contains(TileId::new(2)));
    }

    #[test]
    fn test_house_level_cost_scales_with_size() {
        assert_eq!(brown().house_level_cost(), 100);
    }

    #[test]
    fn test_display() {
        assert_eq!(brown().to_string(), "Brown (Group 0)");
        assert_eq!(GroupId::new(3).to_string(), "Group 3");
    }
}

//! The board itself: tiles, groups, movement geometry.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::board::{GroupId, PropertyGroup, Tile, TileId, TileKind};
use crate::core::Money;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural problems detected when assembling a board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no tiles")]
    Empty,
    #[error("board has {0} tiles; positions are 8-bit so at most 256 fit")]
    TooManyTiles(usize),
    #[error("tile at position {position} carries id {found}")]
    MisplacedTile { position: usize, found: TileId },
    #[error("tile 0 must be GO")]
    MissingGo,
    #[error("board must have exactly one jail corner, found {0}")]
    JailCount(usize),
    #[error("board must have exactly one go-to-jail corner, found {0}")]
    GoToJailCount(usize),
    #[error("duplicate tile name '{0}'")]
    DuplicateName(String),
    #[error("group at index {position} carries id {found}")]
    MisplacedGroup { position: usize, found: GroupId },
    #[error("group {0} has no member streets")]
    EmptyGroup(GroupId),
    #[error("{tile} belongs to unknown group {group}")]
    UnknownGroup { tile: TileId, group: GroupId },
    #[error("group {group} lists {tile}, which is not one of its streets")]
    BadGroupMember { group: GroupId, tile: TileId },
    #[error("{tile} is missing from the member list of its group {group}")]
    UnlistedGroupMember { tile: TileId, group: GroupId },
    #[error("board has {0} railways; the rent table covers at most 4")]
    TooManyRailways(usize),
}

/// An immutable board: the tile ring, colour groups, and the fixed
/// amounts tied to the board (GO bonus, jail fine).
///
/// Constructed once per game and never mutated. Construction validates
/// the structure, so queries index without re-checking. Ownership,
/// mortgages and buildings are game state and live elsewhere.
///
/// ## Usage
///
/// ```
/// use monopoly_engine::board::Board;
///
/// let board = Board::standard();
/// assert_eq!(board.tile_count(), 40);
///
/// let old_kent = board.tile_by_name("Old Kent Road").unwrap();
/// assert!(board.tile(old_kent).is_purchasable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
    groups: Vec<PropertyGroup>,

    /// Name lookup, built at construction
    by_name: FxHashMap<String, TileId>,
    /// All railway positions, in board order
    railways: SmallVec<[TileId; 4]>,
    /// All utility positions, in board order
    utilities: SmallVec<[TileId; 2]>,

    jail: TileId,
    go_bonus: Money,
    jail_fine: Money,
}

impl Board {
    /// Assemble and validate a board.
    ///
    /// Checks that tile 0 is GO, ids match positions, there is exactly
    /// one jail and one go-to-jail corner, names are unique, and every
    /// colour group agrees with its member streets in both directions.
    pub fn new(
        tiles: Vec<Tile>,
        groups: Vec<PropertyGroup>,
        go_bonus: Money,
        jail_fine: Money,
    ) -> Result<Self, BoardError> {
        if tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        if tiles.len() > 256 {
            return Err(BoardError::TooManyTiles(tiles.len()));
        }

        for (position, tile) in tiles.iter().enumerate() {
            if tile.id.index() != position {
                return Err(BoardError::MisplacedTile {
                    position,
                    found: tile.id,
                });
            }
        }
        if !matches!(tiles[0].kind, TileKind::Go) {
            return Err(BoardError::MissingGo);
        }

        let jails: Vec<TileId> = tiles
            .iter()
            .filter(|t| matches!(t.kind, TileKind::Jail))
            .map(|t| t.id)
            .collect();
        if jails.len() != 1 {
            return Err(BoardError::JailCount(jails.len()));
        }
        let jail = jails[0];

        let go_to_jail_count = tiles
            .iter()
            .filter(|t| matches!(t.kind, TileKind::GoToJail))
            .count();
        if go_to_jail_count != 1 {
            return Err(BoardError::GoToJailCount(go_to_jail_count));
        }

        let mut by_name = FxHashMap::default();
        for tile in &tiles {
            if by_name.insert(tile.name.clone(), tile.id).is_some() {
                return Err(BoardError::DuplicateName(tile.name.clone()));
            }
        }

        for (position, group) in groups.iter().enumerate() {
            if group.id.index() != position {
                return Err(BoardError::MisplacedGroup {
                    position,
                    found: group.id,
                });
            }
            if group.members.is_empty() {
                return Err(BoardError::EmptyGroup(group.id));
            }
            for &member in &group.members {
                let belongs = tiles
                    .get(member.index())
                    .map_or(false, |t| t.group() == Some(group.id));
                if !belongs {
                    return Err(BoardError::BadGroupMember {
                        group: group.id,
                        tile: member,
                    });
                }
            }
        }
        for tile in &tiles {
            if let Some(group) = tile.group() {
                let listed = groups
                    .get(group.index())
                    .map_or(false, |g| g.contains(tile.id));
                if !listed {
                    if groups.get(group.index()).is_none() {
                        return Err(BoardError::UnknownGroup {
                            tile: tile.id,
                            group,
                        });
                    }
                    return Err(BoardError::UnlistedGroupMember {
                        tile: tile.id,
                        group,
                    });
                }
            }
        }

        let railways: SmallVec<[TileId; 4]> = tiles
            .iter()
            .filter(|t| matches!(t.kind, TileKind::Railway { .. }))
            .map(|t| t.id)
            .collect();
        if railways.len() > 4 {
            return Err(BoardError::TooManyRailways(railways.len()));
        }
        let utilities: SmallVec<[TileId; 2]> = tiles
            .iter()
            .filter(|t| matches!(t.kind, TileKind::Utility { .. }))
            .map(|t| t.id)
            .collect();

        Ok(Self {
            tiles,
            groups,
            by_name,
            railways,
            utilities,
            jail,
            go_bonus,
            jail_fine,
        })
    }

    // === Tile queries ===

    /// Get a tile by position.
    ///
    /// Panics if the id is out of range for this board.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    /// Look a tile up by its display name.
    #[must_use]
    pub fn tile_by_name(&self, name: &str) -> Option<TileId> {
        self.by_name.get(name).copied()
    }

    /// Number of tiles on the ring.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles in board order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    // === Group queries ===

    /// Get a colour group by id.
    ///
    /// Panics if the id is out of range for this board.
    #[must_use]
    pub fn group(&self, id: GroupId) -> &PropertyGroup {
        &self.groups[id.index()]
    }

    /// All colour groups.
    #[must_use]
    pub fn groups(&self) -> &[PropertyGroup] {
        &self.groups
    }

    /// Member streets of a group, in board order.
    #[must_use]
    pub fn tiles_in_group(&self, id: GroupId) -> &[TileId] {
        &self.group(id).members
    }

    /// All railway positions.
    #[must_use]
    pub fn railways(&self) -> &[TileId] {
        &self.railways
    }

    /// All utility positions.
    #[must_use]
    pub fn utilities(&self) -> &[TileId] {
        &self.utilities
    }

    // === Fixed amounts and corners ===

    /// The jail corner.
    #[must_use]
    pub fn jail_tile(&self) -> TileId {
        self.jail
    }

    /// Amount collected when passing GO.
    #[must_use]
    pub fn go_bonus(&self) -> Money {
        self.go_bonus
    }

    /// Fine for buying out of jail.
    #[must_use]
    pub fn jail_fine(&self) -> Money {
        self.jail_fine
    }

    // === Movement geometry ===

    /// Position reached by moving `steps` tiles forward.
    ///
    /// Returns the destination and whether the move wrapped past GO.
    #[must_use]
    pub fn advance(&self, from: TileId, steps: u8) -> (TileId, bool) {
        let len = self.tiles.len();
        let raw = from.index() + steps as usize;
        let wrapped = raw >= len;
        (TileId::new((raw % len) as u8), wrapped)
    }

    /// Position reached by moving `steps` tiles backward.
    ///
    /// Backward moves never count as passing GO.
    #[must_use]
    pub fn retreat(&self, from: TileId, steps: u8) -> TileId {
        let len = self.tiles.len();
        let back = steps as usize % len;
        TileId::new(((from.index() + len - back) % len) as u8)
    }

    /// Forward steps from one tile to another, following the ring.
    #[must_use]
    pub fn forward_distance(&self, from: TileId, to: TileId) -> u8 {
        let len = self.tiles.len();
        ((to.index() + len - from.index()) % len) as u8
    }

    /// Next railway strictly ahead of `from`, wrapping round the ring.
    ///
    /// Returns `None` on a board without railways.
    #[must_use]
    pub fn nearest_railway(&self, from: TileId) -> Option<TileId> {
        self.nearest_of(&self.railways, from)
    }

    /// Next utility strictly ahead of `from`, wrapping round the ring.
    #[must_use]
    pub fn nearest_utility(&self, from: TileId) -> Option<TileId> {
        self.nearest_of(&self.utilities, from)
    }

    fn nearest_of(&self, candidates: &[TileId], from: TileId) -> Option<TileId> {
        let len = self.tiles.len();
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| {
                let d = (c.index() + len - from.index()) % len;
                if d == 0 {
                    len
                } else {
                    d
                }
            })
    }
}

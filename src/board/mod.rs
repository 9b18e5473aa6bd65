//! Board data: tiles, colour groups, movement geometry.
//!
//! Boards are **data, not rules**. A [`Board`] is assembled from tiles
//! and groups, validated once, and never mutated during play. What is
//! owned, mortgaged or built on is game state and lives elsewhere.
//!
//! ## Key Types
//!
//! - `TileId`: Board position (dense index, wraps at the end)
//! - `TileKind`: Closed enum of everything a tile can be
//! - `PropertyRent`: Rent schedule for a street
//! - `GroupId` / `PropertyGroup`: Colour groups and building costs
//! - `Board`: The validated ring, with lookup and geometry queries
//!
//! [`Board::standard`] builds the classic 40-tile London layout.

pub mod group;
pub mod layout;
mod standard;
pub mod tile;

pub use group::{GroupId, PropertyGroup};
pub use layout::{Board, BoardError};
pub use tile::{PropertyRent, Tile, TileId, TileKind};

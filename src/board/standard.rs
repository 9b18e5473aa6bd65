//! The classic 40-tile London board.

use crate::board::{Board, GroupId, PropertyGroup, PropertyRent, Tile, TileId, TileKind};
use crate::core::Money;

const GO_BONUS: Money = 200;
const JAIL_FINE: Money = 50;

/// Mortgage principal plus 10% interest, rounded up.
fn buyback(mortgage: Money) -> Money {
    mortgage + (mortgage + 9) / 10
}

fn street(
    id: u8,
    name: &str,
    group: u8,
    price: Money,
    base: Money,
    with_houses: [Money; 4],
    with_hotel: Money,
) -> Tile {
    let mortgage = price / 2;
    Tile {
        id: TileId::new(id),
        name: name.to_string(),
        kind: TileKind::Property {
            group: GroupId::new(group),
            price,
            rent: PropertyRent {
                base,
                full_group: base * 2,
                with_houses,
                with_hotel,
            },
            mortgage,
            buyback: buyback(mortgage),
        },
    }
}

fn railway(id: u8, name: &str) -> Tile {
    Tile {
        id: TileId::new(id),
        name: name.to_string(),
        kind: TileKind::Railway {
            price: 200,
            rent: [25, 50, 100, 200],
            mortgage: 100,
            buyback: buyback(100),
        },
    }
}

fn utility(id: u8, name: &str) -> Tile {
    Tile {
        id: TileId::new(id),
        name: name.to_string(),
        kind: TileKind::Utility {
            price: 150,
            mortgage: 75,
            buyback: buyback(75),
        },
    }
}

fn plain(id: u8, name: &str, kind: TileKind) -> Tile {
    Tile {
        id: TileId::new(id),
        name: name.to_string(),
        kind,
    }
}

fn group(id: u8, name: &str, members: &[u8], house_cost: Money) -> PropertyGroup {
    PropertyGroup {
        id: GroupId::new(id),
        name: name.to_string(),
        members: members.iter().map(|&m| TileId::new(m)).collect(),
        house_cost,
        hotel_cost: house_cost,
    }
}

impl Board {
    /// The classic London board: 40 tiles, 8 colour groups, 4 stations
    /// and 2 utilities, with a GO bonus of 200 and a jail fine of 50.
    #[must_use]
    pub fn standard() -> Self {
        let tiles = vec![
            plain(0, "GO", TileKind::Go),
            street(1, "Old Kent Road", 0, 60, 2, [10, 30, 90, 160], 250),
            plain(2, "Community Chest", TileKind::CommunityChest),
            street(3, "Whitechapel Road", 0, 60, 4, [20, 60, 180, 320], 450),
            plain(4, "Income Tax", TileKind::Tax { amount: 200 }),
            railway(5, "King's Cross Station"),
            street(6, "The Angel Islington", 1, 100, 6, [30, 90, 270, 400], 550),
            plain(7, "Chance", TileKind::Chance),
            street(8, "Euston Road", 1, 100, 6, [30, 90, 270, 400], 550),
            street(9, "Pentonville Road", 1, 120, 8, [40, 100, 300, 450], 600),
            plain(10, "Jail", TileKind::Jail),
            street(11, "Pall Mall", 2, 140, 10, [50, 150, 450, 625], 750),
            utility(12, "Electric Company"),
            street(13, "Whitehall", 2, 140, 10, [50, 150, 450, 625], 750),
            street(
                14,
                "Northumberland Avenue",
                2,
                160,
                12,
                [60, 180, 500, 700],
                900,
            ),
            railway(15, "Marylebone Station"),
            street(16, "Bow Street", 3, 180, 14, [70, 200, 550, 750], 950),
            plain(17, "Community Chest 2", TileKind::CommunityChest),
            street(
                18,
                "Marlborough Street",
                3,
                180,
                14,
                [70, 200, 550, 750],
                950,
            ),
            street(19, "Vine Street", 3, 200, 16, [80, 220, 600, 800], 1000),
            plain(20, "Free Parking", TileKind::FreeParking),
            street(21, "Strand", 4, 220, 18, [90, 250, 700, 875], 1050),
            plain(22, "Chance 2", TileKind::Chance),
            street(23, "Fleet Street", 4, 220, 18, [90, 250, 700, 875], 1050),
            street(
                24,
                "Trafalgar Square",
                4,
                240,
                20,
                [100, 300, 750, 925],
                1100,
            ),
            railway(25, "Fenchurch St Station"),
            street(
                26,
                "Leicester Square",
                5,
                260,
                22,
                [110, 330, 800, 975],
                1150,
            ),
            street(
                27,
                "Coventry Street",
                5,
                260,
                22,
                [110, 330, 800, 975],
                1150,
            ),
            utility(28, "Water Works"),
            street(29, "Piccadilly", 5, 280, 24, [120, 360, 850, 1025], 1200),
            plain(30, "Go To Jail", TileKind::GoToJail),
            street(
                31,
                "Regent Street",
                6,
                300,
                26,
                [130, 390, 900, 1100],
                1275,
            ),
            street(
                32,
                "Oxford Street",
                6,
                300,
                26,
                [130, 390, 900, 1100],
                1275,
            ),
            plain(33, "Community Chest 3", TileKind::CommunityChest),
            street(34, "Bond Street", 6, 320, 28, [150, 450, 1000, 1200], 1400),
            railway(35, "Liverpool Street Station"),
            plain(36, "Chance 3", TileKind::Chance),
            street(37, "Park Lane", 7, 350, 35, [175, 500, 1100, 1300], 1500),
            plain(38, "Super Tax", TileKind::Tax { amount: 100 }),
            street(39, "Mayfair", 7, 400, 50, [200, 600, 1400, 1700], 2000),
        ];

        let groups = vec![
            group(0, "Brown", &[1, 3], 50),
            group(1, "Light Blue", &[6, 8, 9], 50),
            group(2, "Pink", &[11, 13, 14], 100),
            group(3, "Orange", &[16, 18, 19], 100),
            group(4, "Red", &[21, 23, 24], 150),
            group(5, "Yellow", &[26, 27, 29], 150),
            group(6, "Green", &[31, 32, 34], 200),
            group(7, "Dark Blue", &[37, 39], 200),
        ];

        Board::new(tiles, groups, GO_BONUS, JAIL_FINE).expect("standard board layout is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let board = Board::standard();
        assert_eq!(board.tile_count(), 40);
        assert_eq!(board.groups().len(), 8);
        assert_eq!(
            board.railways(),
            &[
                TileId::new(5),
                TileId::new(15),
                TileId::new(25),
                TileId::new(35)
            ]
        );
        assert_eq!(board.utilities(), &[TileId::new(12), TileId::new(28)]);
    }

    #[test]
    fn test_corners() {
        let board = Board::standard();
        assert!(matches!(board.tile(TileId::new(0)).kind, TileKind::Go));
        assert_eq!(board.jail_tile(), TileId::new(10));
        assert!(matches!(
            board.tile(TileId::new(20)).kind,
            TileKind::FreeParking
        ));
        assert!(matches!(
            board.tile(TileId::new(30)).kind,
            TileKind::GoToJail
        ));
    }

    #[test]
    fn test_fixed_amounts() {
        let board = Board::standard();
        assert_eq!(board.go_bonus(), 200);
        assert_eq!(board.jail_fine(), 50);
        assert!(matches!(
            board.tile(TileId::new(4)).kind,
            TileKind::Tax { amount: 200 }
        ));
        assert!(matches!(
            board.tile(TileId::new(38)).kind,
            TileKind::Tax { amount: 100 }
        ));
    }

    #[test]
    fn test_street_census() {
        let board = Board::standard();
        let streets = board
            .tiles()
            .filter(|t| matches!(t.kind, TileKind::Property { .. }))
            .count();
        assert_eq!(streets, 22);
        let group_members: usize = board.groups().iter().map(|g| g.size()).sum();
        assert_eq!(group_members, 22);
    }

    #[test]
    fn test_name_lookup() {
        let board = Board::standard();
        let mayfair = board.tile_by_name("Mayfair").unwrap();
        assert_eq!(mayfair, TileId::new(39));
        assert_eq!(board.tile(mayfair).price(), Some(400));
        assert_eq!(board.tile(mayfair).group(), Some(GroupId::new(7)));
    }

    #[test]
    fn test_mortgage_and_buyback_numbers() {
        let board = Board::standard();

        // Even price: exact halves, exact 10% interest
        let kings_cross = board.tile(TileId::new(5));
        assert_eq!(kings_cross.mortgage_value(), Some(100));
        assert_eq!(kings_cross.buyback_cost(), Some(110));

        // Odd mortgage values round the interest up
        let park_lane = board.tile(board.tile_by_name("Park Lane").unwrap());
        assert_eq!(park_lane.mortgage_value(), Some(175));
        assert_eq!(park_lane.buyback_cost(), Some(193));

        let water_works = board.tile(TileId::new(28));
        assert_eq!(water_works.mortgage_value(), Some(75));
        assert_eq!(water_works.buyback_cost(), Some(83));
    }

    #[test]
    fn test_full_group_rent_doubles_base() {
        let board = Board::standard();
        for tile in board.tiles() {
            if let TileKind::Property { rent, .. } = &tile.kind {
                assert_eq!(rent.full_group, rent.base * 2, "{}", tile.name);
            }
        }
    }

    #[test]
    fn test_house_costs_rise_by_side() {
        let board = Board::standard();
        let costs: Vec<Money> = board.groups().iter().map(|g| g.house_cost).collect();
        assert_eq!(costs, vec![50, 50, 100, 100, 150, 150, 200, 200]);
    }
}

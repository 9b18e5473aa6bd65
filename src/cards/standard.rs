//! The classic chance and community chest card sets.

use crate::board::TileId;
use crate::cards::{Card, CardEffect};

/// The sixteen classic chance cards.
#[must_use]
pub fn standard_chance_cards() -> Vec<Card> {
    vec![
        Card::new("Advance to GO. Collect the GO bonus", CardEffect::Advance(TileId::new(0))),
        Card::new(
            "Advance to Trafalgar Square",
            CardEffect::Advance(TileId::new(24)),
        ),
        Card::new("Advance to Mayfair", CardEffect::Advance(TileId::new(39))),
        Card::new("Advance to Pall Mall", CardEffect::Advance(TileId::new(11))),
        Card::new(
            "Take a ride to King's Cross Station",
            CardEffect::Advance(TileId::new(5)),
        ),
        Card::new(
            "Advance to the nearest railway and pay the owner double",
            CardEffect::AdvanceToNearestRailway,
        ),
        Card::new(
            "Advance to the nearest railway and pay the owner double",
            CardEffect::AdvanceToNearestRailway,
        ),
        Card::new(
            "Advance to the nearest utility and pay ten times your roll",
            CardEffect::AdvanceToNearestUtility,
        ),
        Card::new("Bank pays you a dividend of 50", CardEffect::Collect(50)),
        Card::new("Get out of jail free", CardEffect::GetOutOfJailFree),
        Card::new("Go back three spaces", CardEffect::GoBack(3)),
        Card::new("Go directly to jail", CardEffect::GoToJail),
        Card::new(
            "Make general repairs: 25 per house, 100 per hotel",
            CardEffect::Repairs {
                per_house: 25,
                per_hotel: 100,
            },
        ),
        Card::new("Pay a speeding fine of 15", CardEffect::Pay(15)),
        Card::new(
            "You have been elected chairman of the board. Pay each player 50",
            CardEffect::PayEach(50),
        ),
        Card::new("Your building loan matures. Collect 150", CardEffect::Collect(150)),
    ]
}

/// The sixteen classic community chest cards.
#[must_use]
pub fn standard_community_chest_cards() -> Vec<Card> {
    vec![
        Card::new("Advance to GO. Collect the GO bonus", CardEffect::Advance(TileId::new(0))),
        Card::new("Bank error in your favour. Collect 200", CardEffect::Collect(200)),
        Card::new("Doctor's fee. Pay 50", CardEffect::Pay(50)),
        Card::new("From the sale of stock you get 50", CardEffect::Collect(50)),
        Card::new("Get out of jail free", CardEffect::GetOutOfJailFree),
        Card::new("Go directly to jail", CardEffect::GoToJail),
        Card::new("Holiday fund matures. Collect 100", CardEffect::Collect(100)),
        Card::new("Income tax refund. Collect 20", CardEffect::Collect(20)),
        Card::new(
            "It is your birthday. Collect 10 from every player",
            CardEffect::CollectFromEach(10),
        ),
        Card::new("Life insurance matures. Collect 100", CardEffect::Collect(100)),
        Card::new("Pay hospital fees of 100", CardEffect::Pay(100)),
        Card::new("Pay school fees of 50", CardEffect::Pay(50)),
        Card::new("Receive a consultancy fee of 25", CardEffect::Collect(25)),
        Card::new(
            "Street repairs: 40 per house, 115 per hotel",
            CardEffect::Repairs {
                per_house: 40,
                per_hotel: 115,
            },
        ),
        Card::new(
            "You win second prize in a beauty contest. Collect 10",
            CardEffect::Collect(10),
        ),
        Card::new("You inherit 100", CardEffect::Collect(100)),
    ]
}

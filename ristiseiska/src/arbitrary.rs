use quickcheck::{Arbitrary, Gen};

use crate::{Card, Rank, Suit, Table};

/// A table that can occur in a real game: every pile is a run around its seven,
/// and the cards were placed in an order the rules allow.
#[derive(Clone, Debug)]
pub struct ReachableTable(pub Table);

impl Arbitrary for ReachableTable {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut table = Table::new();
        let mut suits = Suit::ALL.to_vec();
        // Open the suits in a random order
        for k in (1..suits.len()).rev() {
            let j = usize::from(u8::arbitrary(g)) % (k + 1);
            suits.swap(k, j);
        }
        for suit in suits {
            if !bool::arbitrary(g) {
                continue;
            }
            let mut low = 1 + u8::arbitrary(g) % 7; // 1..=7
            let mut high = 7 + u8::arbitrary(g) % 7; // 7..=13
            if low < 6 || high > 8 {
                low = low.min(6);
                high = high.max(8);
            }
            table.place(Card::new(suit, Rank::Seven));
            let (mut down, mut up) = (6, 8);
            while down >= low || up <= high {
                if down >= low {
                    table.place(Card::new(suit, rank(down)));
                    down -= 1;
                }
                if up <= high {
                    table.place(Card::new(suit, rank(up)));
                    up += 1;
                }
            }
        }
        ReachableTable(table)
    }
}

fn rank(value: u8) -> Rank {
    Rank::from_value(value).unwrap()
}

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Suit::ALL).unwrap()
    }
}

impl Arbitrary for Rank {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Rank::ALL).unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            rank: Rank::arbitrary(g),
            suit: Suit::arbitrary(g),
        }
    }
}

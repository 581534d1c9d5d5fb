use serde::Serialize;

use crate::{Card, Rank, Suit};

/// The cards played on one suit, in play order.
///
/// The first card is always the seven, and the ranks form a contiguous run
/// around it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableSuit {
    pub suit: Suit,
    cards: Vec<Card>,
}

/// What is visible of a pile when it is laid out as three stacks:
/// the cards below seven, the seven, and the cards above seven.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PileEnds {
    /// The lowest card played so far, if any is below seven.
    pub low: Option<Card>,
    pub seven: Option<Card>,
    /// The highest card played so far, if any is above seven.
    pub high: Option<Card>,
}

impl TableSuit {
    fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.cards.iter().map(|card| card.rank)
    }

    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.ranks().any(|r| r == rank)
    }

    /// The lowest rank played on this suit.
    pub fn min_rank(&self) -> Option<Rank> {
        self.ranks().min()
    }

    /// The highest rank played on this suit.
    pub fn max_rank(&self) -> Option<Rank> {
        self.ranks().max()
    }

    pub fn ends(&self) -> PileEnds {
        let seven = self.cards.iter().find(|c| c.rank == Rank::Seven).copied();
        let low = self
            .cards
            .iter()
            .filter(|c| c.rank < Rank::Seven)
            .min_by_key(|c| c.rank)
            .copied();
        let high = self
            .cards
            .iter()
            .filter(|c| c.rank > Rank::Seven)
            .max_by_key(|c| c.rank)
            .copied();
        PileEnds { low, seven, high }
    }
}

/// All piles on the table. A pile is created by the first card of its suit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    /// In the order the suits were opened.
    piles: Vec<TableSuit>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    pub fn pile(&self, suit: Suit) -> Option<&TableSuit> {
        self.piles.iter().find(|pile| pile.suit == suit)
    }

    pub fn piles(&self) -> &[TableSuit] {
        &self.piles
    }

    /// Total number of cards played.
    pub fn len(&self) -> usize {
        self.piles.iter().map(|pile| pile.cards.len()).sum()
    }

    /// Appends a card to the pile of its suit, opening the pile if needed.
    ///
    /// This does not check legality, see [`crate::is_legal`].
    pub(crate) fn place(&mut self, card: Card) {
        let idx = match self.piles.iter().position(|pile| pile.suit == card.suit) {
            Some(idx) => idx,
            None => {
                self.piles.push(TableSuit::new(card.suit));
                self.piles.len() - 1
            }
        };
        self.piles[idx].cards.push(card);
    }
}

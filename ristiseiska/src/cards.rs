use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A playing card in a standard 52-card game.
///
/// Cards are ordered by suit first (in [`Suit::ALL`] order), then by rank,
/// which is the order hands are sorted in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// The rank of a [card](Card). Aces are low.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl Rank {
    /// All ranks, ace to king.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The numeric value, 1 (ace) through 13 (king).
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// The rank directly below this one, if any.
    pub fn pred(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    /// The rank directly above this one, if any.
    pub fn succ(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// The short label printed on a card: `A`, `2`..`10`, `J`, `Q`, `K`.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The 7 of clubs, which opens the game.
    pub const CROSS_SEVEN: Card = Card {
        suit: Suit::Clubs,
        rank: Rank::Seven,
    };
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::from_value(value).ok_or(CardParseError::InvalidRank)
    }
}

/// The error type for parsing a [`Card`], [`Suit`] or [`Rank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardParseError {
    Empty,
    InvalidRank,
    InvalidSuit,
}

impl std::error::Error for CardParseError {}

impl std::fmt::Display for CardParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardParseError::Empty => write!(f, "No card given"),
            CardParseError::InvalidRank => {
                write!(f, "Unknown rank, expected one of A 2-10 J Q K (or T for 10)")
            }
            CardParseError::InvalidSuit => {
                write!(f, "Unknown suit, expected one of ♥ ♦ ♣ ♠ or h d c s")
            }
        }
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "♥" | "h" | "hearts" => Ok(Suit::Hearts),
            "♦" | "d" | "diamonds" => Ok(Suit::Diamonds),
            "♣" | "c" | "clubs" => Ok(Suit::Clubs),
            "♠" | "s" | "spades" => Ok(Suit::Spades),
            _ => Err(CardParseError::InvalidSuit),
        }
    }
}

impl FromStr for Rank {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" | "1" => Ok(Rank::Ace),
            "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            digits => digits
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_value)
                .ok_or(CardParseError::InvalidRank),
        }
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses the rank followed by a single suit character, e.g. `10♣`, `Qh` or `tS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_char = s.chars().last().ok_or(CardParseError::Empty)?;
        let rank_str = &s[..s.len() - suit_char.len_utf8()];
        if rank_str.is_empty() {
            return Err(CardParseError::InvalidRank);
        }
        let rank = rank_str.parse()?;
        let mut buf = [0u8; 4];
        let suit = suit_char.encode_utf8(&mut buf).parse()?;
        Ok(Card { suit, rank })
    }
}

/// Shorthand for creating cards from a string.
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use ristiseiska::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("10♥"),
///     Card { rank: Rank::Ten, suit: Suit::Hearts }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($rs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($rs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

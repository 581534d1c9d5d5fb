use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::Card;

/// Opaque identifier of a player, unique within a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Ai,
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Ai => write!(f, "ai"),
        }
    }
}

/// Identity of one physical card within a game: its position in the shuffled deck.
///
/// Two cards with the same suit and rank (e.g. when playing with several decks)
/// still have distinct ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u16);

/// A card that has been dealt into a hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DealtCard {
    pub id: CardId,
    pub card: Card,
}

/// The cards held by one player, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<DealtCard>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts by suit group, then ascending rank.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|dealt| (dealt.card, dealt.id));
    }

    /// The first card in hand order with this suit and rank.
    pub fn find(&self, card: Card) -> Option<DealtCard> {
        self.cards.iter().find(|dealt| dealt.card == card).copied()
    }

    pub fn get(&self, id: CardId) -> Option<DealtCard> {
        self.cards.iter().find(|dealt| dealt.id == id).copied()
    }

    /// Removes the card with this id, keeping the order of the others.
    pub fn take(&mut self, id: CardId) -> Option<DealtCard> {
        let idx = self.cards.iter().position(|dealt| dealt.id == id)?;
        Some(self.cards.remove(idx))
    }

    /// The plain cards, in hand order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().map(|dealt| dealt.card)
    }
}

impl Deref for Hand {
    type Target = [DealtCard];

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl FromIterator<DealtCard> for Hand {
    fn from_iter<T: IntoIterator<Item = DealtCard>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
    pub hand: Hand,
    /// Set when the player takes a pantti, cleared when they play again.
    /// Purely informational, nothing in the rules reads it.
    pub has_passed: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hand: Hand::new(),
            has_passed: false,
        }
    }

    pub fn is_ai(&self) -> bool {
        self.kind == PlayerKind::Ai
    }
}

/// Creates the seats for a game: humans first (`Player 1`, `Player 2`, ...),
/// then computer players (`AI 1`, ...).
pub fn seat_players(human_players: usize, ai_players: usize) -> Vec<Player> {
    let humans = (1..=human_players).map(|n| (format!("Player {}", n), PlayerKind::Human));
    let ais = (1..=ai_players).map(|n| (format!("AI {}", n), PlayerKind::Ai));
    humans
        .chain(ais)
        .zip(1..)
        .map(|((name, kind), id)| Player::new(PlayerId(id), name, kind))
        .collect()
}

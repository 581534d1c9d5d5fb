use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::{legal_moves, DealtCard, Hand, Table};

/// A strategy for computer players.
///
/// Returning `None` means the player has nothing to play and takes a pantti.
/// The engine re-checks whatever is returned, so a policy cannot cheat.
pub trait AiPolicy {
    fn choose_move(&mut self, hand: &Hand, table: &Table) -> Option<DealtCard>;
}

/// Plays the first legal card in hand order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalCard;

impl AiPolicy for FirstLegalCard {
    fn choose_move(&mut self, hand: &Hand, table: &Table) -> Option<DealtCard> {
        hand.iter()
            .copied()
            .find(|dealt| crate::is_legal(dealt.card, table))
    }
}

/// Plays a uniformly random legal card.
#[derive(Clone, Debug)]
pub struct RandomLegalCard {
    rng: StdRng,
}

impl RandomLegalCard {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl AiPolicy for RandomLegalCard {
    fn choose_move(&mut self, hand: &Hand, table: &Table) -> Option<DealtCard> {
        legal_moves(hand, table).choose(&mut self.rng).copied()
    }
}

/// Names the available policies, for configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyKind {
    #[serde(rename = "first")]
    FirstLegal,
    #[serde(rename = "random")]
    RandomLegal,
}

impl PolicyKind {
    pub fn build(self, seed: u64) -> Box<dyn AiPolicy> {
        match self {
            PolicyKind::FirstLegal => Box::new(FirstLegalCard),
            PolicyKind::RandomLegal => Box::new(RandomLegalCard::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::FirstLegal => write!(f, "first"),
            PolicyKind::RandomLegal => write!(f, "random"),
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of [`PolicyKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl std::error::Error for UnknownPolicy {}

impl std::fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown policy '{}', expected 'first' or 'random'", self.0)
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(PolicyKind::FirstLegal),
            "random" => Ok(PolicyKind::RandomLegal),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

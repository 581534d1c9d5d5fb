use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Card, DECK_SIZE};

pub const DEFAULT_LOG_CAPACITY: usize = 5;
/// Enough to hold every play and a win announcement.
pub const MAX_LOG_CAPACITY: usize = DECK_SIZE * 2;

/// Something that happened at the table, as shown to the players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Played { player: String, card: Card },
    Passed { player: String },
    Won { player: String },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Played { player, card } => write!(
                f,
                "{} played {} of {}",
                player,
                card.rank.value(),
                card.suit
            ),
            GameEvent::Passed { player } => write!(f, "{} passed", player),
            GameEvent::Won { player } => write!(f, "{} won the game!", player),
        }
    }
}

/// The most recent events, newest first. Older entries fall off the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameLog {
    capacity: usize,
    entries: VecDeque<GameEvent>,
}

impl GameLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.entries.push_front(event);
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> impl Iterator<Item = &GameEvent> + '_ {
        self.entries.iter()
    }

    /// The entries rendered as text, newest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn latest(&self) -> Option<&GameEvent> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GameLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

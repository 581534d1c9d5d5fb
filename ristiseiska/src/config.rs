use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{GameError, PolicyKind, DECK_SIZE, DEFAULT_LOG_CAPACITY, MAX_LOG_CAPACITY};

/// Settings for one game. Every field has a default, so a config file only
/// needs to mention what it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub human_players: usize,
    pub ai_players: usize,
    /// How many entries the game log keeps.
    pub log_capacity: usize,
    /// Pause before a computer player moves, in milliseconds.
    pub ai_delay_ms: u64,
    pub policy: PolicyKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_players: 1,
            ai_players: 3,
            log_capacity: DEFAULT_LOG_CAPACITY,
            ai_delay_ms: 500,
            policy: PolicyKind::FirstLegal,
        }
    }
}

impl GameConfig {
    pub fn total_players(&self) -> usize {
        self.human_players.saturating_add(self.ai_players)
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Checks that the cards can be dealt to the configured players, and
    /// that the log size is within bounds.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.log_capacity > MAX_LOG_CAPACITY {
            return Err(GameError::InvalidLogCapacity {
                capacity: self.log_capacity,
            });
        }
        match self.total_players() {
            0 => Err(GameError::EmptyPlayerSet),
            count if count > DECK_SIZE => Err(GameError::TooManyPlayers { count }),
            _ => Ok(()),
        }
    }
}

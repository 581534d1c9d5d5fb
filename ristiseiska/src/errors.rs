use crate::Card;

/// The error type for all game transitions.
///
/// None of these are fatal: a rejected transition leaves the game state as it was,
/// and the caller can simply ask for another action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The card cannot be placed on the table right now.
    IllegalMove { card: Card },
    /// Someone other than the active player tried to act.
    NotYourTurn { expected: usize, actual: usize },
    /// A pantti was requested while a legal move exists.
    InvalidPass,
    /// A game needs at least one player.
    EmptyPlayerSet,
    /// More players than there are cards to deal.
    TooManyPlayers { count: usize },
    /// The game log cannot keep this many entries.
    InvalidLogCapacity { capacity: usize },
    /// The acting player does not hold the given card.
    CardNotInHand,
    /// The game is not in the playing phase.
    GameOver,
    /// A scheduled AI move belongs to a turn that is no longer current.
    StaleTurn,
}

impl std::error::Error for GameError {}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IllegalMove { card } => {
                write!(f, "{} cannot be played on the current table", card)
            }
            GameError::NotYourTurn { expected, actual } => write!(
                f,
                "It is the turn of seat {}, but seat {} tried to act",
                expected, actual
            ),
            GameError::InvalidPass => write!(f, "Cannot pass while holding a legal move"),
            GameError::EmptyPlayerSet => write!(f, "A game needs at least one player"),
            GameError::TooManyPlayers { count } => {
                write!(f, "Cannot deal a 52-card deck to {} players", count)
            }
            GameError::InvalidLogCapacity { capacity } => write!(
                f,
                "A game log of {} entries is not supported, the maximum is {}",
                capacity,
                crate::MAX_LOG_CAPACITY
            ),
            GameError::CardNotInHand => {
                write!(f, "Tried to play a card that was not in the player's hand")
            }
            GameError::GameOver => write!(f, "The game is not being played"),
            GameError::StaleTurn => write!(f, "The scheduled move is for a turn that has passed"),
        }
    }
}


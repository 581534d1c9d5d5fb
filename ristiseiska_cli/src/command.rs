use std::str::FromStr;

use ristiseiska::{Card, CardParseError};

/// One line of input from a human player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Card),
    /// Pass when nothing can be played, taking a pantti.
    Pass,
    /// List the cards that can be played.
    Hint,
    Restart,
    Quit,
}

impl FromStr for Command {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p" | "pass" => Ok(Command::Pass),
            "h" | "hint" | "?" => Ok(Command::Hint),
            "r" | "restart" => Ok(Command::Restart),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => s.trim().parse().map(Command::Play),
        }
    }
}

pub const COMMAND_HELP: &str =
    "Enter a card to play it (e.g. 7h, 10♠, qd), p to pass, h for a hint, r to restart, q to quit";

#[cfg(test)]
mod tests {
    use ristiseiska::{Rank, Suit};

    use super::*;

    #[test]
    fn keywords() {
        assert_eq!("p".parse(), Ok(Command::Pass));
        assert_eq!(" PASS ".parse(), Ok(Command::Pass));
        assert_eq!("?".parse(), Ok(Command::Hint));
        assert_eq!("r".parse(), Ok(Command::Restart));
        assert_eq!("quit\n".parse(), Ok(Command::Quit));
    }

    #[test]
    fn cards() {
        assert_eq!(
            "10♠".parse(),
            Ok(Command::Play(Card::new(Suit::Spades, Rank::Ten)))
        );
        assert_eq!(
            "qd".parse(),
            Ok(Command::Play(Card::new(Suit::Diamonds, Rank::Queen)))
        );
        assert!("".parse::<Command>().is_err());
        assert!("zz".parse::<Command>().is_err());
    }
}

//! Parsing of typed player commands.
//!
//! Input is trimmed and compared case-insensitively; long and short forms of
//! a command collapse to the same variant.

use core::str::FromStr;

use crate::error::InputError;

/// A decision during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the wager, take exactly one card, and end the turn.
    Double,
}

impl FromStr for PlayerAction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hit" => Ok(Self::Hit),
            "s" | "stand" => Ok(Self::Stand),
            "d" | "double" => Ok(Self::Double),
            "" => Err(InputError::Empty),
            other => Err(InputError::UnknownAction(other.to_string())),
        }
    }
}

/// An answer to the bet prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetCommand {
    /// Wager this many chips.
    Wager(usize),
    /// Leave the table.
    Quit,
}

impl FromStr for BetCommand {
    type Err = InputError;

    /// Parses a bet.
    ///
    /// Amounts too large to represent saturate to `usize::MAX`, so they are
    /// later rejected as exceeding the balance rather than as malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        if text == "q" {
            return Ok(Self::Quit);
        }
        if text.is_empty() {
            return Err(InputError::Empty);
        }

        let (negative, digits) = text
            .strip_prefix('-')
            .map_or((false, text.as_str()), |rest| (true, rest));
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotWholeNumber(text));
        }
        if negative || digits.bytes().all(|b| b == b'0') {
            return Err(InputError::NotPositive);
        }

        Ok(Self::Wager(digits.parse().unwrap_or(usize::MAX)))
    }
}

/// Interprets an answer to "play another round?". Yes, `y`, or nothing at all
/// mean yes; anything else means no.
#[must_use]
pub fn parse_continue(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

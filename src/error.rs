//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// The player has no chips left.
    #[error("no chips left to wager")]
    NoChips,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet is below the table minimum.
    #[error("bet must be at least {minimum}")]
    BelowMinimum {
        /// The table minimum.
        minimum: usize,
    },
    /// Bet exceeds the chip balance.
    #[error("insufficient chips")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Doubling is only allowed on the first two cards.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Insufficient chips for this action.
    #[error("insufficient chips for this action")]
    InsufficientFunds,
}

/// Errors that can occur during the dealer's turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for the dealer's turn or settlement.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Reasons a line of player input was not understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing was typed.
    #[error("empty input")]
    Empty,
    /// The bet is not an integer.
    #[error("not a whole number: {0:?}")]
    NotWholeNumber(String),
    /// The bet is zero or negative.
    #[error("bet must be positive")]
    NotPositive,
    /// The action token is not recognized.
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
}

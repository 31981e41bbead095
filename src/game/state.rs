//! Round state.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round in progress.
    #[default]
    Idle,
    /// Waiting for the player's wager.
    Betting,
    /// Wager placed; initial cards not yet dealt.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and the wager can be settled.
    Settlement,
    /// Round has been settled.
    RoundOver,
}

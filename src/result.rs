//! Round results and the running session tally.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player won with a natural.
    Blackjack,
    /// Player won (dealer bust or higher total).
    Win,
    /// Tie; the wager is returned.
    Push,
    /// Player lost the wager.
    Lose,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The final wager, including any double down.
    pub wager: usize,
    /// Chips credited back to the player (wager included).
    pub payout: usize,
    /// Net change to the player's chips over the round.
    pub net: isize,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// Whether the player was dealt a natural.
    pub player_blackjack: bool,
    /// Whether the dealer was dealt a natural.
    pub dealer_blackjack: bool,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

/// Cumulative statistics over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Rounds won, blackjacks included.
    pub wins: usize,
    /// Rounds lost.
    pub losses: usize,
    /// Rounds pushed.
    pub pushes: usize,
    /// Rounds won with a natural.
    pub blackjacks: usize,
    /// Rounds settled.
    pub rounds_played: usize,
}

impl SessionStats {
    /// Adds a settled round to the tally.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Blackjack => {
                self.wins += 1;
                self.blackjacks += 1;
            }
            Outcome::Win => self.wins += 1,
            Outcome::Push => self.pushes += 1,
            Outcome::Lose => self.losses += 1,
        }
        self.rounds_played += 1;
    }
}

use crate::error::{BetError, DealError};
use crate::hand::DisplayMode;

use super::{Game, GameState};

impl Game {
    /// Places the wager for the round and deducts it from the chips.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the amount is
    /// below the table minimum, or the player lacks chips. Nothing changes
    /// on error.
    pub fn bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let minimum = self.rules.minimum_bet;
        if amount < minimum {
            return Err(BetError::BelowMinimum { minimum });
        }
        if amount > self.chips {
            return Err(BetError::InsufficientFunds);
        }

        self.chips -= amount;
        self.wager = amount;
        self.state = GameState::Dealing;
        tracing::debug!(wager = amount, chips = self.chips, "bet placed");

        Ok(())
    }

    /// Leaves the betting phase without playing; the round is abandoned.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state.
    pub fn decline_bet(&mut self) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        self.state = GameState::Idle;
        Ok(())
    }

    /// Deals two cards each, alternating player then dealer.
    ///
    /// If either side holds a natural the round goes straight to
    /// [`GameState::Settlement`]; otherwise it is the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no wager has been placed for this round.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.dealer_view = DisplayMode::DealerHidden;

        for _ in 0..2 {
            self.player_hand.add_card(self.shoe.draw());
            self.dealer_hand.add_card(self.shoe.draw());
        }

        let player_blackjack = self.player_hand.is_blackjack();
        let dealer_blackjack = self.dealer_hand.is_blackjack();
        tracing::debug!(
            player = %self.player_hand.show(DisplayMode::Full),
            player_total = self.player_hand.total(),
            player_blackjack,
            dealer_blackjack,
            "initial cards dealt"
        );

        self.state = if player_blackjack || dealer_blackjack {
            GameState::Settlement
        } else {
            GameState::PlayerTurn
        };

        Ok(())
    }
}

use crate::card::Card;
use crate::error::ActionError;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == GameState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Returns whether doubling down is currently allowed: it is the
    /// player's turn, the hand holds exactly two cards, and the remaining
    /// chips cover the wager again.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.state == GameState::PlayerTurn
            && self.player_hand.len() == 2
            && self.chips >= self.wager
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the turn and moves the round to settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.shoe.draw();
        self.player_hand.add_card(card);
        tracing::debug!(card = %card.label(), total = self.player_hand.total(), "player hits");

        if self.player_hand.is_bust() {
            self.state = GameState::Settlement;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        tracing::debug!(total = self.player_hand.total(), "player stands");
        self.state = GameState::DealerTurn;

        Ok(())
    }

    /// Player action: Double down (double the wager, receive one card, end the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand does not
    /// hold exactly two cards, or the remaining chips do not cover the wager.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if self.player_hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if self.chips < self.wager {
            return Err(ActionError::InsufficientFunds);
        }

        self.chips -= self.wager;
        self.wager *= 2;

        let card = self.shoe.draw();
        self.player_hand.add_card(card);
        tracing::debug!(
            card = %card.label(),
            total = self.player_hand.total(),
            wager = self.wager,
            "player doubles down"
        );

        self.state = if self.player_hand.is_bust() {
            GameState::Settlement
        } else {
            GameState::DealerTurn
        };

        Ok(card)
    }
}

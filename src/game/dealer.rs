use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{DisplayMode, Hand};
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// Why the dealer took a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerHitReason {
    /// Total below 17.
    Under17,
    /// Soft 17 at a table where the dealer hits it.
    Soft17,
}

/// A card drawn by the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerDraw {
    /// The card drawn.
    pub card: Card,
    /// Why the dealer drew it.
    pub reason: DealerHitReason,
}

/// Dealer policy: hit below 17, and on soft 17 when `hits_soft_17`.
///
/// Returns `None` when the dealer stands (or has busted).
#[must_use]
pub fn dealer_should_hit(hand: &Hand, hits_soft_17: bool) -> Option<DealerHitReason> {
    match hand.total() {
        total if total < 17 => Some(DealerHitReason::Under17),
        17 if hits_soft_17 && hand.is_soft() => Some(DealerHitReason::Soft17),
        _ => None,
    }
}

impl Game {
    /// Dealer reveals the hole card and plays out the hand.
    ///
    /// Returns the cards drawn, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<DealerDraw>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_view = DisplayMode::Full;

        let mut drawn = Vec::new();
        while let Some(reason) = dealer_should_hit(&self.dealer_hand, self.rules.dealer_hits_soft_17)
        {
            let card = self.shoe.draw();
            self.dealer_hand.add_card(card);
            drawn.push(DealerDraw { card, reason });
        }

        tracing::debug!(
            draws = drawn.len(),
            total = self.dealer_hand.total(),
            bust = self.dealer_hand.is_bust(),
            "dealer finished"
        );

        self.state = GameState::Settlement;
        Ok(drawn)
    }

    /// Settles the wager, credits the payout, and records the round.
    ///
    /// Naturals are compared first: blackjack against blackjack pushes, a
    /// lone player blackjack pays the table ratio on top of the wager, and a
    /// lone dealer blackjack takes the wager. Then a player bust loses, a
    /// dealer bust wins even money, and otherwise the higher total wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in settlement state.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let wager = self.wager;
        let player_total = self.player_hand.total();
        let dealer_total = self.dealer_hand.total();
        let player_blackjack = self.player_hand.is_blackjack();
        let dealer_blackjack = self.dealer_hand.is_blackjack();
        let player_bust = self.player_hand.is_bust();
        let dealer_bust = self.dealer_hand.is_bust();

        let (outcome, payout) = if player_blackjack {
            if dealer_blackjack {
                (Outcome::Push, wager)
            } else {
                let winnings = self.rules.blackjack_pays.winnings(wager);
                (Outcome::Blackjack, wager + winnings)
            }
        } else if dealer_blackjack || player_bust {
            (Outcome::Lose, 0)
        } else if dealer_bust || player_total > dealer_total {
            (Outcome::Win, wager * 2)
        } else if player_total == dealer_total {
            (Outcome::Push, wager)
        } else {
            (Outcome::Lose, 0)
        };

        self.chips += payout;
        self.stats.record(outcome);
        self.dealer_view = DisplayMode::Full;
        self.state = GameState::RoundOver;

        #[expect(clippy::cast_possible_wrap, reason = "chip amounts fit in isize")]
        let net = payout as isize - wager as isize;

        tracing::debug!(
            ?outcome,
            wager,
            payout,
            chips = self.chips,
            "round settled"
        );

        Ok(RoundResult {
            outcome,
            wager,
            payout,
            net,
            player_total,
            dealer_total,
            player_blackjack,
            dealer_blackjack,
            player_bust,
            dealer_bust,
        })
    }
}

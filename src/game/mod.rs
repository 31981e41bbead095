//! Round engine and session state.

use crate::error::StartError;
use crate::hand::{DisplayMode, Hand, Seat};
use crate::options::TableRules;
use crate::result::SessionStats;
use crate::rng::PhraseRng;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::{DealerDraw, DealerHitReason, dealer_should_hit};
pub use state::GameState;

/// A blackjack table for one player against the house.
///
/// The game owns everything a session mutates: the shoe and its generator,
/// the chip balance, the running tally, and the hands of the current round.
/// Rounds advance through [`GameState`]; each operation checks the phase it
/// belongs to and leaves the state untouched when it is rejected.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    pub shoe: Shoe,
    /// Table rules.
    pub rules: TableRules,
    /// Current round phase.
    state: GameState,
    /// Name shown for the player.
    player_name: String,
    /// Chips not currently wagered.
    chips: usize,
    /// Chips wagered on the current round.
    wager: usize,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// How the dealer's hand may be shown.
    dealer_view: DisplayMode,
    /// Session tally.
    stats: SessionStats,
}

impl Game {
    /// Creates a table whose shoe is shuffled from `seed_phrase`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{Game, TableRules};
    ///
    /// let game = Game::new(TableRules::default(), "Ada", "lucky phrase");
    /// assert_eq!(game.chips(), 200);
    /// assert_eq!(game.shoe.len(), 6 * 52);
    /// ```
    #[must_use]
    pub fn new(rules: TableRules, player_name: impl Into<String>, seed_phrase: &str) -> Self {
        Self::with_rng(rules, player_name, PhraseRng::from_phrase(seed_phrase))
    }

    /// Creates a table whose shoe is shuffled by `rng`.
    #[must_use]
    pub fn with_rng(rules: TableRules, player_name: impl Into<String>, rng: PhraseRng) -> Self {
        let player_name = player_name.into();
        tracing::info!(
            player = %player_name,
            decks = rules.decks,
            chips = rules.starting_chips,
            "table opened"
        );

        Self {
            shoe: Shoe::new(rules.decks, rng),
            state: GameState::Idle,
            player_name,
            chips: rules.starting_chips,
            wager: 0,
            player_hand: Hand::new(Seat::Player),
            dealer_hand: Hand::new(Seat::Dealer),
            dealer_view: DisplayMode::DealerHidden,
            stats: SessionStats::default(),
            rules,
        }
    }

    /// Opens a new round for betting.
    ///
    /// A fresh shoe is brought in first if fewer cards remain than the
    /// table's reshuffle threshold. Returns `true` in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress or the player
    /// cannot cover the minimum bet.
    pub fn start_round(&mut self) -> Result<bool, StartError> {
        if self.state != GameState::Idle {
            return Err(StartError::InvalidState);
        }
        if self.chips < self.rules.minimum_bet {
            return Err(StartError::NoChips);
        }

        let reshuffled = self.shoe.ensure_depth(self.rules.reshuffle_threshold);
        if reshuffled {
            tracing::debug!("fresh shoe brought in before round");
        }

        self.state = GameState::Betting;
        Ok(reshuffled)
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Returns the chips not currently wagered.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the wager on the current round.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns whether the player can no longer cover the minimum bet.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.chips < self.rules.minimum_bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns how the dealer's hand may currently be shown.
    #[must_use]
    pub const fn dealer_display_mode(&self) -> DisplayMode {
        self.dealer_view
    }

    /// Returns the session tally.
    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Clears the hands and wager and returns to [`GameState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress; only a settled round (or
    /// an idle table) can be cleared.
    pub fn clear_round(&mut self) -> Result<(), StartError> {
        if !matches!(self.state, GameState::Idle | GameState::RoundOver) {
            return Err(StartError::InvalidState);
        }

        self.player_hand.clear();
        self.dealer_hand.clear();
        self.dealer_view = DisplayMode::DealerHidden;
        self.wager = 0;
        self.state = GameState::Idle;
        Ok(())
    }
}

//! Terminal blackjack against an automated dealer.
//!
//! The shoe is shuffled by [`PhraseRng`], a deterministic generator seeded
//! from text the player types, so the same phrase always deals the same
//! cards. [`Game`] runs rounds through betting, dealing, the player's turn,
//! the dealer's turn and settlement, and keeps the chip balance and session
//! tally. [`Console`] drives a [`Game`] over a line-based terminal.
//!
//! # Example
//!
//! ```
//! use bjterm::{Game, GameState, TableRules};
//!
//! let mut game = Game::new(TableRules::default(), "Player", "test");
//! game.start_round().unwrap();
//! game.bet(10).unwrap();
//! game.deal().unwrap();
//! assert!(matches!(
//!     game.state(),
//!     GameState::PlayerTurn | GameState::Settlement
//! ));
//! ```

pub mod card;
pub mod command;
pub mod console;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod rng;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use command::{BetCommand, PlayerAction, parse_continue};
pub use console::Console;
pub use error::{ActionError, BetError, DealError, InputError, ShowdownError, StartError};
pub use game::{DealerDraw, DealerHitReason, Game, GameState, dealer_should_hit};
pub use hand::{DisplayMode, Hand, Seat};
pub use options::{PayoutRatio, TableRules};
pub use result::{Outcome, RoundResult, SessionStats};
pub use rng::{DEFAULT_SEED_PHRASE, PhraseRng};
pub use shoe::Shoe;

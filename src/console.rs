//! Line-based terminal front end.
//!
//! [`Console`] asks for the player's name and seed phrase, then plays rounds
//! on a [`Game`] until the player quits, declines another round, or runs out
//! of chips, and finishes with a session summary. It reads from any
//! [`BufRead`] and writes to any [`Write`], so whole sessions can be scripted.
//!
//! Bad input is never fatal; the prompt is simply repeated. When input ends
//! the console behaves as if the player quit at the betting prompt, stood
//! during their turn, and answered no to another round.

use std::io::{self, BufRead, Write};

use crate::command::{BetCommand, PlayerAction, parse_continue};
use crate::error::{BetError, InputError, StartError};
use crate::game::{DealerHitReason, Game, GameState};
use crate::hand::{DisplayMode, Hand};
use crate::options::TableRules;
use crate::result::{Outcome, RoundResult};
use crate::rng::DEFAULT_SEED_PHRASE;

/// Name used when the player leaves the name prompt empty.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Terminal session controller.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the input and output back.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Runs a full session and returns the final table.
    ///
    /// `name` and `seed` pre-answer the corresponding startup prompts.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(
        &mut self,
        rules: TableRules,
        name: Option<&str>,
        seed: Option<&str>,
    ) -> io::Result<Game> {
        writeln!(self.output, "Welcome to Blackjack!")?;
        let name = match name {
            Some(name) => name.trim().to_string(),
            None => self.prompt_player_name()?,
        };
        let name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name
        };

        let seed = match seed {
            Some(seed) => seed.to_string(),
            None => self.prompt_seed()?,
        };
        let seed = if seed.is_empty() {
            DEFAULT_SEED_PHRASE.to_string()
        } else {
            seed
        };

        let mut game = Game::new(rules, name, &seed);
        tracing::info!(player = %game.player_name(), "session started");

        self.explain_rules(&game.rules)?;

        while !game.is_broke() {
            if !self.play_round(&mut game)? {
                break;
            }
            let again = self.wants_to_continue(&game)?;
            writeln!(self.output)?;
            if !again {
                break;
            }
        }

        self.show_stats(&game)?;
        writeln!(self.output, "Thanks for playing, {}!", game.player_name())?;
        tracing::info!(
            chips = game.chips(),
            rounds = game.stats().rounds_played,
            "session ended"
        );

        Ok(game)
    }

    /// Prints `prompt` and reads one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt_player_name(&mut self) -> io::Result<String> {
        writeln!(
            self.output,
            "Leave the name empty to use '{DEFAULT_PLAYER_NAME}'."
        )?;
        let name = self.prompt("Enter your name: ")?.unwrap_or_default();
        Ok(name.trim().to_string())
    }

    fn prompt_seed(&mut self) -> io::Result<String> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Before we begin, type a random phrase to shuffle the deck."
        )?;
        writeln!(
            self.output,
            "The same phrase always deals the same cards."
        )?;
        let seed = self
            .prompt("Enter seed text (or press Enter to accept default): ")?
            .unwrap_or_default();
        writeln!(self.output)?;
        Ok(seed)
    }

    fn explain_rules(&mut self, rules: &TableRules) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out, "--------- Game Rules ---------")?;
        writeln!(
            out,
            "- Beat the dealer by getting as close to 21 as possible without going over."
        )?;
        writeln!(
            out,
            "- Face cards count as 10, Aces count as 1 or 11, other cards are face value."
        )?;
        if rules.dealer_hits_soft_17 {
            writeln!(out, "- Dealer hits on soft 17 (Ace counted as 11).")?;
        } else {
            writeln!(out, "- Dealer stands on all 17s.")?;
        }
        writeln!(
            out,
            "- Blackjack pays {}:{}, regular wins pay 1:1, pushes return your bet.",
            rules.blackjack_pays.numerator, rules.blackjack_pays.denominator
        )?;
        writeln!(
            out,
            "- You start with {} chips. Minimum bet is {} chip{} per hand.",
            rules.starting_chips,
            rules.minimum_bet,
            plural(rules.minimum_bet)
        )?;
        writeln!(
            out,
            "- Commands: 'h' to hit, 's' to stand, 'd' to double (first action only)."
        )?;
        writeln!(out, "- Type 'q' during betting to leave the table.")?;
        writeln!(out, "--------------------------------")?;
        writeln!(out)
    }

    /// Plays one round. Returns `false` if the player left the table instead.
    fn play_round(&mut self, game: &mut Game) -> io::Result<bool> {
        match game.start_round() {
            Ok(true) => {
                writeln!(self.output, "Shuffling a fresh shoe...")?;
                writeln!(self.output)?;
            }
            Ok(false) => {}
            Err(StartError::NoChips) => return Ok(false),
            Err(err @ StartError::InvalidState) => return Err(io::Error::other(err)),
        }

        if !self.take_bet(game)? {
            game.decline_bet().map_err(io::Error::other)?;
            return Ok(false);
        }
        writeln!(self.output)?;

        game.deal().map_err(io::Error::other)?;
        self.show_table(game)?;

        if game.state() == GameState::PlayerTurn {
            self.player_turn(game)?;
        }

        if game.state() == GameState::DealerTurn {
            self.dealer_turn(game)?;
        }

        let result = game.settle().map_err(io::Error::other)?;
        self.report(&result)?;
        writeln!(self.output)?;
        game.clear_round().map_err(io::Error::other)?;

        Ok(true)
    }

    /// Asks for a wager until one is accepted. Returns `false` on quit.
    fn take_bet(&mut self, game: &mut Game) -> io::Result<bool> {
        loop {
            writeln!(
                self.output,
                "{}, you have {} chips.",
                game.player_name(),
                game.chips()
            )?;
            let Some(line) = self.prompt("Place your bet (or 'q' to quit): ")? else {
                return Ok(false);
            };

            let minimum = game.rules.minimum_bet;
            let message = match line.parse::<BetCommand>() {
                Ok(BetCommand::Quit) => return Ok(false),
                Ok(BetCommand::Wager(amount)) => match game.bet(amount) {
                    Ok(()) => return Ok(true),
                    Err(BetError::BelowMinimum { minimum }) => {
                        format!("Bet must be at least {minimum} chip{}.", plural(minimum))
                    }
                    Err(BetError::InsufficientFunds) => {
                        "You cannot bet more chips than you have.".to_string()
                    }
                    Err(err @ BetError::InvalidState) => return Err(io::Error::other(err)),
                },
                Err(InputError::NotPositive) => {
                    format!("Bet must be at least {minimum} chip{}.", plural(minimum))
                }
                Err(InputError::NotWholeNumber(_)) => "Bets must be whole numbers.".to_string(),
                Err(_) => "Please enter a number.".to_string(),
            };
            writeln!(self.output, "{message}")?;
        }
    }

    fn show_table(&mut self, game: &Game) -> io::Result<()> {
        let mode = game.dealer_display_mode();
        let dealer = game.dealer_hand();
        writeln!(self.output, "Dealer's hand:")?;
        writeln!(self.output, "  {}", dealer.show(mode))?;
        match dealer.visible_total(mode) {
            Some(total) => writeln!(self.output, "  Total: {total}")?,
            None => writeln!(self.output, "  Total: ?")?,
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}'s hand:", game.player_name())?;
        self.show_hand(game.player_hand())?;
        writeln!(self.output)
    }

    fn show_hand(&mut self, hand: &Hand) -> io::Result<()> {
        writeln!(self.output, "  {}", hand.show(DisplayMode::Full))?;
        writeln!(self.output, "  Total: {}", hand.total())
    }

    fn player_turn(&mut self, game: &mut Game) -> io::Result<()> {
        while game.state() == GameState::PlayerTurn {
            let allow_double = game.can_double();
            let prompt = if allow_double {
                "Choose action: (h)it, (s)tand, (d)ouble: "
            } else {
                "Choose action: (h)it, (s)tand: "
            };
            let action = match self.prompt(prompt)? {
                Some(line) => line.parse::<PlayerAction>(),
                None => Ok(PlayerAction::Stand),
            };

            match action {
                Ok(PlayerAction::Hit) => {
                    let card = game.hit().map_err(io::Error::other)?;
                    writeln!(self.output, "You draw: {card}")?;
                    writeln!(self.output, "New total: {}", game.player_hand().total())?;
                    writeln!(self.output)?;
                }
                Ok(PlayerAction::Stand) => game.stand().map_err(io::Error::other)?,
                Ok(PlayerAction::Double) if allow_double => {
                    let card = game.double_down().map_err(io::Error::other)?;
                    writeln!(self.output, "You double down and draw: {card}")?;
                    writeln!(self.output, "Final total: {}", game.player_hand().total())?;
                    writeln!(self.output)?;
                }
                Ok(PlayerAction::Double) | Err(_) => {
                    writeln!(self.output, "Invalid choice, try again.")?;
                }
            }
        }
        Ok(())
    }

    fn dealer_turn(&mut self, game: &mut Game) -> io::Result<()> {
        writeln!(self.output, "Dealer reveals their hidden card...")?;
        writeln!(
            self.output,
            "Dealer's hand: {}",
            game.dealer_hand().show(DisplayMode::Full)
        )?;
        writeln!(self.output, "Dealer total: {}", game.dealer_hand().total())?;
        writeln!(self.output)?;

        for draw in game.dealer_play().map_err(io::Error::other)? {
            match draw.reason {
                DealerHitReason::Under17 => {
                    writeln!(self.output, "Dealer hits and draws: {}", draw.card)?;
                }
                DealerHitReason::Soft17 => {
                    writeln!(self.output, "Dealer hits soft 17 and draws: {}", draw.card)?;
                }
            }
        }

        let dealer = game.dealer_hand();
        if dealer.is_bust() {
            writeln!(self.output, "Dealer busts!")?;
        } else {
            writeln!(self.output, "Dealer stands with {}.", dealer.total())?;
        }
        writeln!(self.output)
    }

    fn report(&mut self, result: &RoundResult) -> io::Result<()> {
        let out = &mut self.output;
        let wager = result.wager;

        if result.player_blackjack {
            writeln!(out, "Blackjack! Let's check the dealer...")?;
            if result.dealer_blackjack {
                return writeln!(out, "Dealer also has blackjack. It's a push.");
            }
            return writeln!(
                out,
                "You are paid {} chips for blackjack!",
                result.payout - wager
            );
        }
        if result.dealer_blackjack {
            return writeln!(
                out,
                "Dealer reveals blackjack. You lose your bet of {wager} chips."
            );
        }
        if result.player_bust {
            return writeln!(out, "You bust with {}.", result.player_total);
        }
        if result.dealer_bust {
            return writeln!(out, "Dealer busts. You win {wager} chips!");
        }

        match result.outcome {
            Outcome::Win | Outcome::Blackjack => {
                writeln!(out, "You win the hand! Payout: {wager} chips.")
            }
            Outcome::Push => writeln!(out, "Push. Your bet is returned."),
            Outcome::Lose => writeln!(out, "Dealer wins. You lose {wager} chips."),
        }
    }

    fn wants_to_continue(&mut self, game: &Game) -> io::Result<bool> {
        if game.is_broke() {
            writeln!(self.output, "You have run out of chips.")?;
            return Ok(false);
        }
        let answer = self.prompt("Play another round? (y/n): ")?;
        Ok(answer.is_some_and(|answer| parse_continue(&answer)))
    }

    fn show_stats(&mut self, game: &Game) -> io::Result<()> {
        let stats = game.stats();
        let out = &mut self.output;
        writeln!(out, "--------- Session Summary ---------")?;
        writeln!(out, "Chips remaining: {}", game.chips())?;
        writeln!(out, "Rounds played: {}", stats.rounds_played)?;
        writeln!(out, "Wins: {}", stats.wins)?;
        writeln!(out, "Losses: {}", stats.losses)?;
        writeln!(out, "Pushes: {}", stats.pushes)?;
        writeln!(out, "Blackjacks hit: {}", stats.blackjacks)?;
        writeln!(out, "-----------------------------------")
    }
}

//! Scripted terminal sessions.

use std::io::Cursor;

use bjterm::{Console, Game, TableRules};

fn play(script: &str) -> (String, Game) {
    play_with(script, None, None)
}

fn play_with(script: &str, name: Option<&str>, seed: Option<&str>) -> (String, Game) {
    play_at(TableRules::default(), script, name, seed)
}

fn play_at(
    rules: TableRules,
    script: &str,
    name: Option<&str>,
    seed: Option<&str>,
) -> (String, Game) {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let game = console.run(rules, name, seed).unwrap();
    let (_, output) = console.into_inner();
    (String::from_utf8(output).unwrap(), game)
}

#[test]
fn bad_bets_reprompt_then_dealer_blackjack_and_a_win() {
    let (out, game) = play("Ada\ntest\nabc\n0\n500\n\n10\ny\n10\ns\ny\nq\n");

    assert!(out.contains("Bets must be whole numbers."));
    assert!(out.contains("Bet must be at least 1 chip."));
    assert!(out.contains("You cannot bet more chips than you have."));
    assert!(out.contains("Please enter a number."));

    assert!(out.contains("  [Hidden], Jack of Spades\n  Total: ?"));
    assert!(out.contains("Ada's hand:\n  Eight of Diamonds, Eight of Clubs\n  Total: 16"));
    assert!(out.contains("Dealer reveals blackjack. You lose your bet of 10 chips."));

    assert!(out.contains("Ada, you have 190 chips."));
    assert!(out.contains("Dealer's hand: Nine of Hearts, Three of Hearts"));
    assert!(out.contains("Dealer hits and draws: Five of Clubs"));
    assert!(out.contains("Dealer stands with 17."));
    assert!(out.contains("You win the hand! Payout: 10 chips."));

    assert!(out.contains("Chips remaining: 200\nRounds played: 2\nWins: 1\nLosses: 1\nPushes: 0\nBlackjacks hit: 0"));
    assert!(out.ends_with("Thanks for playing, Ada!\n"));
    assert_eq!(game.chips(), 200);
}

#[test]
fn blank_name_and_blackjack_payout() {
    let (out, game) = play("\nlima\n10\nn\n");

    assert!(out.contains("Player, you have 200 chips."));
    assert!(out.contains("Player's hand:\n  Jack of Diamonds, Ace of Clubs\n  Total: 21"));
    assert!(out.contains("Blackjack! Let's check the dealer..."));
    assert!(out.contains("You are paid 15 chips for blackjack!"));
    assert_eq!(game.chips(), 215);
    assert_eq!(game.stats().blackjacks, 1);
    assert_eq!(game.stats().wins, 1);
}

#[test]
fn invalid_action_then_double_down() {
    let (out, game) = play("Cy\ncharlie\n20\nx\nd\nno\n");

    assert!(out.contains("Choose action: (h)it, (s)tand, (d)ouble: "));
    assert!(out.contains("Invalid choice, try again."));
    assert!(out.contains("You double down and draw: Five of Spades\nFinal total: 15"));
    assert!(out.contains("Dealer's hand: Five of Spades, Ace of Diamonds\nDealer total: 16"));
    assert!(out.contains(
        "Dealer hits and draws: Seven of Spades\nDealer hits and draws: Three of Spades\nDealer hits and draws: Six of Clubs\nDealer busts!"
    ));
    assert!(out.contains("Dealer busts. You win 40 chips!"));
    assert_eq!(game.chips(), 240);
}

#[test]
fn hitting_into_a_bust_and_end_of_input() {
    let (out, game) = play("Di\necho\n50\nh\nh\nh\n");

    assert!(out.contains("You draw: Six of Hearts\nNew total: 12"));
    assert!(out.contains("You draw: Eight of Clubs\nNew total: 20"));
    assert!(out.contains("You draw: Two of Diamonds\nNew total: 22"));
    assert!(out.contains("You bust with 22."));
    assert!(!out.contains("Dealer reveals their hidden card"));
    assert_eq!(game.chips(), 150);
    assert_eq!(game.stats().losses, 1);
    assert_eq!(game.stats().rounds_played, 1);
}

#[test]
fn double_is_not_offered_after_a_hit() {
    let (out, _) = play("Di\necho\n50\nh\nd\ns\nn\n");

    assert!(out.contains("Choose action: (h)it, (s)tand: "));
    assert!(out.contains("Invalid choice, try again."));
}

#[test]
fn running_out_of_chips_ends_the_session() {
    let (out, game) = play_with("200\n", Some("Ada"), Some("test"));

    assert!(!out.contains("Enter your name"));
    assert!(!out.contains("Enter seed text"));
    assert!(out.contains("Dealer reveals blackjack. You lose your bet of 200 chips."));
    assert!(out.contains("You have run out of chips."));
    assert!(!out.contains("Play another round?"));
    assert!(out.contains("Chips remaining: 0"));
    assert_eq!(game.chips(), 0);
}

#[test]
fn table_minimum_is_announced_and_enforced() {
    let rules = TableRules::default()
        .with_starting_chips(7)
        .with_minimum_bet(5);
    let (out, game) = play_at(rules, "3\n0\n5\n", Some("Mo"), Some("test"));

    assert!(out.contains("You start with 7 chips. Minimum bet is 5 chips per hand."));
    assert_eq!(out.matches("Bet must be at least 5 chips.").count(), 2);
    assert!(out.contains("Dealer reveals blackjack. You lose your bet of 5 chips."));
    assert!(out.contains("You have run out of chips."));
    assert!(!out.contains("Play another round?"));
    assert!(out.contains("Chips remaining: 2"));
    assert_eq!(game.chips(), 2);
    assert!(game.is_broke());
}

#[test]
fn quitting_before_the_first_bet() {
    let (out, game) = play("Eve\n\nQ\n");

    assert!(out.contains("Eve, you have 200 chips."));
    assert!(out.contains("Rounds played: 0"));
    assert!(out.ends_with("Thanks for playing, Eve!\n"));
    assert_eq!(game.stats().rounds_played, 0);
    assert_eq!(game.chips(), 200);
}

#[test]
fn empty_input_quits_cleanly() {
    let (out, game) = play("");

    assert!(out.contains("Welcome to Blackjack!"));
    assert!(out.contains("Player, you have 200 chips."));
    assert!(out.ends_with("Thanks for playing, Player!\n"));
    assert_eq!(game.chips(), 200);
}

#[test]
fn same_script_same_transcript() {
    let script = "Rep\nsame old\n10\ns\ny\n15\nh\ns\ny\n20\nd\ny\n5\ns\nn\n";
    assert_eq!(play(script).0, play(script).0);
}

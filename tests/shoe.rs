//! Shoe and shuffle reproducibility tests.

use bjterm::{Card, DECK_SIZE, PhraseRng, Rank, Shoe, Suit};

fn labels(shoe: &mut Shoe, count: usize) -> Vec<String> {
    (0..count).map(|_| shoe.draw().label()).collect()
}

#[test]
fn golden_first_draws_for_test_seed() {
    let mut shoe = Shoe::new(1, PhraseRng::from_phrase("test"));
    assert_eq!(shoe.draw(), Card::new(Rank::Five, Suit::Clubs));
    assert_eq!(shoe.draw(), Card::new(Rank::Ace, Suit::Diamonds));
    assert_eq!(shoe.draw(), Card::new(Rank::Queen, Suit::Hearts));
    assert_eq!(
        labels(&mut shoe, 7),
        ["8C", "9D", "8S", "4H", "AS", "6S", "QS"]
    );
}

#[test]
fn golden_six_deck_shoe() {
    let mut shoe = Shoe::new(6, PhraseRng::from_phrase("test"));
    assert_eq!(shoe.len(), 6 * DECK_SIZE);
    assert_eq!(
        labels(&mut shoe, 8),
        ["8D", "AD", "8C", "JS", "8S", "9H", "AS", "3H"]
    );
}

#[test]
fn same_phrase_same_cards_across_reshuffles() {
    let mut a = Shoe::new(2, PhraseRng::from_phrase("reproducible"));
    let mut b = Shoe::new(2, PhraseRng::from_phrase("reproducible"));
    assert_eq!(labels(&mut a, 500), labels(&mut b, 500));

    let mut c = Shoe::new(2, PhraseRng::from_phrase("reproducible!"));
    let mut a = Shoe::new(2, PhraseRng::from_phrase("reproducible"));
    assert_ne!(labels(&mut a, 20), labels(&mut c, 20));
}

#[test]
fn exhausted_shoe_is_rebuilt() {
    let mut shoe = Shoe::new(1, PhraseRng::from_phrase("test"));
    let first_shoe = labels(&mut shoe, DECK_SIZE);
    assert_eq!(&first_shoe[50..], ["6D", "7H"]);
    assert_eq!(shoe.remaining(), 0);

    assert_eq!(labels(&mut shoe, 3), ["3H", "6H", "AH"]);
    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(shoe.cursor(), 3);
}

#[test]
fn shallow_shoe_is_replaced_not_topped_up() {
    let mut shoe = Shoe::new(1, PhraseRng::from_phrase("test"));
    labels(&mut shoe, 37);
    assert_eq!(shoe.remaining(), 15);
    assert!(!shoe.ensure_depth(15));
    assert_eq!(shoe.cursor(), 37);

    shoe.draw();
    assert!(shoe.needs_reshuffle(15));
    assert!(shoe.ensure_depth(15));
    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(shoe.cursor(), 0);
    assert_eq!(shoe.remaining(), DECK_SIZE);
    assert_eq!(labels(&mut shoe, 3), ["3H", "6H", "AH"]);
}

#[test]
fn every_card_appears_once_per_deck() {
    let mut shoe = Shoe::new(3, PhraseRng::from_phrase("count me"));
    let mut seen = std::collections::HashMap::new();
    for _ in 0..3 * DECK_SIZE {
        *seen.entry(shoe.draw()).or_insert(0) += 1;
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(seen.values().all(|&n| n == 3));
}

#[test]
fn stacked_cards_deal_in_order() {
    let mut shoe = Shoe::new(1, PhraseRng::from_phrase("stack"));
    shoe.stack(vec![
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Hearts),
    ]);
    assert_eq!(shoe.upcoming().len(), 2);
    assert_eq!(shoe.draw(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!(shoe.draw(), Card::new(Rank::King, Suit::Hearts));

    shoe.draw();
    assert_eq!(shoe.len(), DECK_SIZE);
    assert_eq!(shoe.cursor(), 1);
}

#[test]
fn zero_decks_builds_one() {
    let shoe = Shoe::new(0, PhraseRng::from_phrase("none"));
    assert_eq!(shoe.decks(), 1);
    assert_eq!(shoe.len(), DECK_SIZE);
}

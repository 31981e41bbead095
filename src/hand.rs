//! Hand representation and evaluation.

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    (value, aces > 0)
}

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The house.
    Dealer,
}

/// How much of a hand may be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Every card is visible.
    #[default]
    Full,
    /// The dealer's first card is face down.
    DealerHidden,
}

/// Text shown in place of a face-down card.
pub const HIDDEN_CARD: &str = "[Hidden]";

/// An ordered set of cards dealt to one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    owner: Seat,
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new(owner: Seat) -> Self {
        Self {
            owner,
            cards: Vec::new(),
        }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub fn with_cards(owner: Seat, cards: &[Card]) -> Self {
        Self {
            owner,
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the seat this hand belongs to.
    #[must_use]
    pub const fn owner(&self) -> Seat {
        self.owner
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card that stays face up while the first one is hidden.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Best total of the hand.
    ///
    /// Aces count 11 and are reduced to 1, one at a time, while the total
    /// exceeds 21. The result is the highest total not above 21 if one
    /// exists, otherwise the lowest possible total.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether an ace is still counted as 11 in [`Hand::total`].
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural: exactly two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Total as it may be shown in `mode`; `None` while the hole card is down.
    #[must_use]
    pub fn visible_total(&self, mode: DisplayMode) -> Option<u8> {
        match mode {
            DisplayMode::Full => Some(self.total()),
            DisplayMode::DealerHidden => None,
        }
    }

    /// Renders the hand as card descriptions joined by `", "`.
    ///
    /// In [`DisplayMode::DealerHidden`] the first card is replaced with
    /// [`HIDDEN_CARD`], unless it is the only card in the hand.
    #[must_use]
    pub fn show(&self, mode: DisplayMode) -> String {
        let Some((first, rest)) = self.cards.split_first() else {
            return "(no cards)".to_string();
        };

        let first = match mode {
            DisplayMode::DealerHidden if !rest.is_empty() => HIDDEN_CARD.to_string(),
            _ => first.description(),
        };

        core::iter::once(first)
            .chain(rest.iter().map(|card| card.description()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, Suit::Clubs)).collect();
        Hand::with_cards(Seat::Player, &cards)
    }

    #[test]
    fn aces_reduce_one_at_a_time() {
        assert_eq!(hand(&[Rank::Ace]).total(), 11);
        assert!(hand(&[Rank::Ace]).is_soft());

        let two_aces = hand(&[Rank::Ace, Rank::Ace]);
        assert_eq!(two_aces.total(), 12);
        assert!(two_aces.is_soft());

        let hard = hand(&[Rank::Ace, Rank::Nine, Rank::Five]);
        assert_eq!(hard.total(), 15);
        assert!(!hard.is_soft());

        let four_aces = hand(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(four_aces.total(), 14);
    }

    #[test]
    fn bust_reports_lowest_total() {
        let busted = hand(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Five]);
        assert_eq!(busted.total(), 26);
        assert!(busted.is_bust());
        assert!(!busted.is_soft());
    }

    #[test]
    fn blackjack_needs_exactly_two_cards() {
        assert!(hand(&[Rank::Ace, Rank::King]).is_blackjack());
        assert!(!hand(&[Rank::Seven, Rank::Seven, Rank::Seven]).is_blackjack());
        assert!(!hand(&[Rank::Ace, Rank::Five, Rank::Five]).is_blackjack());
    }

    #[test]
    fn empty_hand_shows_placeholder() {
        let empty = Hand::new(Seat::Dealer);
        assert_eq!(empty.show(DisplayMode::DealerHidden), "(no cards)");
        assert_eq!(empty.total(), 0);
    }

    #[test]
    fn hands_remember_their_seat() {
        let mut dealer = Hand::new(Seat::Dealer);
        dealer.add_card(Card::new(Rank::Five, Suit::Hearts));
        dealer.clear();
        assert_eq!(dealer.owner(), Seat::Dealer);
        assert_eq!(hand(&[Rank::Two]).owner(), Seat::Player);
    }
}

//! Multi-deck shoe built and shuffled from a [`PhraseRng`].

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::rng::PhraseRng;

/// Builds `num_decks` standard decks in canonical order
/// (suits outer, ranks inner, deuce first).
#[must_use]
pub fn build(num_decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

    for _ in 0..num_decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }

    cards
}

/// Shuffles `cards` in place with a Fisher-Yates pass driven by `rng`.
///
/// The index walks from the last element down to 1 and swaps each element
/// with `rng.range(0, i)`, so the permutation is fully determined by the
/// generator state.
pub fn shuffle(cards: &mut [Card], rng: &mut PhraseRng) {
    for i in (1..cards.len()).rev() {
        let j = rng.range(0, i);
        cards.swap(i, j);
    }
}

/// The shoe cards are dealt from.
///
/// Cards are never removed; a cursor tracks the next card to deal. When the
/// shoe is exhausted, or runs below the depth asked for by
/// [`Shoe::ensure_depth`], it is rebuilt from fresh decks and reshuffled.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
    decks: u8,
    rng: PhraseRng,
}

impl Shoe {
    /// Creates and shuffles a shoe of `decks` decks. Zero decks is treated as one.
    #[must_use]
    pub fn new(decks: u8, rng: PhraseRng) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            cursor: 0,
            decks: decks.max(1),
            rng,
        };
        shoe.reset();
        shoe
    }

    /// Rebuilds the shoe from fresh decks and reshuffles it.
    pub fn reset(&mut self) {
        self.cards = build(self.decks);
        shuffle(&mut self.cards, &mut self.rng);
        self.cursor = 0;
        tracing::debug!(decks = self.decks, cards = self.cards.len(), "shoe shuffled");
    }

    /// Deals the next card, bringing in a fresh shoe first if this one is spent.
    pub fn draw(&mut self) -> Card {
        if self.cursor >= self.cards.len() {
            self.reset();
        }
        let card = self.cards[self.cursor];
        self.cursor += 1;
        tracing::trace!(card = %card.label(), remaining = self.remaining(), "card drawn");
        card
    }

    /// Returns whether fewer than `threshold` cards remain.
    #[must_use]
    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.remaining() < threshold
    }

    /// Replaces the shoe if fewer than `threshold` cards remain.
    ///
    /// Returns `true` if a fresh shoe was shuffled.
    pub fn ensure_depth(&mut self, threshold: usize) -> bool {
        if self.needs_reshuffle(threshold) {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Replaces the contents with `cards`, dealt front to back.
    ///
    /// Once these cards run out the shoe is rebuilt normally.
    pub fn stack(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.cursor = 0;
    }

    /// Number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Number of cards in the shoe, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the next card to deal.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of decks a fresh shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Cards not yet dealt, in dealing order.
    #[must_use]
    pub fn upcoming(&self) -> &[Card] {
        &self.cards[self.cursor..]
    }
}

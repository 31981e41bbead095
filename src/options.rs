//! Table rules.

/// Payout expressed as an integer ratio, rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayoutRatio {
    /// Chips won per `denominator` chips wagered.
    pub numerator: usize,
    /// Wager unit of the ratio. Never zero.
    pub denominator: usize,
}

impl PayoutRatio {
    /// Creates a ratio of `numerator:denominator`. A zero denominator is treated as one.
    #[must_use]
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator: if denominator == 0 { 1 } else { denominator },
        }
    }

    /// Winnings on `bet`, floored: `bet * numerator / denominator`.
    ///
    /// ```
    /// use bjterm::PayoutRatio;
    ///
    /// assert_eq!(PayoutRatio::new(3, 2).winnings(10), 15);
    /// assert_eq!(PayoutRatio::new(3, 2).winnings(5), 7);
    /// ```
    #[must_use]
    pub const fn winnings(self, bet: usize) -> usize {
        bet.saturating_mul(self.numerator) / self.denominator
    }
}

/// Rules a table is constructed with.
///
/// The defaults describe the house this game is played in. Use the builder
/// methods to deviate from them:
///
/// ```
/// use bjterm::TableRules;
///
/// let rules = TableRules::default()
///     .with_decks(1)
///     .with_starting_chips(50);
/// assert_eq!(rules.decks, 1);
/// assert_eq!(rules.reshuffle_threshold, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRules {
    /// Chips the player sits down with.
    pub starting_chips: usize,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// A fresh shoe is brought in before a round when fewer cards remain.
    pub reshuffle_threshold: usize,
    /// Blackjack payout ratio.
    pub blackjack_pays: PayoutRatio,
    /// Whether the dealer hits soft 17.
    pub dealer_hits_soft_17: bool,
    /// Smallest accepted wager.
    pub minimum_bet: usize,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            starting_chips: 200,
            decks: 6,
            reshuffle_threshold: 15,
            blackjack_pays: PayoutRatio::new(3, 2),
            dealer_hits_soft_17: true,
            minimum_bet: 1,
        }
    }
}

impl TableRules {
    /// Sets the starting chip balance.
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::TableRules;
    ///
    /// let rules = TableRules::default().with_decks(2);
    /// assert_eq!(rules.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the depth below which the shoe is replaced.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, cards: usize) -> Self {
        self.reshuffle_threshold = cards;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjterm::{PayoutRatio, TableRules};
    ///
    /// let rules = TableRules::default().with_blackjack_pays(PayoutRatio::new(6, 5));
    /// assert_eq!(rules.blackjack_pays.winnings(10), 12);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: PayoutRatio) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether the dealer hits soft 17.
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets the minimum wager. Zero is raised to one.
    #[must_use]
    pub const fn with_minimum_bet(mut self, chips: usize) -> Self {
        self.minimum_bet = if chips == 0 { 1 } else { chips };
        self
    }
}

//! Deterministic shuffling source seeded from a phrase.
//!
//! [`PhraseRng`] is a small linear congruential generator. It exists so that a
//! human-typed phrase reproduces the exact same shoe on every run and on every
//! platform. It is **not** cryptographically secure and must never be used
//! where unpredictability matters.

use rand::RngCore;

/// Modulus of the generator (`2^31 - 1`).
pub const MODULUS: u64 = 2_147_483_647;

/// Multiplier of the linear congruential step.
pub const MULTIPLIER: u64 = 1_103_515_245;

/// Increment of the linear congruential step.
pub const INCREMENT: u64 = 12_345;

/// Factor used when folding a phrase into the initial state.
const SEED_FACTOR: u64 = 131;

/// Phrase substituted when the seed text is empty.
pub const DEFAULT_SEED_PHRASE: &str = "default-seed";

/// Linear congruential generator seeded from text.
///
/// The state always stays within `1..MODULUS`; zero would be absorbing for
/// the multiplicative part of the step and is never produced.
///
/// ```
/// use bjterm::PhraseRng;
///
/// let mut a = PhraseRng::from_phrase("test");
/// let mut b = PhraseRng::from_phrase("test");
/// assert_eq!(a.next_int(), b.next_int());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRng {
    state: u64,
}

impl PhraseRng {
    /// Seeds the generator from `phrase`.
    ///
    /// Each character's code point is folded in as
    /// `state = (state * 131 + code) mod MODULUS`. An empty phrase is replaced
    /// by [`DEFAULT_SEED_PHRASE`].
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let phrase = if phrase.is_empty() {
            DEFAULT_SEED_PHRASE
        } else {
            phrase
        };

        let mut state = phrase.chars().fold(0, |state, ch| {
            let state = (state * SEED_FACTOR) % MODULUS;
            (state + u64::from(u32::from(ch))) % MODULUS
        });
        if state == 0 {
            state = 1;
        }

        tracing::debug!(state, "seeded phrase rng");
        Self { state }
    }

    /// Returns the raw generator state.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Advances the generator and returns the new state, in `1..MODULUS`.
    pub fn next_int(&mut self) -> u32 {
        let mut next = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        if next == 0 {
            next += MODULUS - 1;
        }
        self.state = next;
        next as u32
    }

    /// Returns a value in `low..=high`.
    ///
    /// The result is `low + next % (high - low + 1)`, which is only
    /// approximately uniform for spans that do not divide the state space.
    /// If `high < low` the range collapses to `low`.
    pub fn range(&mut self, low: usize, high: usize) -> usize {
        let high = high.max(low);
        let span = (high - low) as u64 + 1;
        low + (u64::from(self.next_int()) % span) as usize
    }
}

impl RngCore for PhraseRng {
    /// Returns the next raw state. Only the low 31 bits are ever set.
    fn next_u32(&mut self) -> u32 {
        self.next_int()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_int());
        let low = u64::from(self.next_int());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_int().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

//! Word selection for rounds.

use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Supplies one random word per round from a fixed, non-empty corpus.
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<String>,
    rng: StdRng,
}

impl WordSource {
    /// Creates a source seeded from the operating system.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::from_entropy())
    }

    /// Creates a source with a fixed seed, so the word order is reproducible.
    #[instrument(skip(words))]
    pub fn seeded<I, S>(words: I, seed: u64) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    /// Creates a source drawing from `rng`.
    ///
    /// Words are trimmed and lowercased. A blank entry, an entry with inner
    /// whitespace, or an empty corpus is a configuration error.
    #[instrument(skip(words, rng))]
    pub fn with_rng<I, S>(words: I, rng: StdRng) -> Result<Self, WordSourceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for (index, word) in words.into_iter().enumerate() {
            let word = word.as_ref().trim();
            if word.is_empty() {
                return Err(WordSourceError::BlankWord(index));
            }
            // A guess is never whitespace, so such a position could never be revealed.
            if word.chars().any(char::is_whitespace) {
                return Err(WordSourceError::InvalidWord(index));
            }
            normalized.push(word.to_lowercase());
        }

        if normalized.is_empty() {
            return Err(WordSourceError::EmptyCorpus);
        }

        debug!(count = normalized.len(), "Word source ready");
        Ok(Self {
            words: normalized,
            rng,
        })
    }

    /// Picks the next word uniformly at random.
    #[instrument(skip(self))]
    pub fn next_word(&mut self) -> String {
        // Construction guarantees at least one word.
        let word = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default();
        debug!(length = word.chars().count(), "Picked word");
        word
    }

    /// Returns the normalized corpus.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Error building a [`WordSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum WordSourceError {
    /// No words were configured.
    #[display("Word list is empty")]
    EmptyCorpus,

    /// The entry at this index was empty or whitespace.
    #[display("Word #{} is blank", _0)]
    BlankWord(#[error(not(source))] usize),

    /// The entry at this index contains whitespace between letters.
    #[display("Word #{} contains whitespace", _0)]
    InvalidWord(#[error(not(source))] usize),
}

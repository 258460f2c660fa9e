//! Configuration for the lexicon.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordhoardError};

/// Default number of hash bins.
///
/// A large prime keeps the load factor below 1 for typical word lists;
/// a 143k-word dictionary fills a little over a quarter of the bins.
pub const DEFAULT_BINS: usize = 524_287;

/// Default maximum word length, in bytes.
pub const DEFAULT_MAX_WORD_LEN: usize = 45;

/// Configuration for a [`Lexicon`](crate::lexicon::Lexicon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Number of hash bins. Prime counts give the best distribution.
    pub bins: usize,
    /// Longest accepted word, in bytes. Longer tokens are skipped
    /// during population.
    pub max_word_len: usize,
    /// Maximum number of entries the lexicon will hold.
    pub max_entries: u64,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        LexiconConfig {
            bins: DEFAULT_BINS,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            max_entries: DEFAULT_BINS as u64,
        }
    }
}

impl LexiconConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.bins == 0 {
            return Err(WordhoardError::invalid_config("bins must be at least 1"));
        }
        if self.max_word_len == 0 {
            return Err(WordhoardError::invalid_config(
                "max_word_len must be at least 1",
            ));
        }
        if self.max_entries == 0 {
            return Err(WordhoardError::invalid_config(
                "max_entries must be at least 1",
            ));
        }
        if self.max_entries > self.bins as u64 {
            log::warn!(
                "max_entries {} exceeds bins {}; load factor may rise above 1",
                self.max_entries,
                self.bins
            );
        }
        Ok(())
    }
}

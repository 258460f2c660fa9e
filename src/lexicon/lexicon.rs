//! The lexicon: bulk population, membership checks, teardown.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, WordhoardError};
use crate::lexicon::bucket::BucketStore;
use crate::lexicon::config::LexiconConfig;
use crate::lexicon::hash::bucket_of;
use crate::lexicon::stats::LexiconStats;

/// A hash-indexed word set with case-insensitive membership checks.
///
/// A lexicon starts empty, is bulk-loaded once from a whitespace-delimited
/// word list, serves read-only [`check`](Lexicon::check) queries, and is
/// torn down with [`release`](Lexicon::release). Loading again requires a
/// release first.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use wordhoard::lexicon::Lexicon;
///
/// let mut lexicon = Lexicon::new();
/// lexicon.populate_from_reader(Cursor::new("apple banana\ncherry\n")).unwrap();
///
/// assert_eq!(lexicon.size(), 3);
/// assert!(lexicon.check("Apple"));
/// assert!(!lexicon.check("durian"));
///
/// lexicon.release();
/// assert_eq!(lexicon.size(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    store: BucketStore,
    config: LexiconConfig,
    entries: u64,
    populated: bool,
}

impl Lexicon {
    /// Create an empty lexicon with the default configuration.
    pub fn new() -> Self {
        let config = LexiconConfig::default();
        Lexicon {
            store: BucketStore::new(config.bins),
            entries: 0,
            populated: false,
            config,
        }
    }

    /// Create an empty lexicon with a custom configuration.
    pub fn with_config(config: LexiconConfig) -> Result<Self> {
        config.validate()?;
        Ok(Lexicon {
            store: BucketStore::new(config.bins),
            entries: 0,
            populated: false,
            config,
        })
    }

    /// Bulk-load whitespace-delimited words from the file at `path`.
    ///
    /// Returns [`WordhoardError::SourceUnavailable`] if the file cannot
    /// be opened and [`WordhoardError::AlreadyPopulated`] if the lexicon
    /// has not been released since its last successful load. On any
    /// failure the lexicon is left empty, never half-populated.
    pub fn populate<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        if self.populated {
            return Err(WordhoardError::AlreadyPopulated);
        }

        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                self.release();
                return Err(WordhoardError::source_unavailable(format!(
                    "{}: {}",
                    path.display(),
                    e
                )));
            }
        };

        self.populate_from_reader(BufReader::new(file))
    }

    /// Bulk-load whitespace-delimited words from any buffered reader.
    ///
    /// Same contract as [`populate`](Lexicon::populate), minus the open
    /// step.
    pub fn populate_from_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        if self.populated {
            return Err(WordhoardError::AlreadyPopulated);
        }

        if let Err(e) = self.insert_tokens(reader) {
            self.release();
            return Err(e);
        }

        self.populated = true;
        log::debug!(
            "lexicon populated: {} entries across {} bins",
            self.entries,
            self.config.bins
        );
        Ok(())
    }

    fn insert_tokens<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                if token.len() > self.config.max_word_len {
                    log::warn!(
                        "skipping over-long token ({} bytes, limit {})",
                        token.len(),
                        self.config.max_word_len
                    );
                    continue;
                }
                if self.entries >= self.config.max_entries {
                    return Err(WordhoardError::capacity_exceeded(format!(
                        "entry limit of {} reached",
                        self.config.max_entries
                    )));
                }

                let bucket = bucket_of(token, self.config.bins);
                self.store.insert_at(bucket, token.to_string());
                self.entries += 1;
            }
        }
        Ok(())
    }

    /// Check whether `word` is present, ignoring ASCII case.
    ///
    /// Total over any input; always false before a successful populate.
    pub fn check(&self, word: &str) -> bool {
        let bucket = bucket_of(word, self.config.bins);
        self.store
            .scan(bucket, |entry| entry.eq_ignore_ascii_case(word))
    }

    /// Number of entries, or 0 if the lexicon is unpopulated.
    pub fn size(&self) -> u64 {
        if self.populated { self.entries } else { 0 }
    }

    /// Whether a populate has succeeded since the last release.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Drop every entry and return to the unpopulated state.
    ///
    /// Idempotent; safe on a lexicon that was never populated.
    pub fn release(&mut self) {
        self.store.clear();
        self.entries = 0;
        self.populated = false;
        log::debug!("lexicon released");
    }

    /// Occupancy snapshot of the bucket store.
    pub fn stats(&self) -> LexiconStats {
        LexiconStats::from_store(&self.store, self.size())
    }

    /// The configuration this lexicon was built with.
    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

//! Occupancy snapshot of a lexicon's bucket store.

use serde::{Deserialize, Serialize};

use crate::lexicon::bucket::BucketStore;

/// Distribution snapshot of a lexicon.
///
/// Lookup cost is bounded by chain length, so `max_chain_len` and
/// `load_factor` are the numbers to watch when sizing `bins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconStats {
    /// Entries currently stored.
    pub entries: u64,
    /// Number of hash bins.
    pub bins: usize,
    /// Bins holding at least one entry.
    pub occupied_bins: usize,
    /// Length of the longest chain.
    pub max_chain_len: usize,
    /// Entries divided by bins.
    pub load_factor: f64,
}

impl LexiconStats {
    pub(crate) fn from_store(store: &BucketStore, entries: u64) -> Self {
        let bins = store.bins();
        LexiconStats {
            entries,
            bins,
            occupied_bins: store.occupied_bins(),
            max_chain_len: store.max_chain_len(),
            load_factor: entries as f64 / bins as f64,
        }
    }
}

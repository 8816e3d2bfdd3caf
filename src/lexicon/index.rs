//! Wildcard bucket index over a lexicon
//!
//! Every word is filed under each of its one-position-blanked variants, so
//! "cat" lands in the buckets `_at`, `c_t` and `ca_`. Two distinct words
//! share a bucket exactly when they differ only at the blanked position,
//! which turns a full lexicon scan into one lookup per character.

use super::Lexicon;
use crate::core::normalize;
use rustc_hash::FxHashMap;

/// Bucket key: the blanked position and the word with that character removed
type BucketKey = (usize, String);

/// Precomputed wildcard buckets for one lexicon
///
/// Buckets hold lexicon positions, so the index is only meaningful together
/// with the lexicon it was built from.
#[derive(Debug, Clone, Default)]
pub struct WildcardIndex {
    buckets: FxHashMap<BucketKey, Vec<u32>>,
    lexicon_len: usize,
}

impl WildcardIndex {
    /// Build the index for `lexicon`
    ///
    /// # Panics
    /// Panics if the lexicon holds more than `u32::MAX` words.
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        let mut buckets: FxHashMap<BucketKey, Vec<u32>> = FxHashMap::default();

        for (idx, word) in lexicon.iter().enumerate() {
            let idx = u32::try_from(idx).expect("lexicon exceeds u32::MAX words");
            for position in 0..word.chars().count() {
                buckets
                    .entry(bucket_key(word, position))
                    .or_default()
                    .push(idx);
            }
        }

        Self {
            buckets,
            lexicon_len: lexicon.len(),
        }
    }

    /// Number of distinct buckets
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// True if this index was built from a lexicon of the same size
    #[must_use]
    pub fn matches(&self, lexicon: &Lexicon) -> bool {
        self.lexicon_len == lexicon.len()
    }

    /// Words of `lexicon` that differ from `word` in exactly one position
    ///
    /// Results come back in lexicon iteration order, the same order a full
    /// scan produces.
    pub fn neighbors<'a>(&self, lexicon: &'a Lexicon, word: &str) -> Vec<&'a str> {
        let word = normalize(word);
        let mut found: Vec<u32> = Vec::new();

        for position in 0..word.chars().count() {
            if let Some(bucket) = self.buckets.get(&bucket_key(&word, position)) {
                found.extend(
                    bucket
                        .iter()
                        .copied()
                        .filter(|&idx| lexicon.word_at(idx as usize) != word),
                );
            }
        }

        // A neighbor differs at one position only, so it sits in one bucket
        found.sort_unstable();
        found
            .into_iter()
            .map(|idx| lexicon.word_at(idx as usize))
            .collect()
    }
}

fn bucket_key(word: &str, position: usize) -> BucketKey {
    let rest = word
        .chars()
        .enumerate()
        .filter_map(|(i, c)| (i != position).then_some(c))
        .collect();
    (position, rest)
}

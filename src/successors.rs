//! A [`Successors`] list records every word seen following one
//! [`WordPair`](crate::word::WordPair) in a [`Chain`](crate::Chain).

use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::word::Word;

/// The words that followed one pair in the corpus, in order of appearance.
///
/// Duplicates are kept: a word that followed the same pair three times appears here three
/// times, so drawing uniformly from the list already weights successors by frequency.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Successors {
    words: Vec<Word>,
}

impl Successors {
    pub(crate) fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Record one more occurrence of `word` following the pair.
    pub(crate) fn push(&mut self, word: &str) {
        self.words.push(word.to_string());
    }

    /// Draws a random successor, weighted by how often each word appeared.
    ///
    /// # Panics
    ///
    /// Panics on an empty list. Lists produced by [`ChainBuilder`](crate::ChainBuilder)
    /// always hold at least one word.
    pub fn pick(&self, rng: &mut impl Rng) -> &Word {
        self.words
            .choose(rng)
            .expect("successor list is never empty")
    }

    /// The recorded successors, in order of appearance.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}

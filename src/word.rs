//! A [`Chain`](crate::Chain) is keyed by pairs of [`Word`]s. A word here is exactly what
//! [`str::split_whitespace`] yields: a maximal run of non-whitespace characters, keeping its
//! original casing and any attached punctuation. `"Hello!"` and `"hello!"` are different words,
//! and both are different from `"hello"`.

use hashbrown::Equivalent;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single whitespace-delimited word from the corpus.
pub type Word = String;

/// A borrowed version of [`Word`].
pub type WordRef<'a> = &'a str;

/// An owned pair of two consecutive corpus words; the lookup key of a chain.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordPair(pub Word, pub Word);

/// A borrowed version of [`WordPair`] that does not own its words.
pub type WordPairRef<'a> = (WordRef<'a>, WordRef<'a>);

impl<'a> From<&WordPairRef<'a>> for WordPair {
    fn from(value: &WordPairRef) -> Self {
        Self(value.0.to_string(), value.1.to_string())
    }
}

impl WordPair {
    pub fn as_ref(&self) -> WordPairRef<'_> {
        (&self.0, &self.1)
    }
}

impl PartialEq<(&str, &str)> for WordPair {
    fn eq(&self, other: &(&str, &str)) -> bool {
        self.0 == *other.0 && self.1 == *other.1
    }
}

impl Equivalent<WordPair> for (&str, &str) {
    fn equivalent(&self, key: &WordPair) -> bool {
        key.eq(self)
    }
}

/// Default sentence-start heuristic: the word's first character is uppercase.
pub fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_heuristic() {
        assert!(starts_uppercase("Norm"));
        assert!(starts_uppercase("Örn"));
        assert!(!starts_uppercase("norm"));
        assert!(!starts_uppercase("1984"));
        assert!(!starts_uppercase("\"Quoted"));
        assert!(!starts_uppercase(""));
    }

    #[test]
    fn borrowed_pair_matches_owned_pair() {
        let owned = WordPair::from(&("hi", "there"));
        assert_eq!(owned, ("hi", "there"));
        assert_eq!(owned.as_ref(), ("hi", "there"));
    }
}

//! See the top level crate documentation for information about the [`Chain`] type.

use hashbrown::HashMap;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::successors::Successors;
use crate::word::{starts_uppercase, Word, WordPair, WordPairRef};

/// Knobs for sentence generation, supplied by the caller.
#[derive(Clone, Debug)]
pub struct GenOptions {
    /// A walk stops after emitting a word whose last character is one of these.
    pub terminators: Vec<char>,
    /// Upper bound, in bytes, on what [`Chain::generate_post()`] returns.
    pub max_len: usize,
    /// How many candidates [`Chain::generate_post()`] samples before giving up.
    pub max_attempts: usize,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            terminators: vec!['.', '!', '?'],
            max_len: 140,
            max_attempts: 100,
        }
    }
}

/// Second order Markov chain over corpus words.
///
/// Built once with a [`ChainBuilder`], then read-only: every generation method takes
/// `&self`, so a chain can be sampled any number of times without locking.
///
/// ```
/// # use magpie::Chain;
/// let mut cb = Chain::builder();
/// cb.feed_str("hi there mary hi there juanita");
/// let chain = cb.build().unwrap();
///
/// // Both words that ever followed ("hi", "there"), in corpus order:
/// assert_eq!(chain.successors(&("hi", "there")).unwrap(), vec!["mary", "juanita"]);
///
/// // The corpus ends on ("there", "juanita"), so nothing follows it:
/// assert!(chain.successors(&("there", "juanita")).is_none());
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chain {
    map: HashMap<WordPair, Successors>,
    /// Pairs passing the start filter, materialized so start selection draws uniformly
    /// from an indexable sequence instead of a map key view.
    starts: Vec<WordPair>,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Words seen following `pair` in the corpus, in order of appearance.
    ///
    /// `None` if the pair never occurred with a third word after it.
    pub fn successors<'a>(&self, pair: &WordPairRef<'a>) -> Option<&[Word]> {
        self.map.get(pair).map(Successors::as_slice)
    }

    /// Number of distinct word pairs in the chain.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn start_pair(&self, rng: &mut impl Rng) -> Result<&WordPair> {
        self.starts.choose(rng).ok_or(Error::NoStartKey)
    }

    /// Samples one sentence: a random walk from a random sentence-start pair.
    ///
    /// The walk stops when the freshly picked word ends in one of `opts.terminators`, or
    /// when the current pair has no recorded successors because the corpus ran out there.
    /// Both are normal endings; the only failure is [`Error::NoStartKey`].
    pub fn generate_sentence(&self, rng: &mut impl Rng, opts: &GenOptions) -> Result<String> {
        let start = self.start_pair(rng)?;
        let mut words: Vec<&Word> = vec![&start.0, &start.1];
        let (mut left, mut right) = (&start.0, &start.1);

        loop {
            let Some(followers) = self.map.get(&(left.as_str(), right.as_str())) else {
                break;
            };
            let next = followers.pick(rng);
            words.push(next);
            left = right;
            right = next;
            if right.ends_with(|c: char| opts.terminators.contains(&c)) {
                break;
            }
        }

        Ok(words.iter().join(" "))
    }

    /// Samples sentences until one fits in `opts.max_len` bytes.
    ///
    /// Gives up with [`Error::LimitUnsatisfiable`] after `opts.max_attempts` oversized
    /// candidates, so a corpus whose shortest sentence is longer than the limit cannot
    /// spin this loop forever.
    pub fn generate_post(&self, rng: &mut impl Rng, opts: &GenOptions) -> Result<String> {
        for _ in 0..opts.max_attempts {
            let sentence = self.generate_sentence(rng, opts)?;
            if sentence.len() <= opts.max_len {
                return Ok(sentence);
            }
        }
        Err(Error::LimitUnsatisfiable {
            max_len: opts.max_len,
            attempts: opts.max_attempts,
        })
    }
}

/// Builds a [`Chain`] by being fed corpus text and keeping track of every word that
/// follows each pair of consecutive words.
#[derive(Clone, Debug)]
pub struct ChainBuilder {
    map: HashMap<WordPair, Successors>,
    start_filter: fn(&str) -> bool,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            start_filter: starts_uppercase,
        }
    }

    /// Replaces the sentence-start heuristic used by [`build()`](Self::build) when
    /// collecting start pairs. Defaults to [`starts_uppercase`].
    pub fn start_filter(mut self, filter: fn(&str) -> bool) -> Self {
        self.start_filter = filter;
        self
    }

    /// Record the occurrence of `next` following the pair `prev`.
    pub fn add_follower(&mut self, prev: (&str, &str), next: &str) {
        match self.map.get_mut(&prev) {
            Some(followers) => followers.push(next),
            None => {
                let mut followers = Successors::new();
                followers.push(next);
                self.map.insert(WordPair::from(&prev), followers);
            }
        }
    }

    /// Feeds the builder more corpus text, split on whitespace. Every window of three
    /// consecutive words `(a, b, c)` records `c` as a follower of the pair `(a, b)`.
    ///
    /// May be called once per source; occurrences accumulate across calls.
    pub fn feed_str(&mut self, content: &str) {
        for (a, b, next) in content.split_whitespace().tuple_windows() {
            self.add_follower((a, b), next);
        }
    }

    /// Uses up the builder and creates the chain.
    ///
    /// Fails with [`Error::EmptyCorpus`] if the fed text never held three consecutive
    /// words, since no transition can be formed from less.
    pub fn build(self) -> Result<Chain> {
        if self.map.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let starts = self
            .map
            .keys()
            .filter(|pair| (self.start_filter)(&pair.0))
            .cloned()
            .collect();

        Ok(Chain {
            map: self.map,
            starts,
        })
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;

    fn chain_from(s: &str) -> Chain {
        let mut cb = Chain::builder();
        cb.feed_str(s);
        cb.build().unwrap()
    }

    #[test]
    fn empty_builder_is_an_empty_corpus() {
        assert!(matches!(Chain::builder().build(), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn two_words_are_not_enough() {
        let mut cb = Chain::builder();
        cb.feed_str("Hi there");
        assert!(matches!(cb.build(), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn follower_lists_keep_appearance_order() {
        let chain = chain_from("hi there mary hi there juanita");

        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.successors(&("hi", "there")).unwrap(),
            vec!["mary", "juanita"]
        );
        assert_eq!(chain.successors(&("mary", "hi")).unwrap(), vec!["there"]);
        assert_eq!(chain.successors(&("there", "mary")).unwrap(), vec!["hi"]);
        // The corpus ends on ("there", "juanita"); nothing follows it, so it is not a key.
        assert!(chain.successors(&("there", "juanita")).is_none());
    }

    #[test]
    fn every_pair_has_at_least_one_follower() {
        let chain = chain_from(
            "The quick brown fox jumps over the lazy dog. \
             The lazy dog does not mind. The fox never stops.",
        );
        assert!(chain.map.values().all(|s| !s.as_slice().is_empty()));
    }

    #[test]
    fn feeding_twice_accumulates() {
        let mut cb = Chain::builder();
        cb.feed_str("hi there mary");
        cb.feed_str("hi there juanita");
        let chain = cb.build().unwrap();
        assert_eq!(
            chain.successors(&("hi", "there")).unwrap(),
            vec!["mary", "juanita"]
        );
    }

    #[test]
    fn sentences_start_with_a_capitalized_word() {
        let chain = chain_from("The cat sat. the dog slept. The fish swam. the bird sang.");
        let mut rng = thread_rng();
        for _ in 0..50 {
            let sentence = chain
                .generate_sentence(&mut rng, &GenOptions::default())
                .unwrap();
            assert!(sentence.chars().next().unwrap().is_uppercase());
        }
    }

    #[test]
    fn all_lowercase_corpus_has_no_start() {
        let chain = chain_from("the cat sat on the mat.");
        let res = chain.generate_sentence(&mut thread_rng(), &GenOptions::default());
        assert!(matches!(res, Err(Error::NoStartKey)));
    }

    #[test]
    fn custom_start_filter() {
        let mut cb = Chain::builder().start_filter(|w| w.starts_with('#'));
        cb.feed_str("#tag one two #tag three four.");
        let chain = cb.build().unwrap();

        let sentence = chain
            .generate_sentence(&mut thread_rng(), &GenOptions::default())
            .unwrap();
        assert!(sentence.starts_with('#'));
    }

    #[test]
    fn single_sentence_corpus_reproduces_itself() {
        let chain = chain_from("Stop right now.");
        let sentence = chain
            .generate_sentence(&mut thread_rng(), &GenOptions::default())
            .unwrap();
        assert_eq!(sentence, "Stop right now.");
    }

    #[test]
    fn missing_transition_ends_the_walk() {
        // "two apple" never recurs with a third word, so the walk runs off the corpus end
        // without terminal punctuation.
        let chain = chain_from("One two apple");
        let sentence = chain
            .generate_sentence(&mut thread_rng(), &GenOptions::default())
            .unwrap();
        assert_eq!(sentence, "One two apple");
    }

    #[test]
    fn generate_post_respects_the_limit() {
        let chain = chain_from(
            "Norm walks in. Everyone shouts. The beer is cold. The bar is warm. \
             Nobody ever leaves before closing time, and the jukebox only plays one song.",
        );
        let opts = GenOptions::default();
        let mut rng = thread_rng();
        for _ in 0..20 {
            assert!(chain.generate_post(&mut rng, &opts).unwrap().len() <= opts.max_len);
        }
    }

    #[test]
    fn unreachable_limit_is_an_error() {
        let chain = chain_from("Aaaaaaaaaaaaaaaaaaaa bbbbbbbbbbbbbbbbbbbb cccccccccccccccccccc.");
        let opts = GenOptions {
            max_len: 10,
            max_attempts: 5,
            ..GenOptions::default()
        };
        let res = chain.generate_post(&mut thread_rng(), &opts);
        assert!(matches!(res, Err(Error::LimitUnsatisfiable { .. })));
    }

    #[test]
    fn rebuilding_gives_an_identical_chain() {
        let corpus = "Sam polishes a glass. Norm waves from the door. Cliff knows a fact \
                      about everything. Sam pours one more. Norm never says no.";
        let a = chain_from(corpus);
        let b = chain_from(corpus);

        assert_eq!(a.len(), b.len());
        for (pair, followers) in a.map.iter() {
            assert_eq!(b.successors(&pair.as_ref()), Some(followers.as_slice()));
        }
    }

    #[test]
    fn repeated_generation_terminates() {
        let corpus = "\
Morning fog rolls off the harbor while the gulls argue about nothing. The ferry is late \
again. Nobody complains anymore. A vendor stacks oranges into a pyramid and dares the \
wind to try something. The wind tries something. Oranges everywhere! Who pays for this? \
Nobody knows. The gulls approve.";
        let chain = chain_from(corpus);
        let mut rng = thread_rng();
        for _ in 0..100 {
            let _ = chain
                .generate_sentence(&mut rng, &GenOptions::default())
                .unwrap();
        }
    }
}

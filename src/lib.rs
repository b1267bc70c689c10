//! Chatter bot core: sentence generation using second order Markov chains over words.
//!
//! A [`Chain`] looks at two consecutive corpus words at a time and records every word that
//! ever followed them, keeping duplicates so that common continuations are picked more
//! often. Sampling walks the chain from a randomly chosen sentence-start pair until it hits
//! terminal punctuation or runs off the end of the corpus, and [`Chain::generate_post()`]
//! re-samples until the result fits a length budget.
//!
//! ```
//! use magpie::{Chain, GenOptions};
//!
//! let mut cb = Chain::builder();
//! cb.feed_str("Big flocks chatter. Big flocks scatter.");
//! let chain = cb.build().unwrap();
//!
//! let sentence = chain
//!     .generate_sentence(&mut rand::thread_rng(), &GenOptions::default())
//!     .unwrap();
//! assert!(sentence.chars().next().unwrap().is_uppercase());
//! ```
//!
//! # Features
//!
//! - `bot` - Pulls in the HTTP and CLI stack for the `magpie` binary, which loads corpus
//!   files, builds a chain once, and then posts a bounded sentence on a fixed schedule.
//!   Enabled by default.
//! - `serde` - Derives `Serialize`/`Deserialize` on the chain types. The crate itself never
//!   persists anything.
//! - `inline-more` - Passes the `inline-more` feature on to `hashbrown`. Enabled by default.

pub mod chain;
pub mod corpus;
pub mod error;
pub mod successors;
pub mod word;

#[cfg(feature = "bot")]
pub mod post;

pub use chain::{Chain, ChainBuilder, GenOptions};
pub use error::{Error, Result};

//! Everything that can go wrong while loading a corpus, building a chain, or sampling it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, self::Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A corpus source could not be read. Fatal: the corpus cannot be assembled.
    #[error("cannot read corpus source {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus holds fewer than three words, so not even one transition can be formed.
    #[error("corpus is too small to model, need at least three words")]
    EmptyCorpus,

    /// No word pair passes the sentence-start filter; generation can never begin.
    #[error("corpus has no word pair that can start a sentence")]
    NoStartKey,

    /// Every sampled candidate blew the length budget. Recoverable: the caller may skip
    /// the iteration or relax the limit.
    #[error("no sentence of at most {max_len} bytes found in {attempts} attempts")]
    LimitUnsatisfiable { max_len: usize, attempts: usize },

    /// A credential the poster needs is not set in the environment.
    #[cfg(feature = "bot")]
    #[error("missing credential {0} in environment")]
    MissingCredential(&'static str),

    /// The status API rejected a request, or it never arrived.
    #[cfg(feature = "bot")]
    #[error("status API request failed")]
    Post(#[from] reqwest::Error),
}

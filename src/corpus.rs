//! Turning text files on disk into one modelable corpus string.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// A corpus needs at least this many words before a single transition can be formed.
pub const MIN_WORDS: usize = 3;

/// Reads every source in `paths` and concatenates their text, in order, joined by newlines.
///
/// All sources contribute: a corpus assembled from three files holds the text of all three,
/// not just the last one.
///
/// Fails with [`Error::SourceUnreadable`] on the first unreadable path, and with
/// [`Error::EmptyCorpus`] if the combined text holds fewer than [`MIN_WORDS`]
/// whitespace-delimited words (an empty path list included).
pub fn load_corpus<P: AsRef<Path>>(paths: &[P]) -> Result<String> {
    let mut text = String::new();

    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} bytes from {}", content.len(), path.display());

        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&content);
    }

    if text.split_whitespace().nth(MIN_WORDS - 1).is_none() {
        return Err(Error::EmptyCorpus);
    }

    Ok(text)
}

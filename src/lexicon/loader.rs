//! Word list loading utilities
//!
//! Builds lexicons from files or from the embedded default word list.

use super::{Lexicon, LexiconError};
use crate::wordlists::WORDS;
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a lexicon from a word list file
///
/// The file uses the same format as `Lexicon::from_reader`: one word per
/// line, anything after the first token ignored.
///
/// # Errors
///
/// Returns `LexiconError::Open` if the file cannot be opened, or
/// `LexiconError::Read` if reading it fails part way.
///
/// # Examples
/// ```no_run
/// use word_ladder::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LexiconError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let lexicon = Lexicon::from_reader(BufReader::new(file))?;
    info!("Loaded {} words from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Build a lexicon from the word list compiled into the binary
///
/// # Examples
/// ```
/// use word_ladder::lexicon::loader::load_embedded;
///
/// let lexicon = load_embedded();
/// assert!(lexicon.contains("cold"));
/// ```
#[must_use]
pub fn load_embedded() -> Lexicon {
    let lexicon = Lexicon::from_words(WORDS);
    info!("Loaded {} embedded words", lexicon.len());
    lexicon
}

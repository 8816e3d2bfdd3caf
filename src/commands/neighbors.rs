//! Neighbors command
//!
//! Lists the words one letter away from a given word.

use crate::search::LadderGame;

/// Result of a neighbor lookup
pub struct NeighborsResult {
    pub word: String,
    pub is_word: bool,
    pub neighbors: Vec<String>,
}

/// Look up the neighbors of `word`
///
/// `word` need not be in the lexicon itself.
///
/// # Errors
///
/// Returns an error if `word` is blank.
pub fn list_neighbors(game: &LadderGame, word: &str) -> Result<NeighborsResult, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("Word must not be empty".to_string());
    }

    Ok(NeighborsResult {
        word: word.to_lowercase(),
        is_word: game.is_word(word),
        neighbors: game.neighbors(word),
    })
}

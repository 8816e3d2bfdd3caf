//! Shortest word ladder search
//!
//! Neighbor discovery over the implicit one-letter-change graph, the
//! breadth-first search that walks it, and ladder validation. `LadderGame`
//! ties them to a lexicon and exposes the query operations.

pub mod bfs;
mod engine;
pub mod neighbors;
pub mod validate;

pub use bfs::{SearchOutcome, SearchReport, SearchStats};
pub use engine::{LadderGame, SearchConfig};
pub use neighbors::{IndexedNeighbors, NeighborMode, NeighborSource, Neighbors, ScanNeighbors};
pub use validate::{LadderDefect, is_word_ladder};

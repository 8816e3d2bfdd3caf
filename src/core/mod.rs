//! Core domain types for word ladders
//!
//! Pure functions and value types with no I/O: case normalization, the
//! Hamming distance between two words, and the `Ladder` search result.

mod distance;
mod ladder;
mod normalize;

pub use distance::{hamming_distance, is_one_apart};
pub use ladder::Ladder;
pub use normalize::normalize;

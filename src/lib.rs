//! Word Ladder
//!
//! Shortest word ladder search: chains of same-length words where each step
//! changes exactly one letter, found by breadth-first search over a graph
//! that is computed on demand from a lexicon.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::lexicon::Lexicon;
//! use word_ladder::search::LadderGame;
//!
//! let lexicon = Lexicon::from_words(["cold", "cord", "card", "ward", "warm"]);
//! let game = LadderGame::new(lexicon);
//!
//! let ladder = game.min_ladder("cold", "warm");
//! assert_eq!(ladder.len(), 5);
//! println!("{ladder}");
//! ```

// Core domain types
pub mod core;

// Word storage
pub mod lexicon;

// Ladder search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

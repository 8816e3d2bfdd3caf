//! Word Ladder - CLI
//!
//! Finds shortest word ladders, lists neighbors and checks candidate ladders.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::time::Duration;
use word_ladder::{
    commands::{
        BenchmarkConfig, check_ladder, find_ladder, list_neighbors, measure_distance,
        run_benchmark,
    },
    lexicon::{
        Lexicon,
        loader::{load_embedded, load_from_file},
    },
    output::{
        print_benchmark_result, print_check_result, print_distance_result, print_ladder_result,
        print_neighbors_result, print_word_count,
    },
    search::{LadderGame, NeighborMode, SearchConfig},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders by breadth-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Neighbor lookup: scan (default) or indexed
    #[arg(long, global = true, default_value = "scan")]
    neighbors: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest ladder between two words
    Ladder {
        start: String,
        end: String,

        /// Give up after this many milliseconds
        #[arg(short, long)]
        timeout_ms: Option<u64>,

        /// Show search statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// List the words one letter away from a word
    Neighbors { word: String },

    /// Check whether a sequence of words is a ladder
    Check {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Hamming distance between two words
    Distance { first: String, second: String },

    /// Solve random word pairs and report statistics
    Benchmark {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Word length
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Random seed
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Show the size of the word list
    Info,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the lexicon named by the -w flag
fn load_lexicon(wordlist: &str) -> Result<Lexicon> {
    match wordlist {
        "embedded" => Ok(load_embedded()),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lexicon = load_lexicon(&cli.wordlist)?;
    let mode = NeighborMode::from_name(&cli.neighbors);

    match cli.command {
        Commands::Ladder {
            start,
            end,
            timeout_ms,
            stats,
        } => {
            let mut config = SearchConfig::new(mode);
            if let Some(ms) = timeout_ms {
                config = config.with_deadline(Duration::from_millis(ms));
            }
            let game = LadderGame::with_config(lexicon, config);
            let result = find_ladder(&game, &start, &end).map_err(|e| anyhow!(e))?;
            print_ladder_result(&result, stats);
        }
        Commands::Neighbors { word } => {
            let game = LadderGame::with_config(lexicon, SearchConfig::new(mode));
            let result = list_neighbors(&game, &word).map_err(|e| anyhow!(e))?;
            print_neighbors_result(&result);
        }
        Commands::Check { words } => {
            let game = LadderGame::new(lexicon);
            print_check_result(&check_ladder(&game, words.as_slice()));
        }
        Commands::Distance { first, second } => {
            let game = LadderGame::new(lexicon);
            print_distance_result(&measure_distance(&game, &first, &second));
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => {
            let game = LadderGame::with_config(lexicon, SearchConfig::new(mode));
            println!("Running benchmark on {count} random {length}-letter pairs...");
            let config = BenchmarkConfig {
                count,
                length,
                seed,
                show_progress: true,
            };
            let result = run_benchmark(&game, &config).map_err(|e| anyhow!(e))?;
            print_benchmark_result(&result);
        }
        Commands::Info => print_word_count(lexicon.len()),
    }

    Ok(())
}

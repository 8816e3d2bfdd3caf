//! Display functions for command results

use super::formatters::{create_progress_bar, highlight_ladder};
use crate::commands::{BenchmarkResult, CheckResult, DistanceResult, LadderResult, NeighborsResult};
use crate::search::SearchOutcome;
use colored::Colorize;

/// Print the result of a ladder search
pub fn print_ladder_result(result: &LadderResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.end.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        SearchOutcome::Found(ladder) => {
            println!("\n{}", highlight_ladder(ladder.words()));
            println!(
                "\n{}",
                format!("✅ {} words, {} steps", ladder.len(), ladder.steps())
                    .green()
                    .bold()
            );
        }
        SearchOutcome::NoPath => {
            println!("\n{}", "❌ No ladder connects these words".red().bold());
        }
        SearchOutcome::InvalidEndpoints => {
            println!(
                "\n{}",
                "❌ No ladder: words differ in length or are not in the word list"
                    .red()
                    .bold()
            );
        }
        SearchOutcome::Cancelled => {
            println!("\n{}", "⏱  Search timed out".yellow().bold());
        }
    }

    if verbose {
        println!("  Expanded:   {} words", result.stats.expanded);
        println!("  Discovered: {} words", result.stats.discovered);
        println!("  Time taken: {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    let marker = if result.is_word {
        "".normal()
    } else {
        " (not in word list)".bright_black()
    };
    println!(
        "\n{}{}: {} neighbors",
        result.word.bright_yellow().bold(),
        marker,
        result.neighbors.len()
    );

    for chunk in result.neighbors.chunks(10) {
        println!("   {}", chunk.join(" "));
    }
}

/// Print whether a sequence is a ladder
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", result.words.join(" → "));
    if result.valid {
        println!("{}", "✅ Valid word ladder".green().bold());
    } else {
        println!("{}", "❌ Not a word ladder".red().bold());
        if let Some(defect) = &result.defect {
            println!("   {defect}");
        }
    }
}

/// Print the distance between two words
pub fn print_distance_result(result: &DistanceResult) {
    match result.distance {
        Some(distance) => println!(
            "{} ↔ {}: {}",
            result.first,
            result.second,
            distance.to_string().bright_yellow().bold()
        ),
        None => println!(
            "{} ↔ {}: {}",
            result.first,
            result.second,
            "undefined (lengths differ)".bright_black()
        ),
    }
}

/// Print the size of the loaded word list
pub fn print_word_count(count: usize) {
    println!("📖 {} words loaded", count.to_string().bright_yellow().bold());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!("   Ladders found:    {}", format!("{}", result.found).green());
    println!("   No ladder:        {}", format!("{}", result.no_ladder).yellow());
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length)
            .bright_yellow()
            .bold()
    );
    if let Some(longest) = &result.longest {
        println!("   Longest:          {longest}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut lengths: Vec<usize> = result.distribution.keys().copied().collect();
    lengths.sort_unstable();
    for length in lengths {
        let count = result.distribution[&length];
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

//! Display functions for command results

use super::formatters::{colored_code, create_progress_bar, feedback_pegs};
use crate::commands::{BenchmarkResult, SolveResult, TestAllStatistics};
use crate::core::Palette;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let palette = &result.game.palette;
    let length = result.game.length;

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", colored_code(palette, &result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_code(palette, &step.guess),
            feedback_pegs(step.feedback, length)
        );

        if verbose {
            println!("  Feedback:   {}", step.feedback);
            match step.candidates_after {
                Some(after) => {
                    println!("  Candidates: {} → {after}", step.candidates_before);
                    if after > 0 {
                        println!(
                            "  Reduction:  {:.1}x",
                            step.candidates_before as f64 / after as f64
                        );
                    }
                }
                None => println!("  Candidates: {}", step.candidates_before),
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_summary(result);
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics, palette: &Palette) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EXHAUSTIVE TEST RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_summary(&stats.summary);

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (code, rounds) in stats.hardest.iter().take(5) {
            println!("   {} ({rounds} guesses)", colored_code(palette, code));
        }
    }

    if !stats.unsolved.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        for code in stats.unsolved.iter().take(10) {
            println!("   {}", colored_code(palette, code));
        }
        if stats.unsolved.len() > 10 {
            println!("   ...and {} more", stats.unsolved.len() - 10);
        }
    }
}

fn print_summary(result: &BenchmarkResult) {
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for rounds in result.min_rounds..=result.max_rounds {
        let count = result.distribution.get(&rounds).copied().unwrap_or(0);
        let pct = count as f64 / result.solved as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {rounds:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

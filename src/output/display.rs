//! Display functions for command results

use super::formatters::{chain_to_arrows, changed_position};
use crate::commands::SolveResult;
use crate::core::Word;
use crate::ladder::LadderOutcome;
use colored::Colorize;

/// Print a ladder one word per line
pub fn print_chain(chain: &[Word]) {
    for word in chain {
        println!("{word}");
    }
}

/// Render a word with the character at `position` highlighted
fn highlight(word: &Word, position: Option<usize>) -> String {
    word.chars()
        .iter()
        .enumerate()
        .map(|(i, ch)| {
            if Some(i) == position {
                ch.to_string().bright_yellow().bold().to_string()
            } else {
                ch.to_string()
            }
        })
        .collect()
}

/// Print a coloured summary of a solved query to stderr
pub fn print_solve_summary(result: &SolveResult) {
    let report = &result.report;

    eprintln!("\n{}", "─".repeat(60).cyan());
    eprintln!(
        "Ladder: {} → {}",
        report.source.text().bright_yellow().bold(),
        report.destination.text().bright_yellow().bold()
    );
    eprintln!("{}", "─".repeat(60).cyan());

    match &report.outcome {
        LadderOutcome::Found(chain) => {
            let mut prev: Option<&Word> = None;
            for (i, word) in chain.iter().enumerate() {
                let position = prev.and_then(|p| changed_position(p, word));
                eprintln!("  {i:>3}. {}", highlight(word, position));
                prev = Some(word);
            }
            eprintln!("\n  {}", chain_to_arrows(chain).bright_black());
        }
        LadderOutcome::MissingWord(word) => {
            eprintln!("  Dictionary lacks the forced word {}", word.text().red().bold());
        }
        LadderOutcome::NoPath => {
            eprintln!("  {}", "No ladder exists in this dictionary".red());
        }
        LadderOutcome::BudgetExhausted { steps } => {
            eprintln!("  {}", format!("Gave up after {steps} search steps").red());
        }
    }

    eprintln!("\n📊 {}", "Search:".bright_cyan().bold());
    eprintln!("   Greedy steps:  {}", report.stats.greedy_steps);
    eprintln!("   DFS pushes:    {}", report.stats.pushes);
    eprintln!("   Backtracks:    {}", report.stats.backtracks);
    eprintln!("   Time taken:    {:.3}ms", result.duration.as_secs_f64() * 1000.0);

    eprintln!();
    if let Some(steps) = report.step_count() {
        eprintln!(
            "{}",
            format!("✅ Ladder found in {steps} steps").green().bold()
        );
    } else {
        eprintln!("{}", "❌ No ladder found".red().bold());
    }
}

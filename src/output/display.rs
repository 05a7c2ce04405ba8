//! Display functions for command results

use colored::Colorize;

use super::formatters::{format_score, used_entry};
use crate::commands::CheckResult;
use crate::engine::{Outcome, Snapshot};

/// Print the outcome of a single submission
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Accepted { word, awarded } => {
            println!(
                "\n{} {} (+{awarded} points)",
                "✓".green().bold(),
                word.green()
            );
        }
        Outcome::Rejected(rejection) => {
            println!(
                "\n{} {}",
                rejection.title().red().bold(),
                rejection.message()
            );
        }
        Outcome::Empty => {}
    }
}

/// Print the root word, the used-word list, and the running score
pub fn print_scoreboard(snapshot: &Snapshot) {
    println!(
        "\nRoot word: {}",
        snapshot.root_word.to_uppercase().bright_yellow().bold()
    );

    for word in &snapshot.used_words {
        println!("  {}", used_entry(word));
    }

    println!(
        "Your score is: {}\n",
        format_score(snapshot.score).bright_cyan().bold()
    );
}

/// Print the result of a check run
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match &step.outcome {
            Outcome::Accepted { word, awarded } => {
                println!("  {} {word} (+{awarded} points)", "✓".green());
            }
            Outcome::Rejected(rejection) => {
                println!(
                    "  {} {}: {}",
                    "✗".red(),
                    step.input,
                    rejection.title().red()
                );
            }
            Outcome::Empty => {
                println!("  {} blank input ignored", "·".bright_black());
            }
        }
    }

    println!("\nAccepted: {} of {}", result.accepted, result.steps.len());
    println!(
        "Final score: {}",
        format_score(result.score).bright_cyan().bold()
    );
}

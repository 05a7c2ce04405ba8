//! Interactive play mode
//!
//! Text loop over stdin. Every game rule lives in the engine; the loop only
//! renders outcomes and snapshots.

use std::io::{self, Write};

use colored::Colorize;

use crate::dictionary::SpellChecker;
use crate::engine::{Outcome, Session};
use crate::output::{print_outcome, print_scoreboard};

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error reading
/// user input.
pub fn run_play<S: AsRef<str>, C: SpellChecker>(
    word_list: &[S],
    checker: C,
    language: &str,
) -> Result<(), String> {
    let mut session =
        Session::start_in_language(word_list, checker, language).map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Scramble - Play Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words of three or more letters from the root word.");
    println!("Each root letter is usable once per occurrence, and every word");
    println!("must be a real one. Repeats and misses cost a point.\n");
    println!("Commands: '!new' for a fresh root word, '!quit' to exit\n");

    print_scoreboard(&session.snapshot());

    loop {
        let Some(input) = get_user_input("Word")? else {
            // EOF on stdin ends the game cleanly
            println!("\nThanks for playing!\n");
            return Ok(());
        };

        match input.as_str() {
            "!quit" | "!q" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "!new" | "!n" => {
                session.restart(word_list).map_err(|e| e.to_string())?;
                println!("\n{}", "New game started!".bright_cyan());
                print_scoreboard(&session.snapshot());
                continue;
            }
            _ => {}
        }

        let outcome = session.submit(&input);
        if outcome == Outcome::Empty {
            continue;
        }

        print_outcome(&outcome);
        print_scoreboard(&session.snapshot());
    }
}

/// Get user input with a prompt, `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}> ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

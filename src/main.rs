//! Word Scramble - CLI
//!
//! Anagram word game: make real words from a random root word's letters,
//! with rule validation, scoring, and dictionary lookup.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{CheckConfig, run_check, run_play},
    dictionary::WordSet,
    output::print_check_result,
    wordlists::{
        STARTERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Anagram word game with rule validation, scoring, and dictionary lookup",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, 326 root words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Language tag for dictionary lookups
    #[arg(short = 'l', long, global = true, default_value = "en")]
    language: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Validate candidate words against a fixed root word
    Check {
        /// The root word to play against
        root: String,

        /// Candidate words, validated in submission order
        words: Vec<String>,
    },
}

/// Load the root-word list based on the -w flag
///
/// - "embedded": the built-in starter list
/// - "<path>": load a custom newline-delimited list from file
fn load_word_list(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(STARTERS)),
        path => {
            let words = load_from_file(path)?;
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Root-word list based on -w flag; a missing file is fatal here
    let word_list = load_word_list(&cli.wordlist)?;
    let checker = WordSet::english();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(&word_list, checker, &cli.language).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, words } => run_check_command(root, words, &cli.language, checker),
    }
}

fn run_check_command(
    root: String,
    words: Vec<String>,
    language: &str,
    checker: WordSet,
) -> Result<()> {
    let mut config = CheckConfig::new(root, words);
    config.language = language.to_string();

    let result = run_check(config, checker)?;
    print_check_result(&result);
    Ok(())
}

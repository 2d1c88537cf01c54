//! Word Ladder - CLI
//!
//! Reads a two-word query and a dictionary, then prints the ladder one word per line.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{SolveConfig, solve_query},
    core::Word,
    ladder::{LadderConfig, LadderSolver, MissingWordPolicy},
    output::{print_chain, print_solve_summary},
    wordlists::{
        SAMPLE_DICTIONARY,
        loader::{load_dictionary, read_lines, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Build a word ladder between two words of equal length",
    version,
    author
)]
struct Cli {
    /// File with the start and end words, one per line
    input: String,

    /// Dictionary file with one word per line, or 'sample' for the embedded list
    dictionary: String,

    /// When a forced greedy word is missing: 'abort' (default) or 'search'
    #[arg(long, default_value = "abort")]
    on_missing: String,

    /// Give up after this many search steps
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print a search summary and debug logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Load the dictionary based on the positional argument
///
/// - "sample": the embedded sample dictionary
/// - "<path>": one word per line from a file
fn load_words(dictionary: &str) -> Result<Vec<Word>> {
    match dictionary {
        "sample" => Ok(words_from_slice(SAMPLE_DICTIONARY)),
        path => load_dictionary(path).with_context(|| format!("Could not open file {path}")),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("word_ladder=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lines =
        read_lines(&cli.input).with_context(|| format!("Could not open file {}", cli.input))?;
    let query = SolveConfig::from_lines(&lines)
        .with_context(|| format!("Invalid query in {}", cli.input))?;

    let config = LadderConfig::new()
        .with_missing_word_policy(MissingWordPolicy::from_name(&cli.on_missing))
        .with_max_steps(cli.max_steps);
    let dictionary = load_words(&cli.dictionary)?.into_iter().collect();
    let solver = LadderSolver::with_dictionary(dictionary, config);

    let result = solve_query(&query, &solver)?;
    print_chain(result.report.chain());

    if cli.verbose {
        print_solve_summary(&result);
    }

    Ok(())
}

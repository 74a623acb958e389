//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;

use crate::commands::{explain, find, read_sentence};
use crate::core::render::{OutputFormat, RenderConfig};

/// highscore - find the word whose letters' character codes sum highest.
#[derive(Parser, Debug)]
#[command(name = "highscore")]
#[command(
    author,
    version,
    about,
    long_about = r#"highscore scores every word of a sentence by summing the code points of its
characters and prints the highest-scoring word.

The sentence is split on single spaces and the words are sorted before
scoring, so among equal scores the lexicographically smallest word wins.
The running best starts at ("a", 97); a word must score strictly more
to replace it.

Output formats:
- raw: the winning word only (default)
- jsonl: one JSON object per line
- json: a single JSON array
- md: human-friendly Markdown

Examples:
    highscore
    highscore find "man i need a taxi up to ubud"
    echo "what time are we climbing up the volcano" | highscore find
    highscore explain "ba ab" --format md
"#
)]
pub struct Cli {
    /// Output format (raw/jsonl/json/md).
    #[arg(
        long,
        global = true,
        env = "HIGHSCORE_FORMAT",
        default_value = "raw",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- raw (default)\n\
- jsonl\n\
- json\n\
- md (markdown)"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true, env = "HIGHSCORE_PRETTY")]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. Colors are only used by `explain` in raw format,\n\
and only when stdout is a terminal. NO_COLOR is honoured as well."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the highest-scoring word of a sentence.
    #[command(long_about = "Print the highest-scoring word of SENTENCE.\n\n\
If SENTENCE is omitted it is read from stdin; one trailing newline is dropped.\n\n\
Examples:\n\
  highscore find \"volcano climbing\"\n\
  printf 'b  c' | highscore find\n")]
    Find {
        /// Sentence to score (read from stdin when omitted).
        #[arg(value_name = "SENTENCE")]
        sentence: Option<String>,
    },

    /// Show every step of the fold, then the winner.
    #[command(long_about = "List the sorted words with their scores, marking the ones that\n\
replaced the running best, followed by the winning word.\n\n\
Examples:\n\
  highscore explain \"volcano climbing\"\n\
  highscore explain \"ba ab\" --format jsonl\n")]
    Explain {
        /// Sentence to score (read from stdin when omitted).
        #[arg(value_name = "SENTENCE")]
        sentence: Option<String>,
    },

    /// Score the built-in example "volcano climbing" (the default).
    Demo,
}

impl Cli {
    /// Log level selected by -q/-v; RUST_LOG still takes precedence
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse()?;

    if cli.no_color {
        colored::control::set_override(false);
    }
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let render_config = RenderConfig::new(format)
        .with_pretty(cli.pretty)
        .with_color(color);
    log::debug!("render config: {:?}", render_config);

    let stdout = std::io::stdout().lock();

    match cli.command {
        None | Some(Commands::Demo) => find::run_demo(render_config, stdout),

        Some(Commands::Find { sentence }) => {
            let sentence =
                read_sentence(sentence, std::io::stdin().lock()).context("Failed to read sentence")?;
            find::run_find(&sentence, render_config, stdout)
        }

        Some(Commands::Explain { sentence }) => {
            let sentence =
                read_sentence(sentence, std::io::stdin().lock()).context("Failed to read sentence")?;
            explain::run_explain(&sentence, render_config, stdout)
        }
    }
}

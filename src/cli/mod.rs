//! CLI command definitions and handlers

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;
use indicatif::ProgressBar;

pub mod args;
pub mod cache;
pub mod card;
pub mod context;
pub mod init;
pub mod search;
pub mod set;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Deckhand CLI - Scryfall companion for Magic: The Gathering card data
#[derive(Parser, Debug)]
#[command(name = "deckhand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "DECKHAND_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "DECKHAND_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Custom Scryfall API host for development/testing
    #[arg(long, global = true, env = "DECKHAND_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DECKHAND_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass cache, fetch fresh data from the API
    #[arg(long, global = true, env = "DECKHAND_NO_CACHE", hide_env = true)]
    pub no_cache: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize deckhand configuration
    Init,

    /// Show configuration and upstream health status
    Status,

    /// Display version information
    Version,

    /// Look up cards
    #[command(subcommand)]
    Card(CardCommands),

    /// Browse card sets
    #[command(subcommand)]
    Set(SetCommands),

    /// Search card names with Scryfall query syntax
    Search {
        /// Search query, e.g. `t:goblin cmc=1` (words are joined with spaces)
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Inspect the response cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   deckhand completion bash > /etc/bash_completion.d/deckhand
  zsh:    deckhand completion zsh > \"${fpath[1]}/_deckhand\"
  fish:   deckhand completion fish > ~/.config/fish/completions/deckhand.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Card lookup subcommands
#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// Resolve one or more card names (fuzzy matched, misses skipped)
    Get {
        /// Card names to resolve; quote multi-word names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Download the artwork for a card
    Image {
        /// Card name (fuzzy matched)
        name: String,

        /// Output file path (defaults to a name derived from the card)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Set browsing subcommands
#[derive(Subcommand, Debug)]
pub enum SetCommands {
    /// List the full set catalog
    List,

    /// List recent sets with a substantial card count
    Popular,

    /// List the card names printed in a set
    Cards {
        /// Set code, e.g. "khm"
        code: String,
    },
}

/// Cache inspection subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache configuration and live store statistics
    Stats,
}

/// Spinner for long-running fetches.
///
/// Draws to stderr, so piped stdout (tables, JSON) stays clean.
pub(crate) fn fetch_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

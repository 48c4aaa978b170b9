//! Deckhand CLI - Scryfall companion for Magic: The Gathering card data

use clap::{CommandFactory, Parser};

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{CacheCommands, CardCommands, Cli, Commands, GlobalOptions, SetCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the --debug default
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts).await,
        Commands::Version => {
            println!("deckhand version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Card(card_cmd) => match card_cmd {
            CardCommands::Get { names } => cli::card::get(&opts, &names).await,
            CardCommands::Image { name, output } => {
                cli::card::image(&opts, &name, output.as_deref()).await
            }
        },
        Commands::Set(set_cmd) => match set_cmd {
            SetCommands::List => cli::set::list(&opts).await,
            SetCommands::Popular => cli::set::popular(&opts).await,
            SetCommands::Cards { code } => cli::set::cards(&opts, &code).await,
        },
        Commands::Search { query } => cli::search::run(&opts, &query.join(" ")).await,
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Stats => cli::cache::stats(&opts),
        },
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "deckhand", &mut std::io::stdout());
            Ok(())
        }
    }
}

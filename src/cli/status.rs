//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::scryfall::API_BASE_URL;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and upstream health
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Deckhand Configuration Status".bold());

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            let config_path = Config::resolve_path(opts.config_ref())?;
            if config_path.exists() {
                println!("Config file: {}", config_path.display().to_string().cyan());
            } else {
                println!(
                    "Config file: {} {}",
                    config_path.display().to_string().cyan(),
                    "(not created yet, defaults in use)".dimmed()
                );
                println!("  → Run 'deckhand init' to create it");
            }

            println!();

            // API host status (only flag if custom)
            match &config.api_host {
                Some(host) => println!("{} Custom API host: {}", "○".dimmed(), host.cyan()),
                None => println!("{} API host: {}", "✓".green(), API_BASE_URL),
            }

            println!(
                "{} Request delay: {}ms",
                "✓".green(),
                config.request_delay_ms
            );

            if config.cache.cache_searches {
                println!("{} Search caching enabled", "✓".green());
            } else {
                println!("{} Search caching disabled", "○".dimmed());
            }

            println!(
                "{} Cache capacity: {} entries",
                "✓".green(),
                config.cache.max_entries
            );

            // Live upstream probe, never cached
            println!();
            let ctx = CommandContext::new(opts)?;
            match ctx.client.health().await {
                Ok(health) if health.is_healthy() => {
                    println!(
                        "{} Scryfall reachable (status: {})",
                        "✓".green(),
                        health.status
                    );
                }
                Ok(health) => {
                    println!(
                        "{} Scryfall degraded (status: {})",
                        "⚠".yellow(),
                        health.status
                    );
                }
                Err(err) => {
                    println!("{} Scryfall unreachable: {}", "✗".red(), err);
                }
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "deckhand init".cyan()
            );
            println!();
        }
    }

    Ok(())
}

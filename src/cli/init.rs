//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Writes a config file with default tuning. An existing file is only
/// replaced after an explicit confirmation.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to deckhand!".bold().green());
    println!("Let's set up your Scryfall configuration.\n");

    let config_path = Config::resolve_path(opts.config_ref())?;

    if config_path.exists() {
        let overwrite = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "A configuration already exists at {}. Overwrite it?",
                config_path.display()
            ))
            .default(false)
            .interact()?;

        if !overwrite {
            println!("\nKeeping the existing configuration.");
            return Ok(());
        }
    }

    let mut config = Config::default();

    // API host override, mostly useful for proxies and local mirrors
    let use_custom_host = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Use a custom Scryfall API host?")
        .default(false)
        .interact()?;

    if use_custom_host {
        let host: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("API host URL")
            .interact_text()?;
        config.api_host = Some(host);
    } else if let Some(host) = opts.api_host_ref() {
        config.api_host = Some(host.to_string());
    }

    let delay: u64 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Delay between Scryfall requests (milliseconds)")
        .default(config.request_delay_ms)
        .interact_text()?;
    config.request_delay_ms = delay;

    config.cache.cache_searches = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Cache search results?")
        .default(config.cache.cache_searches)
        .interact()?;

    config.save_at(opts.config_ref())?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!(
        "  {} - Show configuration status",
        "deckhand status".cyan()
    );
    println!(
        "  {} - Look up a card",
        "deckhand card get \"Lightning Bolt\"".cyan()
    );
    println!("  {} - Browse recent sets", "deckhand set popular".cyan());

    Ok(())
}

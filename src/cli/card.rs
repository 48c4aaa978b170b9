//! Card lookup commands

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::cache::format_size;
use crate::cli::{CommandContext, OutputFormat, fetch_spinner};
use crate::error::{Error, Result};
use crate::models::display::CardDisplay;
use crate::output::{format_json, format_table};

/// Resolve one or more fuzzy card names and print the matches.
///
/// Names that match nothing are skipped rather than failing the whole
/// lookup; a note on stderr reports how many were dropped.
pub async fn get(opts: &GlobalOptions, names: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = (names.len() > 1)
        .then(|| fetch_spinner(format!("Resolving {} card names...", names.len())));
    let resolved = ctx.client.resolve_cards(names).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let cards = resolved?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&cards)?),
        OutputFormat::Table => {
            let rows: Vec<CardDisplay> = cards.iter().map(CardDisplay::from).collect();
            println!("{}", format_table(&rows));

            let requested = names.iter().filter(|n| !n.trim().is_empty()).count();
            if cards.len() < requested {
                eprintln!(
                    "{}",
                    format!("{} of {} names did not match a card.", requested - cards.len(), requested)
                        .dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Fetch the artwork for a card and write it to a file.
pub async fn image(opts: &GlobalOptions, name: &str, output: Option<&Path>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let card = ctx
        .client
        .card_named(name)
        .await?
        .ok_or_else(|| Error::Other(format!("Card not found: {name}")))?;

    let spinner = fetch_spinner(format!("Fetching artwork for {}...", card.name));
    let fetched = ctx.client.card_image(&card).await;
    spinner.finish_and_clear();

    let image = fetched?
        .ok_or_else(|| Error::Other(format!("No artwork available for {}", card.name)))?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_file_name(&card.name, &image.content_type)),
    };

    fs::write(&path, &image.data)?;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "card": card.name,
                "path": path.display().to_string(),
                "content_type": image.content_type,
                "size_bytes": image.data.len(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => {
            println!(
                "{} Saved {} ({})",
                "✓".green(),
                path.display(),
                format_size(image.data.len())
            );
        }
    }

    Ok(())
}

/// Derive a file name from the card name and the reported MIME type.
fn default_file_name(card_name: &str, content_type: &str) -> String {
    let mut slug = String::new();
    for ch in card_name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "card" } else { slug };

    format!("{}.{}", slug, extension_for(content_type))
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/gif" => "gif",
        _ => "jpg",
    }
}

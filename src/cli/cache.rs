//! Cache inspection commands

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;

/// Show cache configuration and live store statistics.
///
/// The store lives inside one process, so a fresh invocation reports an
/// empty store; the configured TTLs and limits are the durable part.
pub fn stats(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let settings = &ctx.config.cache;

    match ctx.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "enabled": ctx.client.cache_enabled(),
                "max_entries": settings.max_entries,
                "cache_searches": settings.cache_searches,
                "ttl_secs": {
                    "card": settings.card_ttl_secs,
                    "image": settings.image_ttl_secs,
                    "set_cards": settings.set_cards_ttl_secs,
                    "set_catalog": settings.set_catalog_ttl_secs,
                    "popular": settings.popular_ttl_secs,
                    "search": settings.search_ttl_secs,
                },
                "store": ctx.client.cache_stats(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => {
            println!("Cache Status");
            println!("────────────────────────────────────────");
            println!(
                "Enabled:        {}",
                if ctx.client.cache_enabled() {
                    "yes"
                } else {
                    "no (--no-cache)"
                }
            );
            println!("Capacity:       {} entries", settings.max_entries);
            println!("Card TTL:       {}", format_ttl(settings.card_ttl_secs));
            println!("Image TTL:      {}", format_ttl(settings.image_ttl_secs));
            println!("Set cards TTL:  {}", format_ttl(settings.set_cards_ttl_secs));
            println!(
                "Catalog TTL:    {}",
                format_ttl(settings.set_catalog_ttl_secs)
            );
            println!("Popular TTL:    {}", format_ttl(settings.popular_ttl_secs));
            println!("Search TTL:     {}", format_ttl(settings.search_ttl_secs));
            println!(
                "Search caching: {}",
                if settings.cache_searches { "on" } else { "off" }
            );

            if let Some(stats) = ctx.client.cache_stats() {
                println!();
                println!(
                    "Entries:        {} ({} expired)",
                    stats.total_entries, stats.expired_entries
                );
                println!("Payload size:   {}", format_size(stats.total_size_bytes));
                if !stats.keys.is_empty() {
                    println!("Keys:");
                    for key in &stats.keys {
                        println!("  {key}");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Format bytes as human-readable size
pub(crate) fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Format a TTL in whole days/hours/minutes where it divides evenly
fn format_ttl(secs: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    if secs >= DAY && secs % DAY == 0 {
        format!("{}d", secs / DAY)
    } else if secs >= HOUR && secs % HOUR == 0 {
        format!("{}h", secs / HOUR)
    } else if secs >= MINUTE && secs % MINUTE == 0 {
        format!("{}m", secs / MINUTE)
    } else {
        format!("{secs}s")
    }
}

//! Set browsing commands

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, fetch_spinner};
use crate::client::CardSet;
use crate::error::Result;
use crate::models::display::{NameDisplay, SetDisplay};
use crate::output::{format_json, format_table};

/// List the full set catalog.
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sets = ctx.client.all_sets().await?;
    print_sets(&sets, ctx.format)
}

/// List recent sets with a substantial card count.
pub async fn popular(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sets = ctx.client.popular_sets().await?;
    print_sets(&sets, ctx.format)
}

/// List the card names printed in a set.
pub async fn cards(opts: &GlobalOptions, code: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = fetch_spinner(format!("Fetching cards in {code}..."));
    let fetched = ctx.client.set_card_names(code).await;
    spinner.finish_and_clear();
    let names = fetched?;

    print_names(&names, ctx.format)
}

fn print_sets(sets: &[CardSet], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(sets)?),
        OutputFormat::Table => {
            let rows: Vec<SetDisplay> = sets.iter().map(SetDisplay::from).collect();
            println!("{}", format_table(&rows));
        }
    }
    Ok(())
}

/// Print a plain card name listing. Shared with the search command.
pub(crate) fn print_names(names: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(names)?),
        OutputFormat::Table => {
            let rows: Vec<NameDisplay> = names
                .iter()
                .map(|name| NameDisplay::from(name.as_str()))
                .collect();
            println!("{}", format_table(&rows));
        }
    }
    Ok(())
}

//! Card search command

use crate::cli::args::GlobalOptions;
use crate::cli::set::print_names;
use crate::cli::{CommandContext, fetch_spinner};
use crate::error::Result;

/// Search card names with Scryfall query syntax.
pub async fn run(opts: &GlobalOptions, query: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = fetch_spinner(format!("Searching for \"{}\"...", query.trim()));
    let fetched = ctx.client.search_card_names(query).await;
    spinner.finish_and_clear();
    let names = fetched?;

    print_names(&names, ctx.format)
}

//! `pwdmanager view`: show one password or all of them in a table.

use crate::cli::output;
use crate::cli::{prompt_keyword, Context};
use crate::errors::{PwdManagerError, Result};
use crate::store::Selector;

/// Execute the `view` command.
pub fn execute(ctx: &Context, keyword: &str) -> Result<()> {
    let store = ctx.open_store()?;
    if store.is_empty() {
        output::nothing_saved();
        return Ok(());
    }

    let entries = store.select(&Selector::parse(keyword))?;
    output::print_entries_table(&entries);
    Ok(())
}

/// Menu entry: ask for a keyword (or `all`) and show the match.
pub fn interactive(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    if store.is_empty() {
        output::nothing_saved();
        return Ok(());
    }

    let input = prompt_keyword(
        "Enter the keyword for the password that you want to view (enter 'all' to view all the passwords)",
    )?;

    match store.select(&Selector::parse(&input)) {
        Ok(entries) => output::print_entries_table(&entries),
        Err(PwdManagerError::NotFound(_)) => output::keyword_not_found(),
        Err(e) => return Err(e),
    }
    Ok(())
}

//! `pwdmanager update`: replace the password of an existing keyword.

use crate::cli::output;
use crate::cli::{prompt_keyword, prompt_secret, read_secret_value, Context};
use crate::errors::{PwdManagerError, Result};
use crate::store::{normalize_key, SecretStore};

/// Execute the `update` command.
pub fn execute(ctx: &Context, keyword: &str, value: Option<&str>) -> Result<()> {
    let keyword = normalize_key(keyword);
    let mut store = ctx.open_store()?;
    if !store.contains_key(keyword) {
        return Err(PwdManagerError::NotFound(keyword.to_string()));
    }

    let secret = read_secret_value(&format!("Enter a new password for '{keyword}'"), value)?;
    apply(ctx, &mut store, keyword, &secret)
}

/// Menu entry: show everything, ask which keyword, ask for the new password.
pub fn interactive(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if store.is_empty() {
        output::nothing_saved();
        return Ok(());
    }

    output::print_entries_table(store.list());

    let keyword = prompt_keyword("Enter the keyword for the password that you want to update")?;
    if !store.contains_key(&keyword) {
        output::keyword_not_found();
        return Ok(());
    }

    let secret = prompt_secret(&format!(
        "Enter a new password for the keyword '{keyword}'"
    ))?;
    apply(ctx, &mut store, &keyword, &secret)
}

fn apply(ctx: &Context, store: &mut SecretStore, keyword: &str, secret: &str) -> Result<()> {
    let timestamp = ctx.timestamp()?;
    store.update(keyword, secret, &timestamp)?;
    store.save()?;

    output::success(&format!("Password for '{keyword}' updated successfully."));
    Ok(())
}

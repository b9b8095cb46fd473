//! `pwdmanager save`: store a new password under an unused keyword.

use crate::cli::output;
use crate::cli::{prompt_new_keyword, prompt_secret, read_secret_value, Context};
use crate::errors::Result;
use crate::store::{normalize_key, SecretStore};

/// Execute the `save` command.
pub fn execute(ctx: &Context, keyword: &str, value: Option<&str>) -> Result<()> {
    let keyword = normalize_key(keyword);

    // Reject a bad keyword before asking for the password.
    let mut store = ctx.open_store()?;
    store.check_new_key(keyword)?;

    let secret = read_secret_value(&format!("Enter the password for '{keyword}'"), value)?;

    store_new(ctx, &mut store, keyword, &secret)
}

/// Menu entry: ask for the password, then for a unique keyword.
pub fn interactive(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    let secret = prompt_secret("Enter the password that you want to save")?;
    let keyword = prompt_new_keyword(&store)?;

    store_new(ctx, &mut store, &keyword, &secret)
}

/// Insert a new entry, persist the store, and report.
pub(crate) fn store_new(
    ctx: &Context,
    store: &mut SecretStore,
    keyword: &str,
    secret: &str,
) -> Result<()> {
    let timestamp = ctx.timestamp()?;
    store.insert_new(keyword, secret, &timestamp)?;
    store.save()?;

    output::success(&format!(
        "Password saved successfully as '{keyword}' ({} total)",
        store.len()
    ));
    Ok(())
}

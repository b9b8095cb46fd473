//! `pwdmanager delete`: remove one password, or all of them.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_failed, prompt_keyword, Context};
use crate::errors::{PwdManagerError, Result};
use crate::store::{SecretStore, Selector};

/// Execute the `delete` command.
pub fn execute(ctx: &Context, keyword: &str, force: bool) -> Result<()> {
    let mut store = ctx.open_store()?;
    if store.is_empty() {
        output::nothing_saved();
        return Ok(());
    }

    let selector = Selector::parse(keyword);
    if let Selector::Specific(key) = &selector {
        if !store.contains_key(key) {
            return Err(PwdManagerError::NotFound(key.clone()));
        }
    }

    // Unless --force is set, ask for confirmation before deleting.
    if !force && !confirm(&selector)? {
        output::info("Cancelled.");
        return Ok(());
    }

    apply(&mut store, &selector)
}

/// Menu entry: show everything, then ask which keyword (or `all`) to delete.
pub fn interactive(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;
    if store.is_empty() {
        output::nothing_saved();
        return Ok(());
    }

    output::print_entries_table(store.list());

    let input = prompt_keyword(
        "Enter the keyword for the password that you want to delete (enter 'all' to delete all the passwords)",
    )?;
    let selector = Selector::parse(&input);

    match &selector {
        Selector::Specific(key) if !store.contains_key(key) => {
            output::keyword_not_found();
            return Ok(());
        }
        Selector::Everything => {
            if !confirm(&selector)? {
                output::info("Cancelled.");
                return Ok(());
            }
        }
        Selector::Specific(_) => {}
    }

    apply(&mut store, &selector)
}

fn confirm(selector: &Selector) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("Delete {selector}?"))
        .default(false)
        .interact()
        .map_err(prompt_failed)
}

fn apply(store: &mut SecretStore, selector: &Selector) -> Result<()> {
    let removed = store.remove(selector)?;
    store.save()?;

    match selector {
        Selector::Specific(key) => {
            output::success(&format!("Password '{key}' deleted successfully."));
        }
        Selector::Everything => {
            output::success(&format!("Passwords deleted successfully ({removed} removed)."));
        }
    }
    Ok(())
}

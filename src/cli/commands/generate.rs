//! `pwdmanager generate`: create a random password and optionally save it.

use dialoguer::Confirm;

use crate::cli::commands::save::store_new;
use crate::cli::output;
use crate::cli::{prompt_failed, prompt_length, prompt_new_keyword, Context};
use crate::errors::Result;
use crate::generator::{generate_password, validate_length};
use crate::store::normalize_key;

/// Execute the `generate` command.
///
/// Prints the bare password on stdout so it can be piped.
pub fn execute(ctx: &Context, length: Option<usize>, save_as: Option<&str>) -> Result<()> {
    let length = length.unwrap_or(ctx.settings.default_password_length);
    validate_length(length)?;
    let save_as = save_as.map(normalize_key);

    // Validate the keyword up front so a bad one doesn't waste a password.
    let mut store = match save_as {
        Some(keyword) => {
            let store = ctx.open_store()?;
            store.check_new_key(keyword)?;
            Some(store)
        }
        None => None,
    };

    let password = generate_password(length)?;
    println!("{password}");

    if let (Some(keyword), Some(store)) = (save_as, store.as_mut()) {
        store_new(ctx, store, keyword, &password)?;
    }

    Ok(())
}

/// Menu entry: ask for a length, show the password, offer to save it.
pub fn interactive(ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    let length = prompt_length(ctx.settings.default_password_length)?;
    let password = generate_password(length)?;
    output::success(&format!("The generated password is: {password}"));

    let wants_save = Confirm::new()
        .with_prompt("Do you want to save this password?")
        .default(false)
        .interact()
        .map_err(prompt_failed)?;

    if wants_save {
        let keyword = prompt_new_keyword(&store)?;
        store_new(ctx, &mut store, &keyword, &password)?;
    }

    Ok(())
}

//! Interactive menu: the default when no subcommand is given.
//!
//! Loops until the user picks "Quit".  Each pick is one complete
//! operation: the store is opened, changed and saved inside it.

use std::fmt;

use dialoguer::Input;

use crate::cli::commands::{delete, generate, save, update, view};
use crate::cli::output;
use crate::cli::{prompt_failed, Context};
use crate::errors::{PwdManagerError, Result};

/// One numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate,
    Save,
    Update,
    View,
    Delete,
    Quit,
}

impl MenuChoice {
    /// Entries in menu order; position + 1 is the number the user types.
    pub const ALL: [MenuChoice; 6] = [
        Self::Generate,
        Self::Save,
        Self::Update,
        Self::View,
        Self::Delete,
        Self::Quit,
    ];

    /// Parse a digit-only choice between 1 and 6.
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let n: usize = input.parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Generate => "Generate Password",
            Self::Save => "Save Password",
            Self::Update => "Update Password",
            Self::View => "View Password",
            Self::Delete => "Delete Password",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Render the menu text.
pub fn menu_text() -> String {
    let mut text = String::from("What do you want to do?\n\n");
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {choice}\n", i + 1));
    }
    text
}

/// Run the menu loop.
pub fn run(ctx: &Context) -> Result<()> {
    loop {
        println!("\n{}", menu_text());

        let choice = prompt_choice()?;
        tracing::debug!(%choice, "menu choice");

        let result = match choice {
            MenuChoice::Generate => generate::interactive(ctx),
            MenuChoice::Save => save::interactive(ctx),
            MenuChoice::Update => update::interactive(ctx),
            MenuChoice::View => view::interactive(ctx),
            MenuChoice::Delete => delete::interactive(ctx),
            MenuChoice::Quit => return Ok(()),
        };

        match result {
            Ok(()) => {}
            // The terminal is gone; looping would spin forever.
            Err(e @ PwdManagerError::PromptFailed(_)) => return Err(e),
            Err(e) => output::error(&e.to_string()),
        }
    }
}

fn prompt_choice() -> Result<MenuChoice> {
    let input: String = Input::new()
        .with_prompt("Enter your choice")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            MenuChoice::from_input(input)
                .map(|_| ())
                .ok_or("Please select from 1 to 6")
        })
        .interact_text()
        .map_err(prompt_failed)?;

    MenuChoice::from_input(&input)
        .ok_or_else(|| PwdManagerError::PromptFailed(format!("invalid menu choice '{input}'")))
}

//! CLI module: Clap argument parser, output helpers, prompts, and command implementations.

pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use dialoguer::{Input, Password};

use crate::clock;
use crate::config::{self, paths, Settings};
use crate::errors::{PwdManagerError, Result};
use crate::generator::{MAX_LENGTH, MIN_LENGTH};
use crate::store::{OpenStatus, SecretStore};

/// pwdmanager CLI: local password manager.
///
/// Run without a subcommand for the interactive menu.
#[derive(Parser)]
#[command(
    name = "pwdmanager",
    about = "Local password manager: generate, save, update, view and delete passwords",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the password database (default: <home>/passwords.db)
    #[arg(long, env = "PWDMANAGER_DB", global = true)]
    pub db: Option<PathBuf>,

    /// Directory holding pwdmanager.toml and the database (default: platform data dir)
    #[arg(long, env = "PWDMANAGER_HOME", global = true)]
    pub home: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Generate a random password
    Generate {
        /// Password length (8 to 32, default from config)
        #[arg(short, long)]
        length: Option<usize>,

        /// Save the generated password under this keyword
        #[arg(short, long)]
        save: Option<String>,
    },

    /// Save a new password
    Save {
        /// Unique keyword to identify the password (e.g. github)
        keyword: String,
        /// Password (omit for interactive prompt)
        value: Option<String>,
    },

    /// Replace an existing password
    Update {
        /// Keyword of the password to update
        keyword: String,
        /// New password (omit for interactive prompt)
        value: Option<String>,
    },

    /// Show one password, or `all`
    View {
        /// Keyword to show, or `all`
        keyword: String,
    },

    /// Delete one password, or `all`
    Delete {
        /// Keyword to delete, or `all`
        keyword: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Per-run context
// ---------------------------------------------------------------------------

/// Everything a command needs: the resolved database path and settings.
///
/// Commands receive this explicitly; there is no global state.
pub struct Context {
    pub db_path: PathBuf,
    pub settings: Settings,
}

impl Context {
    /// Resolve the application directory, settings and database path.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let app_dir = match cli.home.clone().or_else(config::default_app_dir) {
            Some(dir) => match paths::ensure_dir(&dir) {
                Ok(()) => Some(dir),
                Err(e) => {
                    tracing::warn!(error = %e, "application directory unavailable");
                    None
                }
            },
            None => None,
        };

        let settings = match &app_dir {
            Some(dir) => Settings::load(dir)?,
            None => Settings::default(),
        };

        let location = config::resolve_db_path(cli.db.as_deref(), &settings, app_dir.as_deref());
        if location.in_working_dir {
            tracing::warn!(path = %location.path.display(), "no application directory, using working directory");
            output::warning(&format!(
                "Storing passwords in {}. If you move this program, carry that file along or your saved passwords will be lost.",
                location.path.display()
            ));
        }

        Ok(Self {
            db_path: location.path,
            settings,
        })
    }

    /// Open the database, telling the user if it was created or reset.
    pub fn open_store(&self) -> Result<SecretStore> {
        let (store, status) = SecretStore::open(&self.db_path)?;
        match status {
            OpenStatus::Loaded => {}
            OpenStatus::Initialized => output::info(&format!(
                "Created a new password database at {}",
                store.path().display()
            )),
            OpenStatus::Recovered => output::warning(
                "The password database could not be read and has been reset to empty.",
            ),
        }
        Ok(store)
    }

    /// A "Last Updated" timestamp for right now.
    pub fn timestamp(&self) -> Result<String> {
        Ok(clock::timestamp_now(self.settings.utc_offset()?))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get a password value, trying in order:
/// 1. The value passed on the command line
/// 2. Piped stdin (when stdin is not a terminal)
/// 3. Hidden interactive prompt
pub fn read_secret_value(prompt: &str, value: Option<&str>) -> Result<String> {
    if let Some(v) = value {
        output::warning("Password provided on command line; it may appear in shell history.");
        return Ok(v.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim_end_matches(['\r', '\n']).to_string();
        if trimmed.is_empty() {
            return Err(PwdManagerError::CommandFailed(
                "no password received on stdin".into(),
            ));
        }
        return Ok(trimmed);
    }

    prompt_secret(prompt)
}

/// Hidden prompt for a password.
pub fn prompt_secret(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(prompt_failed)
}

/// Plain text prompt for a keyword.
pub fn prompt_keyword(prompt: &str) -> Result<String> {
    let keyword: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(prompt_failed)?;
    Ok(keyword.trim().to_string())
}

/// Prompt for a keyword that is not yet in `store`, re-asking until the
/// user picks one that is neither reserved nor taken.
pub fn prompt_new_keyword(store: &SecretStore) -> Result<String> {
    let keyword: String = Input::new()
        .with_prompt("Enter a unique keyword with which you can identify your password later")
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            store.check_new_key(input.trim()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(prompt_failed)?;
    Ok(keyword.trim().to_string())
}

/// Prompt for a password length within the generator's bounds.
pub fn prompt_length(default: usize) -> Result<usize> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Enter the length of the password that you want to create (a whole number between {MIN_LENGTH} and {MAX_LENGTH})"
        ))
        .default(default.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_length(input).map(|_| ())
        })
        .interact_text()
        .map_err(prompt_failed)?;

    parse_length(&input).map_err(PwdManagerError::CommandFailed)
}

/// Parse a digit-only password length within bounds.
pub fn parse_length(input: &str) -> std::result::Result<usize, String> {
    let input = input.trim();
    let message = || {
        format!(
            "The length of the password must be a whole number between {MIN_LENGTH} and {MAX_LENGTH}"
        )
    };
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(message());
    }
    match input.parse::<usize>() {
        Ok(n) if (MIN_LENGTH..=MAX_LENGTH).contains(&n) => Ok(n),
        _ => Err(message()),
    }
}

pub(crate) fn prompt_failed(e: dialoguer::Error) -> PwdManagerError {
    PwdManagerError::PromptFailed(e.to_string())
}

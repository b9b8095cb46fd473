//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use console::style;

use crate::store::SecretEntry;
use crate::table;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the passwords table (Serial No., Keyword, Secret, Last Updated).
pub fn print_entries_table(entries: &[SecretEntry]) {
    print!("{}", table::render_entries(entries));
}

/// Message shown whenever an operation needs entries and there are none.
pub fn nothing_saved() {
    info("No password has been saved.");
    tip("Run `pwdmanager save <KEYWORD>` or pick \"Save Password\" from the menu.");
}

/// Message shown when a keyword does not match any entry.
pub fn keyword_not_found() {
    info("No password has been saved with this keyword.");
}

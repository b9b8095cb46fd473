//! One module per command.  Each exposes `execute` for the subcommand
//! and, where the menu offers it, `interactive` for the menu entry.

pub mod completions;
pub mod delete;
pub mod generate;
pub mod menu;
pub mod save;
pub mod update;
pub mod view;

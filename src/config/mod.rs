//! Configuration: settings file and storage location.

pub mod paths;
pub mod settings;

pub use paths::{default_app_dir, resolve_db_path, DbLocation};
pub use settings::Settings;

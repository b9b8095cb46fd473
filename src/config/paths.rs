//! Where the database and config file live.
//!
//! The application directory is the platform data directory
//! (`~/.local/share/pwdmanager` on Linux, `~/Library/Application Support/pwdmanager`
//! on macOS, `%APPDATA%\pwdmanager\data` on Windows).  When none can be
//! determined, the database goes into the current working directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::Settings;
use crate::errors::{PwdManagerError, Result};

pub const APP_NAME: &str = "pwdmanager";

/// The platform data directory for pwdmanager, if the OS has one.
pub fn default_app_dir() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME)?;
    Some(dirs.data_dir().to_path_buf())
}

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| PwdManagerError::storage(dir, e))
}

/// A resolved database location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbLocation {
    pub path: PathBuf,
    /// `true` when no application directory was available and the file
    /// sits in the working directory instead.
    pub in_working_dir: bool,
}

/// Resolve the database path.
///
/// Order: explicit path (`--db` / `PWDMANAGER_DB`), `db_path` from the
/// settings, `<app_dir>/<db_file_name>`, then `<cwd>/<db_file_name>`.
pub fn resolve_db_path(
    explicit: Option<&Path>,
    settings: &Settings,
    app_dir: Option<&Path>,
) -> DbLocation {
    if let Some(path) = explicit {
        return DbLocation {
            path: path.to_path_buf(),
            in_working_dir: false,
        };
    }

    match (&settings.db_path, app_dir) {
        (Some(path), _) => DbLocation {
            path: path.clone(),
            in_working_dir: false,
        },
        (None, Some(dir)) => DbLocation {
            path: settings.db_path_in(dir),
            in_working_dir: false,
        },
        (None, None) => {
            let name = &settings.db_file_name;
            let path = std::env::current_dir()
                .map(|cwd| cwd.join(name))
                .unwrap_or_else(|_| PathBuf::from(name));
            DbLocation {
                path,
                in_working_dir: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let settings = Settings {
            db_path: Some(PathBuf::from("/from/settings.db")),
            ..Settings::default()
        };
        let loc = resolve_db_path(
            Some(Path::new("/explicit.db")),
            &settings,
            Some(Path::new("/app")),
        );
        assert_eq!(loc.path, PathBuf::from("/explicit.db"));
        assert!(!loc.in_working_dir);
    }

    #[test]
    fn settings_path_beats_app_dir() {
        let settings = Settings {
            db_path: Some(PathBuf::from("/from/settings.db")),
            ..Settings::default()
        };
        let loc = resolve_db_path(None, &settings, Some(Path::new("/app")));
        assert_eq!(loc.path, PathBuf::from("/from/settings.db"));
    }

    #[test]
    fn app_dir_used_by_default() {
        let loc = resolve_db_path(None, &Settings::default(), Some(Path::new("/app")));
        assert_eq!(loc.path, PathBuf::from("/app/passwords.db"));
        assert!(!loc.in_working_dir);
    }

    #[test]
    fn falls_back_to_working_dir() {
        let loc = resolve_db_path(None, &Settings::default(), None);
        assert!(loc.in_working_dir);
        assert!(loc.path.ends_with("passwords.db"));
    }

    #[test]
    fn ensure_dir_creates_nested_dirs() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}

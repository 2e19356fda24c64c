// src/infra/paths.rs — Config file location
//
// COOPFOLD_HOME overrides everything; otherwise config lives in ~/.coopfold/.

use std::path::PathBuf;

/// Returns the COOPFOLD_HOME override, if set.
fn coopfold_home() -> Option<PathBuf> {
    std::env::var_os("COOPFOLD_HOME").map(PathBuf::from)
}

/// Configuration directory: $COOPFOLD_HOME/ or ~/.coopfold/
///
/// `None` only when neither the override nor a home directory is available.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = coopfold_home() {
        return Some(home);
    }
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".coopfold"))
}

/// Config file path
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

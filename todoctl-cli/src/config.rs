//! Environment configuration loading

use std::path::{Path, PathBuf};

/// Get the todoctl config directory path (~/.todoctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".todoctl"))
}

/// Load environment variables from .env files.
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.todoctl/.env
///
/// dotenvy never overwrites a variable that is already set, so the first
/// file loaded wins over later ones. Runs before tracing is installed;
/// returns the files that were loaded so the caller can log them.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(dir) = config_dir() {
        if let Some(path) = load_env_file(&dir.join(".env")) {
            loaded_from.push(path);
        }
    }

    loaded_from
}

fn load_env_file(path: &Path) -> Option<PathBuf> {
    if !path.exists() {
        return None;
    }
    dotenvy::from_path(path).ok().map(|_| path.to_path_buf())
}

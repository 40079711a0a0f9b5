//! Path utilities: expand ~, resolve output paths relative to the cwd.

use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute path for `path`; relative paths are taken from the working dir.
pub fn absolutize(path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() {
        return p;
    }
    env::current_dir().map(|cwd| cwd.join(&p)).unwrap_or(p)
}

//! Path utilities: expand ~, validate absolute paths, etc.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }

    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }

    PathBuf::from(path)
}

pub fn is_absolute(path: &str) -> bool {
    Path::new(path).is_absolute()
}

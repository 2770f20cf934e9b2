//! Path helpers for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Returns the directory the pane writes its log file to.
///
/// Inside the sandbox `/host` is the directory Zellij was started from,
/// usually the home directory, so this is normally
/// `~/.local/share/zellij/nodelist`.
///
/// ```
/// use nodelist::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/nodelist"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("nodelist")
}

/// Maps `~` to the sandbox's `/host` mount.
///
/// ```
/// use nodelist::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

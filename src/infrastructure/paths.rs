//! Path helpers for configuration and log locations.
//!
//! Handles tilde expansion against `$HOME` and the XDG config location used when
//! no explicit config file is given.

use std::env;
use std::path::PathBuf;

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without a leading tilde, and all paths when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use swipedeck::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/var/log/deck.log"), PathBuf::from("/var/log/deck.log"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = env::var_os("HOME").map(PathBuf::from);
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Default config file: `$XDG_CONFIG_HOME/swipedeck/config.toml`, falling back to
/// `~/.config/swipedeck/config.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map_or_else(|| expand_tilde("~/.config"), PathBuf::from)
        .join("swipedeck")
        .join("config.toml")
}

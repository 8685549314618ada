pub mod schema;
pub mod watcher;

pub use schema::{PulseConfig, ThemeConfig, WindowConfig};
pub use watcher::ConfigWatcher;

use pulse_core::{PulseError, Result};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "system-pulse";
const FILE_NAME: &str = "pulse.toml";

/// Read presentation settings from `path`.
///
/// The file is optional: a missing file yields [`PulseConfig::default`].
/// Any other read failure, or malformed TOML, is a [`PulseError::Config`].
pub fn load(path: impl AsRef<Path>) -> Result<PulseConfig> {
    let path = path.as_ref();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("no config at {}; built-in look", path.display());
            return Ok(PulseConfig::default());
        }
        Err(e) => {
            return Err(PulseError::Config(format!("{}: {e}", path.display())));
        }
    };

    toml::from_str::<PulseConfig>(&raw)
        .map_err(|e| PulseError::Config(format!("{}: {e}", path.display())))
}

/// `$XDG_CONFIG_HOME/system-pulse/pulse.toml`, or under `~/.config` when the
/// variable is unset or empty.
pub fn default_path() -> PathBuf {
    config_home(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
    .join(APP_DIR)
    .join(FILE_NAME)
}

fn config_home(xdg: Option<OsString>, home: Option<OsString>) -> PathBuf {
    match xdg.filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home.map_or_else(|| PathBuf::from("."), PathBuf::from).join(".config"),
    }
}

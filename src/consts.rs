//! Project-wide constants.

use std::path::{Path, PathBuf};

/// TextGears grammar endpoint.
pub const API_URL: &str = "https://api.textgears.com/grammar";

/// Language sent with every grammar check.
pub const LANGUAGE: &str = "en-GB";

/// Environment variable holding the TextGears API key.
pub const API_KEY_ENV: &str = "TEXT_GEARS_API_KEY";

/// Environment variable overriding [`API_URL`].
pub const API_URL_ENV: &str = "TEXT_GEARS_API_URL";

/// Directory name under `~/.config`.
pub const APP_DIR: &str = "spellbee";

/// Cache database file name.
pub const DB_FILE: &str = "cache.db";

/// Default cache path: `<home>/.config/spellbee/cache.db`.
pub fn default_db_path(home: &Path) -> PathBuf {
    home.join(".config").join(APP_DIR).join(DB_FILE)
}

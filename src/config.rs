//! Game and application configuration

use std::path::PathBuf;

/// Default number of guesses allowed per round
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Directory name used under the platform data directory
pub const APP_DIR_NAME: &str = "ens-wordle";

/// Rules for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_guesses: usize) -> Self {
        Self { max_guesses }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES)
    }
}

/// Resolve the directory that holds saved games and statistics
///
/// An explicit directory wins; otherwise `<platform data dir>/ens-wordle`.
/// Returns `None` when the platform has no data directory, in which case the
/// game runs without persistence.
#[must_use]
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME)))
}

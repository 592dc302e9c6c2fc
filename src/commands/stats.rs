//! Statistics and reset commands

use crate::stats::GameStatistics;
use crate::storage::{KeyValueStore, Persistence};

/// What a reset removed
pub struct ResetResult {
    /// Storage was reachable
    pub persistent: bool,
    pub cleared_stats: bool,
}

/// Saved statistics, or zeros if there are none
pub fn load_statistics<S: KeyValueStore>(persistence: &mut Persistence<S>) -> GameStatistics {
    persistence.load_stats().unwrap_or_default()
}

/// Clear the saved round, and the statistics too if `include_stats` is set
pub fn reset_progress<S: KeyValueStore>(
    persistence: &mut Persistence<S>,
    include_stats: bool,
) -> ResetResult {
    if !persistence.is_available() {
        return ResetResult {
            persistent: false,
            cleared_stats: false,
        };
    }

    persistence.clear_state();
    if include_stats {
        persistence.clear_stats();
    }

    ResetResult {
        persistent: true,
        cleared_stats: include_stats,
    }
}

//! Active round plus statistics, written through to storage
//!
//! The session is the single owner of the current `GameState`. Every accepted
//! guess replaces the state wholesale, records statistics on the transition
//! into a terminal status, and saves both records.

use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{GameState, GuessError, Timestamp};
use crate::stats::GameStatistics;
use crate::storage::{KeyValueStore, Persistence};
use tracing::{debug, info};

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The guess finished the round
    pub finished: bool,
    /// Both records reached storage
    pub saved: bool,
}

/// A player's session: current round, statistics, and their storage
pub struct Session<S: KeyValueStore> {
    persistence: Persistence<S>,
    state: GameState,
    stats: GameStatistics,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session, resuming a saved round if one is still in progress
    ///
    /// Saved rounds that already finished are not resumed; a new round on
    /// `fallback_target` starts instead. Missing or corrupt statistics start
    /// from zero.
    pub fn open(mut persistence: Persistence<S>, fallback_target: &Word, now: Timestamp) -> Self {
        let stats = persistence.load_stats().unwrap_or_default();

        let state = match persistence.load_state() {
            Some(saved) if !saved.is_terminal() => {
                info!(guesses = saved.guess_index(), "resuming saved round");
                saved
            }
            _ => GameState::start_round(fallback_target, now),
        };

        let mut session = Self {
            persistence,
            state,
            stats,
        };
        session.persist_state();
        session
    }

    /// Submit a guess
    ///
    /// # Errors
    /// Returns `GuessError` if the guess is rejected; the session is unchanged.
    pub fn make_guess(&mut self, raw_word: &str, now: Timestamp) -> Result<GuessOutcome, GuessError> {
        let config = *self.persistence.config();
        let next = self.state.apply_guess_with(&config, raw_word, now)?;

        // Only the playing -> terminal edge is recorded
        let finished = !self.state.is_terminal() && next.is_terminal();
        if finished && let Some(stats) = self.stats.record_round(&next) {
            self.stats = stats;
        }
        self.state = next;

        let saved_state = self.persist_state();
        let saved_stats = !finished || self.persistence.save_stats(&self.stats);
        debug!(finished, saved_state, saved_stats, "guess applied");

        Ok(GuessOutcome {
            finished,
            saved: saved_state && saved_stats,
        })
    }

    /// Discard the current round and start one on `target`
    pub fn start_new_game(&mut self, target: &Word, now: Timestamp) {
        self.persistence.clear_state();
        self.state = GameState::start_round(target, now);
        self.persist_state();
    }

    /// Start the current target over from scratch
    pub fn reset_game(&mut self, now: Timestamp) {
        self.state = self.state.restart(now);
        self.persist_state();
    }

    /// Whether a guess would pass format validation
    #[must_use]
    pub fn is_valid_guess_format(&self, raw_word: &str) -> bool {
        self.state.is_valid_guess_format(raw_word)
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStatistics {
        &self.stats
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        self.persistence.config()
    }

    /// Whether progress is being saved
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistence.is_available()
    }

    /// Storage the session writes through
    #[must_use]
    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    fn persist_state(&mut self) -> bool {
        self.persistence.save_state(&self.state)
    }
}

//! Validating persistence gateway
//!
//! Reads go through three checks before a value is handed back:
//! 1. The document is UTF-8 and parses as a JSON object
//! 2. Every required field is present and has the right type
//! 3. The value's own invariants hold
//!
//! A record failing any check is cleared and reported as absent.

use super::{KeyValueStore, StoreError};
use crate::config::GameConfig;
use crate::game::GameState;
use crate::stats::GameStatistics;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Key of the in-progress round
pub const GAME_STATE_KEY: &str = "ens-wordle-game-state";

/// Key of the long-run statistics
pub const GAME_STATS_KEY: &str = "ens-wordle-stats";

/// Why a load or save did not go through
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("corrupt persisted state: {0}")]
    CorruptPersistedState(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A value that can be written through the gateway
pub trait Persisted: Serialize + DeserializeOwned {
    /// Top-level fields that must be present in a stored document
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Invariants beyond the field types
    ///
    /// # Errors
    /// Returns a description of the first violated invariant.
    fn check(&self, config: &GameConfig) -> Result<(), String>;
}

impl Persisted for GameState {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "targetWord",
        "targetLength",
        "guesses",
        "guessIndex",
        "status",
        "letterKnowledge",
        "startedAt",
    ];

    fn check(&self, config: &GameConfig) -> Result<(), String> {
        self.validate(config)
    }
}

impl Persisted for GameStatistics {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "gamesPlayed",
        "gamesWon",
        "currentStreak",
        "maxStreak",
        "guessDistribution",
    ];

    fn check(&self, config: &GameConfig) -> Result<(), String> {
        self.validate(config)
    }
}

/// Best-effort JSON persistence over a [`KeyValueStore`]
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    config: GameConfig,
}

impl<S: KeyValueStore> Persistence<S> {
    /// `config` supplies the rules stored rounds are validated against
    pub const fn new(store: S, config: GameConfig) -> Self {
        Self { store, config }
    }

    /// Whether writes can currently succeed
    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }

    /// The underlying backend
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Serialize and write `value` under `key`
    ///
    /// Returns `false` on any failure; failures are logged, never raised.
    pub fn save<T: Persisted>(&mut self, key: &str, value: &T) -> bool {
        if !self.store.is_available() {
            warn!(key, "storage unavailable, progress will not be saved");
            return false;
        }

        match self.try_save(key, value) {
            Ok(()) => {
                debug!(key, "saved");
                true
            }
            Err(e) => {
                error!(key, error = %e, "failed to save");
                false
            }
        }
    }

    /// Read and validate the value under `key`
    ///
    /// Returns `None` when nothing is stored, the store is unavailable, or the
    /// record is corrupt. Corrupt records are removed before returning.
    pub fn load<T: Persisted>(&mut self, key: &str) -> Option<T> {
        match self.try_load(key) {
            Ok(value) => value,
            Err(PersistError::CorruptPersistedState(reason)) => {
                warn!(key, %reason, "discarding corrupt saved data");
                self.clear(key);
                None
            }
            Err(e) => {
                warn!(key, error = %e, "failed to load");
                None
            }
        }
    }

    /// Remove the record under `key`, ignoring failures
    pub fn clear(&mut self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(key, error = %e, "failed to clear");
        }
    }

    pub fn save_state(&mut self, state: &GameState) -> bool {
        self.save(GAME_STATE_KEY, state)
    }

    pub fn load_state(&mut self) -> Option<GameState> {
        self.load(GAME_STATE_KEY)
    }

    pub fn clear_state(&mut self) {
        self.clear(GAME_STATE_KEY);
    }

    pub fn save_stats(&mut self, stats: &GameStatistics) -> bool {
        self.save(GAME_STATS_KEY, stats)
    }

    pub fn load_stats(&mut self) -> Option<GameStatistics> {
        self.load(GAME_STATS_KEY)
    }

    pub fn clear_stats(&mut self) {
        self.clear(GAME_STATS_KEY);
    }

    fn try_save<T: Persisted>(&mut self, key: &str, value: &T) -> Result<(), PersistError> {
        let serialized = serde_json::to_string(value)?;
        self.store.set(key, &serialized)?;
        Ok(())
    }

    fn try_load<T: Persisted>(&self, key: &str) -> Result<Option<T>, PersistError> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(PersistError::CorruptPersistedState(format!(
                    "not UTF-8: {e}"
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let document: Value = serde_json::from_str(&raw)
            .map_err(|e| PersistError::CorruptPersistedState(format!("not JSON: {e}")))?;

        let Some(object) = document.as_object() else {
            return Err(PersistError::CorruptPersistedState(
                "not a JSON object".to_string(),
            ));
        };

        if let Some(missing) = T::REQUIRED_FIELDS
            .iter()
            .find(|&&field| !object.contains_key(field))
        {
            return Err(PersistError::CorruptPersistedState(format!(
                "missing required field: {missing}"
            )));
        }

        let value: T = serde_json::from_value(document)
            .map_err(|e| PersistError::CorruptPersistedState(format!("invalid data types: {e}")))?;

        value
            .check(&self.config)
            .map_err(PersistError::CorruptPersistedState)?;

        Ok(Some(value))
    }
}

//! Long-run play statistics
//!
//! Statistics are folded once per finished round. Recording the same round
//! twice, or a round that is still playing, double counts; `record_round`
//! refuses the latter but the caller owns the "once" part.

use crate::config::GameConfig;
use crate::game::{GameState, GameStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregate results across all rounds played
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Winning guess count -> number of wins with that count
    pub guess_distribution: BTreeMap<u32, u32>,
}

impl GameStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished round into the statistics
    ///
    /// A win bumps the streak and the distribution bucket for `guess_count`;
    /// a loss only resets the current streak.
    #[must_use]
    pub fn record_outcome(&self, won: bool, guess_count: u32) -> Self {
        let mut next = self.clone();
        next.games_played += 1;

        if won {
            next.games_won += 1;
            next.current_streak += 1;
            next.max_streak = next.max_streak.max(next.current_streak);
            *next.guess_distribution.entry(guess_count).or_insert(0) += 1;
        } else {
            next.current_streak = 0;
        }

        debug!(
            won,
            guess_count,
            games_played = next.games_played,
            current_streak = next.current_streak,
            "recorded outcome"
        );

        next
    }

    /// Record a finished round; `None` while it is still playing
    #[must_use]
    pub fn record_round(&self, state: &GameState) -> Option<Self> {
        match state.status() {
            GameStatus::Playing => None,
            status => Some(self.record_outcome(
                status == GameStatus::Won,
                state.guess_index() as u32,
            )),
        }
    }

    #[must_use]
    pub const fn games_lost(&self) -> u32 {
        self.games_played.saturating_sub(self.games_won)
    }

    /// Win rate as a whole percentage, 0 before any games
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            0
        } else {
            (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32
        }
    }

    /// Wins recorded for `guess_count`
    #[must_use]
    pub fn wins_in(&self, guess_count: u32) -> u32 {
        self.guess_distribution
            .get(&guess_count)
            .copied()
            .unwrap_or(0)
    }

    /// Check the aggregate invariants of statistics that came from outside
    ///
    /// # Errors
    /// Returns a description of the first violated invariant.
    pub fn validate(&self, config: &GameConfig) -> Result<(), String> {
        if self.games_won > self.games_played {
            return Err(format!(
                "gamesWon {} exceeds gamesPlayed {}",
                self.games_won, self.games_played
            ));
        }
        if self.current_streak > self.max_streak {
            return Err(format!(
                "currentStreak {} exceeds maxStreak {}",
                self.current_streak, self.max_streak
            ));
        }
        if self.max_streak > self.games_won {
            return Err(format!(
                "maxStreak {} exceeds gamesWon {}",
                self.max_streak, self.games_won
            ));
        }
        if let Some(&bucket) = self
            .guess_distribution
            .keys()
            .find(|&&bucket| bucket == 0 || bucket as usize > config.max_guesses)
        {
            return Err(format!(
                "guessDistribution bucket {bucket} is outside 1..={}",
                config.max_guesses
            ));
        }
        let distributed: u32 = self.guess_distribution.values().sum();
        if distributed > self.games_won {
            return Err(format!(
                "guessDistribution totals {distributed} but gamesWon is {}",
                self.games_won
            ));
        }
        Ok(())
    }
}

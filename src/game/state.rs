//! Round state and the guess state machine
//!
//! A `GameState` is never mutated in place. `apply_guess` returns a new state
//! that the caller swaps in, so anything holding the old value keeps seeing a
//! consistent snapshot.
//!
//! ```text
//! Playing ──guess──▶ Playing
//!    │
//!    ├──all correct──▶ Won   (terminal)
//!    └──last guess───▶ Lost  (terminal)
//! ```

use super::error::GuessError;
use crate::config::GameConfig;
use crate::core::{LetterFeedback, LetterKnowledge, Word, is_all_correct, score};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost; no further guesses are accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    word: String,
    feedback: Vec<LetterFeedback>,
}

impl Guess {
    /// Lowercased guess text
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// One entry per letter of `word`
    #[must_use]
    pub fn feedback(&self) -> &[LetterFeedback] {
        &self.feedback
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        is_all_correct(&self.feedback)
    }
}

/// Authoritative state of one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    target_word: String,
    target_length: usize,
    guesses: Vec<Guess>,
    guess_index: usize,
    status: GameStatus,
    letter_knowledge: LetterKnowledge,
    started_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ended_at: Option<Timestamp>,
}

impl GameState {
    /// Start a fresh round on `target`
    #[must_use]
    pub fn start_round(target: &Word, now: Timestamp) -> Self {
        debug!(target_length = target.len(), "starting round");

        Self {
            target_word: target.text().to_string(),
            target_length: target.len(),
            guesses: Vec::new(),
            guess_index: 0,
            status: GameStatus::Playing,
            letter_knowledge: LetterKnowledge::new(),
            started_at: now,
            ended_at: None,
        }
    }

    /// Start over on the same target
    #[must_use]
    pub fn restart(&self, now: Timestamp) -> Self {
        Self {
            target_word: self.target_word.clone(),
            target_length: self.target_length,
            guesses: Vec::new(),
            guess_index: 0,
            status: GameStatus::Playing,
            letter_knowledge: LetterKnowledge::new(),
            started_at: now,
            ended_at: None,
        }
    }

    /// Apply a guess under the default rules (six guesses)
    ///
    /// # Errors
    /// See [`GameState::apply_guess_with`].
    pub fn apply_guess(&self, raw_word: &str, now: Timestamp) -> Result<Self, GuessError> {
        self.apply_guess_with(&GameConfig::default(), raw_word, now)
    }

    /// Score `raw_word` against the target and return the resulting state
    ///
    /// Checks run in order: length, characters, then status. Whitespace is
    /// never trimmed; a leading or trailing space is an invalid character.
    /// A winning guess is `Won` even on the last allowed attempt.
    ///
    /// # Errors
    /// - `WrongLength` if the guess length differs from the target length
    /// - `InvalidCharacters` if the guess contains anything but ASCII letters
    /// - `GameAlreadyOver` if the round is already won or lost
    ///
    /// # Examples
    /// ```
    /// use ens_wordle::core::Word;
    /// use ens_wordle::game::{GameState, GameStatus};
    ///
    /// let state = GameState::start_round(&Word::new("nick").unwrap(), 0);
    /// let state = state.apply_guess("NICK", 1_000).unwrap();
    /// assert_eq!(state.status(), GameStatus::Won);
    /// assert_eq!(state.ended_at(), Some(1_000));
    /// ```
    pub fn apply_guess_with(
        &self,
        config: &GameConfig,
        raw_word: &str,
        now: Timestamp,
    ) -> Result<Self, GuessError> {
        self.check_guess_format(raw_word)?;

        if self.status.is_terminal() {
            return Err(GuessError::GameAlreadyOver);
        }

        let word = raw_word.to_ascii_lowercase();
        let feedback = score(&word, &self.target_word).map_err(|e| GuessError::WrongLength {
            expected: e.target,
            actual: e.guess,
        })?;

        let letter_knowledge = self.letter_knowledge.merge(&word, &feedback);
        let won = is_all_correct(&feedback);

        let mut guesses = self.guesses.clone();
        guesses.push(Guess { word, feedback });
        let guess_index = self.guess_index + 1;

        // Win is checked first so a correct final guess is never a loss
        let status = if won {
            GameStatus::Won
        } else if guess_index >= config.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };

        let ended_at = if status.is_terminal() {
            debug!(?status, guesses = guess_index, "round finished");
            Some(now)
        } else {
            None
        };

        Ok(Self {
            target_word: self.target_word.clone(),
            target_length: self.target_length,
            guesses,
            guess_index,
            status,
            letter_knowledge,
            started_at: self.started_at,
            ended_at,
        })
    }

    /// Whether `raw_word` would pass the format checks of `apply_guess`
    #[must_use]
    pub fn is_valid_guess_format(&self, raw_word: &str) -> bool {
        self.check_guess_format(raw_word).is_ok()
    }

    fn check_guess_format(&self, raw_word: &str) -> Result<(), GuessError> {
        let actual = raw_word.chars().count();
        if actual != self.target_length {
            return Err(GuessError::WrongLength {
                expected: self.target_length,
                actual,
            });
        }

        if !raw_word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GuessError::InvalidCharacters);
        }

        Ok(())
    }

    /// Check the structural invariants of a state that came from outside
    ///
    /// # Errors
    /// Returns a description of the first violated invariant.
    pub fn validate(&self, config: &GameConfig) -> Result<(), String> {
        let target = Word::new(&self.target_word).map_err(|e| format!("targetWord: {e}"))?;
        if target.text() != self.target_word {
            return Err("targetWord is not lowercase".to_string());
        }
        if self.target_length != target.len() {
            return Err(format!(
                "targetLength {} does not match targetWord length {}",
                self.target_length,
                target.len()
            ));
        }
        if self.guess_index != self.guesses.len() {
            return Err(format!(
                "guessIndex {} does not match {} guesses",
                self.guess_index,
                self.guesses.len()
            ));
        }
        if self.guess_index > config.max_guesses {
            return Err(format!(
                "guessIndex {} exceeds maximum of {}",
                self.guess_index, config.max_guesses
            ));
        }

        for (i, guess) in self.guesses.iter().enumerate() {
            if !guess.word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(format!("guess {}: word is not lowercase letters", i + 1));
            }
            let expected = score(&guess.word, &self.target_word)
                .map_err(|e| format!("guess {}: {e}", i + 1))?;
            if expected != guess.feedback {
                return Err(format!("guess {}: feedback does not match its word", i + 1));
            }
            // Only the final guess may be all-correct
            if guess.is_correct() && i + 1 != self.guesses.len() {
                return Err(format!("guess {} won but play continued", i + 1));
            }
        }

        if let Some((letter, _)) = self
            .letter_knowledge
            .iter()
            .find(|(letter, _)| !letter.is_ascii_lowercase())
        {
            return Err(format!("letterKnowledge has non-letter key {letter:?}"));
        }

        let last_correct = self.guesses.last().is_some_and(Guess::is_correct);
        match self.status {
            GameStatus::Playing if last_correct || self.guess_index >= config.max_guesses => {
                return Err("status is playing but the round is over".to_string());
            }
            GameStatus::Won if !last_correct => {
                return Err("status is won but the last guess is not correct".to_string());
            }
            GameStatus::Lost if last_correct || self.guess_index != config.max_guesses => {
                return Err("status is lost but the round is not exhausted".to_string());
            }
            _ => {}
        }

        if self.status.is_terminal() && self.ended_at.is_none() {
            return Err("terminal status without endedAt".to_string());
        }
        if self.started_at < 0 {
            return Err(format!("startedAt {} is before the epoch", self.started_at));
        }
        if let Some(ended_at) = self.ended_at
            && ended_at < self.started_at
        {
            return Err(format!(
                "endedAt {ended_at} is before startedAt {}",
                self.started_at
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    #[must_use]
    pub const fn target_length(&self) -> usize {
        self.target_length
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Number of guesses made so far
    #[must_use]
    pub const fn guess_index(&self) -> usize {
        self.guess_index
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub const fn letter_knowledge(&self) -> &LetterKnowledge {
        &self.letter_knowledge
    }

    #[must_use]
    pub const fn started_at(&self) -> Timestamp {
        self.started_at
    }

    #[must_use]
    pub const fn ended_at(&self) -> Option<Timestamp> {
        self.ended_at
    }

    /// Guesses left under `config`
    #[must_use]
    pub const fn remaining_guesses(&self, config: &GameConfig) -> usize {
        config.max_guesses.saturating_sub(self.guess_index)
    }

    /// Round duration in whole seconds, measured up to `now` while playing
    #[must_use]
    pub fn duration_secs(&self, now: Timestamp) -> i64 {
        let end = self.ended_at.unwrap_or(now);
        (end.saturating_sub(self.started_at) as f64 / 1000.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::stats::GameStatistics;

    fn round(target: &str) -> GameState {
        GameState::start_round(&Word::new(target).unwrap(), 1_000)
    }

    #[test]
    fn start_round_is_fresh() {
        let state = round("vitalik");

        assert_eq!(state.target_word(), "vitalik");
        assert_eq!(state.target_length(), 7);
        assert!(state.guesses().is_empty());
        assert_eq!(state.guess_index(), 0);
        assert_eq!(state.status(), GameStatus::Playing);
        assert!(state.letter_knowledge().is_empty());
        assert_eq!(state.started_at(), 1_000);
        assert_eq!(state.ended_at(), None);
    }

    #[test]
    fn apply_guess_records_feedback_and_knowledge() {
        let state = round("world");
        let next = state.apply_guess("HELLO", 2_000).unwrap();

        assert_eq!(next.guess_index(), 1);
        assert_eq!(next.guesses()[0].word(), "hello");
        assert_eq!(next.guesses()[0].feedback().len(), 5);
        assert_eq!(next.letter_knowledge().get('l'), LetterState::Correct);
        assert_eq!(next.letter_knowledge().get('h'), LetterState::Absent);
        assert_eq!(next.status(), GameStatus::Playing);
        assert_eq!(next.ended_at(), None);

        // The previous state is untouched
        assert_eq!(state.guess_index(), 0);
        assert!(state.guesses().is_empty());
    }

    #[test]
    fn apply_guess_rejects_wrong_length() {
        let state = round("nick");
        for guess in ["", "a", "abc", "abcde", "abcdefghij"] {
            assert_eq!(
                state.apply_guess(guess, 0),
                Err(GuessError::WrongLength {
                    expected: 4,
                    actual: guess.len()
                })
            );
        }
    }

    #[test]
    fn apply_guess_rejects_invalid_characters() {
        let state = round("hello");
        for guess in ["hel1o", "hel-o", "hel o", " hell", "hell ", "héllo"] {
            assert_eq!(
                state.apply_guess(guess, 0),
                Err(GuessError::InvalidCharacters),
                "{guess:?}"
            );
        }
    }

    #[test]
    fn apply_guess_checks_length_before_characters() {
        let state = round("hello");
        assert!(matches!(
            state.apply_guess(" hello", 0),
            Err(GuessError::WrongLength { .. })
        ));
    }

    #[test]
    fn winning_guess_ends_round() {
        let state = round("ens").apply_guess("ens", 5_000).unwrap();

        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.ended_at(), Some(5_000));
        assert!(state.guesses()[0].is_correct());
    }

    #[test]
    fn six_misses_lose() {
        let mut state = round("nick");
        for i in 0..6_i64 {
            assert_eq!(state.status(), GameStatus::Playing);
            state = state.apply_guess("abcd", i * 1_000).unwrap();
        }

        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.guess_index(), 6);
        assert_eq!(state.ended_at(), Some(5_000));
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut state = round("nick");
        for _ in 0..5 {
            state = state.apply_guess("abcd", 0).unwrap();
        }
        state = state.apply_guess("nick", 9_000).unwrap();

        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.guess_index(), 6);
        assert_eq!(state.ended_at(), Some(9_000));
    }

    #[test]
    fn win_on_every_attempt_number() {
        for attempt in 1..=6 {
            let mut state = round("aave");
            for _ in 1..attempt {
                state = state.apply_guess("xxxx", 0).unwrap();
            }
            state = state.apply_guess("aave", 42).unwrap();

            assert_eq!(state.status(), GameStatus::Won);
            assert_eq!(state.guess_index(), attempt);
            assert_eq!(state.ended_at(), Some(42));

            let stats = GameStatistics::new().record_round(&state).unwrap();
            assert_eq!(stats.wins_in(attempt as u32), 1, "attempt {attempt}");
            assert_eq!(stats.guess_distribution.len(), 1);
        }
    }

    #[test]
    fn terminal_states_reject_guesses() {
        let won = round("dao").apply_guess("dao", 0).unwrap();
        assert_eq!(won.apply_guess("dao", 0), Err(GuessError::GameAlreadyOver));

        let mut lost = round("dao");
        for _ in 0..6 {
            lost = lost.apply_guess("xyz", 0).unwrap();
        }
        assert_eq!(lost.apply_guess("dao", 0), Err(GuessError::GameAlreadyOver));
    }

    #[test]
    fn custom_guess_limit() {
        let config = GameConfig::new(2);
        let state = round("lido")
            .apply_guess_with(&config, "aaaa", 0)
            .unwrap()
            .apply_guess_with(&config, "bbbb", 0)
            .unwrap();

        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.remaining_guesses(&config), 0);
    }

    #[test]
    fn guess_format_check() {
        let state = round("nick");
        assert!(state.is_valid_guess_format("NiCk"));
        assert!(!state.is_valid_guess_format("nic"));
        assert!(!state.is_valid_guess_format("ni k"));
    }

    #[test]
    fn restart_keeps_target_only() {
        let state = round("lido").apply_guess("lime", 0).unwrap();
        let restarted = state.restart(7_000);

        assert_eq!(restarted.target_word(), "lido");
        assert!(restarted.guesses().is_empty());
        assert!(restarted.letter_knowledge().is_empty());
        assert_eq!(restarted.started_at(), 7_000);
    }

    #[test]
    fn duration_rounds_to_seconds() {
        let state = round("nick");
        assert_eq!(state.duration_secs(3_400), 2);
        assert_eq!(state.duration_secs(3_600), 3);

        let won = state.apply_guess("nick", 61_000).unwrap();
        assert_eq!(won.duration_secs(999_999), 60);
    }

    #[test]
    fn duration_saturates_on_extreme_timestamps() {
        let mut state = round("nick").apply_guess("nick", i64::MAX).unwrap();
        state.started_at = i64::MIN;
        assert!(state.duration_secs(0) > 0);

        let mut state = round("nick");
        state.started_at = i64::MAX;
        assert!(state.duration_secs(i64::MIN) < 0);
    }

    #[test]
    fn validate_rejects_bad_timestamps() {
        let config = GameConfig::default();

        let mut state = round("nick");
        state.started_at = -1;
        assert!(state.validate(&config).is_err());

        let mut state = round("nick").apply_guess("nick", 500).unwrap();
        assert!(state.validate(&config).is_err());
        state.ended_at = Some(1_000);
        assert_eq!(state.validate(&config), Ok(()));
    }

    #[test]
    fn validate_rejects_non_letter_text() {
        let config = GameConfig::default();

        let mut state = round("nick").apply_guess("nice", 0).unwrap();
        state.guesses[0].word = "NICE".to_string();
        assert!(state.validate(&config).is_err());

        let mut state = round("nick").apply_guess("nice", 0).unwrap();
        state.letter_knowledge = [('n', LetterState::Correct)].into_iter().collect();
        assert_eq!(state.validate(&config), Ok(()));
        state.letter_knowledge = serde_json::from_str(r#"{"N":"correct"}"#).unwrap();
        assert!(state.validate(&config).is_err());
    }

    #[test]
    fn validate_accepts_states_built_by_apply_guess() {
        let config = GameConfig::default();
        let mut state = round("vitalik");
        assert_eq!(state.validate(&config), Ok(()));

        for guess in ["vitamin", "abcdefg", "vitalik"] {
            state = state.apply_guess(guess, 2_000).unwrap();
            assert_eq!(state.validate(&config), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_tampered_feedback() {
        let mut state = round("nick").apply_guess("nice", 0).unwrap();
        state.guesses[0].feedback = vec![LetterFeedback::Correct; 4];
        assert!(state.validate(&GameConfig::default()).is_err());
    }

    #[test]
    fn validate_rejects_inconsistent_status() {
        let mut state = round("nick").apply_guess("nick", 0).unwrap();
        state.status = GameStatus::Playing;
        assert!(state.validate(&GameConfig::default()).is_err());

        let mut state = round("nick").apply_guess("nick", 0).unwrap();
        state.ended_at = None;
        assert!(state.validate(&GameConfig::default()).is_err());

        let mut state = round("nick");
        state.guess_index = 3;
        assert!(state.validate(&GameConfig::default()).is_err());
    }

    #[test]
    fn state_serializes_with_camel_case_fields() {
        let state = round("ens").apply_guess("eNs", 2_000).unwrap();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["targetWord"], "ens");
        assert_eq!(json["targetLength"], 3);
        assert_eq!(json["guessIndex"], 1);
        assert_eq!(json["status"], "won");
        assert_eq!(json["startedAt"], 1_000);
        assert_eq!(json["endedAt"], 2_000);
        assert_eq!(json["guesses"][0]["feedback"][0], "correct");
        assert_eq!(json["letterKnowledge"]["e"], "correct");
    }
}

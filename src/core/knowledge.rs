//! Best-known state of each letter across a round
//!
//! Letter states form a total order `Unused < Absent < WrongPosition < Correct`.
//! Folding a guess into the knowledge keeps the maximum, so a letter is never
//! downgraded once something better has been learned about it.

use super::feedback::LetterFeedback;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best-known classification of a single letter
///
/// Variant order is significant: the derived `Ord` is the upgrade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterState {
    #[default]
    Unused,
    Absent,
    WrongPosition,
    Correct,
}

impl LetterState {
    /// The better of the two states
    #[inline]
    #[must_use]
    pub fn upgrade(self, candidate: Self) -> Self {
        self.max(candidate)
    }
}

impl From<LetterFeedback> for LetterState {
    fn from(feedback: LetterFeedback) -> Self {
        match feedback {
            LetterFeedback::Correct => Self::Correct,
            LetterFeedback::WrongPosition => Self::WrongPosition,
            LetterFeedback::Absent => Self::Absent,
        }
    }
}

/// Mapping from lowercase letter to its best-known state
///
/// Letters never seen in a guess are absent from the map and read as `Unused`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LetterKnowledge(BTreeMap<char, LetterState>);

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of `letter` (case-insensitive), `Unused` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> LetterState {
        self.0
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Number of letters with a recorded state
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recorded letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.0.iter().map(|(&letter, &state)| (letter, state))
    }

    /// Fold one scored guess into a new knowledge value
    ///
    /// See [`merge`].
    #[must_use]
    pub fn merge(&self, guess: &str, feedback: &[LetterFeedback]) -> Self {
        merge(self, guess, feedback)
    }
}

impl FromIterator<(char, LetterState)> for LetterKnowledge {
    fn from_iter<I: IntoIterator<Item = (char, LetterState)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(letter, state)| (letter.to_ascii_lowercase(), state))
                .collect(),
        )
    }
}

/// Fold a scored guess into `current`, returning the upgraded knowledge
///
/// Each letter of `guess` is paired with its feedback entry and kept at the
/// maximum of its current and new state. Letters not in the guess are untouched
/// and `current` itself is never modified.
///
/// # Examples
/// ```
/// use ens_wordle::core::{LetterFeedback, LetterKnowledge, LetterState, merge};
///
/// let knowledge = merge(&LetterKnowledge::new(), "ab", &[LetterFeedback::WrongPosition, LetterFeedback::Absent]);
/// let knowledge = merge(&knowledge, "ab", &[LetterFeedback::Absent, LetterFeedback::Absent]);
/// assert_eq!(knowledge.get('a'), LetterState::WrongPosition);
/// assert_eq!(knowledge.get('b'), LetterState::Absent);
/// ```
#[must_use]
pub fn merge(current: &LetterKnowledge, guess: &str, feedback: &[LetterFeedback]) -> LetterKnowledge {
    let mut next = current.0.clone();

    for (letter, &result) in guess.chars().zip(feedback) {
        let state = next.entry(letter.to_ascii_lowercase()).or_default();
        *state = state.upgrade(result.into());
    }

    LetterKnowledge(next)
}

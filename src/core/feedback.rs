//! Per-letter guess feedback and the scoring rules
//!
//! Each letter of a guess is classified against the target word as:
//! - `Correct` (right letter, right position)
//! - `WrongPosition` (letter occurs elsewhere and has an unmatched occurrence left)
//! - `Absent` (no unmatched occurrence left)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Feedback for a single letter position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterFeedback {
    Correct,
    WrongPosition,
    Absent,
}

impl LetterFeedback {
    /// Emoji square used in the grid and share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error returned when guess and target lengths disagree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Guess has {guess} letters but the target has {target}")]
pub struct ScoreError {
    pub guess: usize,
    pub target: usize,
}

/// Score `guess` against `target`
///
/// Comparison is case-insensitive. Duplicate letters are handled by consuming
/// target occurrences: exact matches claim theirs first, then the remaining
/// positions claim left-over occurrences from left to right.
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: mark wrong-position letters from whatever is still in the pool
///
/// # Errors
/// Returns `ScoreError` if the two strings differ in length.
///
/// # Examples
/// ```
/// use ens_wordle::core::{LetterFeedback::*, score};
///
/// let feedback = score("hello", "alley").unwrap();
/// assert_eq!(feedback, [Absent, WrongPosition, Correct, WrongPosition, Absent]);
/// ```
pub fn score(guess: &str, target: &str) -> Result<Vec<LetterFeedback>, ScoreError> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_lowercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_lowercase()).collect();

    if guess.len() != target.len() {
        return Err(ScoreError {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut result = vec![LetterFeedback::Absent; guess.len()];
    let mut target_available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in &target {
        *target_available.entry(ch).or_insert(0) += 1;
    }

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.iter().zip(&target).enumerate() {
        if g == t {
            result[i] = LetterFeedback::Correct;
            if let Some(count) = target_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: letters present elsewhere with an occurrence still unclaimed
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(count) = target_available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterFeedback::WrongPosition;
            *count -= 1;
        }
    }

    Ok(result)
}

/// True when every position is `Correct`
#[must_use]
pub fn is_all_correct(feedback: &[LetterFeedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|&f| f == LetterFeedback::Correct)
}

/// Render feedback as a row of emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &[LetterFeedback]) -> String {
    feedback.iter().map(|f| f.to_emoji()).collect()
}

/// Parse feedback from a string like "GY-G" or "🟩🟨⬜🟩"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for wrong position
/// - '-'/'_'/⬜ for absent
///
/// Returns `None` on any other character or an empty string.
///
/// # Examples
/// ```
/// use ens_wordle::core::{feedback_to_emoji, parse_feedback};
///
/// let feedback = parse_feedback("GY-").unwrap();
/// assert_eq!(feedback_to_emoji(&feedback), "🟩🟨⬜");
/// ```
#[must_use]
pub fn parse_feedback(s: &str) -> Option<Vec<LetterFeedback>> {
    if s.is_empty() {
        return None;
    }

    s.chars()
        .map(|ch| match ch {
            'G' | 'g' | '🟩' => Some(LetterFeedback::Correct),
            'Y' | 'y' | '🟨' => Some(LetterFeedback::WrongPosition),
            '-' | '_' | '⬜' => Some(LetterFeedback::Absent),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Correct, WrongPosition};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn score_all_absent() {
        let feedback = score("abcde", "fghij").unwrap();
        assert_eq!(feedback, vec![Absent; 5]);
    }

    #[test]
    fn score_all_correct() {
        let feedback = score("vitalik", "vitalik").unwrap();
        assert_eq!(feedback, vec![Correct; 7]);
        assert!(is_all_correct(&feedback));
    }

    #[test]
    fn score_wrong_positions() {
        // The second L is an exact match and claims WORLD's only L
        let feedback = score("hello", "world").unwrap();
        assert_eq!(feedback, [Absent, Absent, Absent, Correct, WrongPosition]);
    }

    #[test]
    fn score_duplicate_letters_exact_match_claims_first() {
        // Third letter L is exact; the fourth takes ALLEY's remaining L
        let feedback = score("hello", "alley").unwrap();
        assert_eq!(feedback, [Absent, WrongPosition, Correct, WrongPosition, Absent]);

        // A single L in the target credits only the first unmatched L
        let feedback = score("hello", "plead").unwrap();
        assert_eq!(feedback, [Absent, WrongPosition, WrongPosition, Absent, Absent]);
    }

    #[test]
    fn score_duplicate_letters_only_one_left() {
        // ROBOT vs FLOOR: first O is wrong position, second O is exact
        let feedback = score("robot", "floor").unwrap();
        assert_eq!(feedback, [WrongPosition, WrongPosition, Absent, Correct, Absent]);
    }

    #[test]
    fn score_duplicate_letters_excess_guess_copies_absent() {
        // Target has one A; only the first unmatched A gets credit
        let feedback = score("aaxx", "bcda").unwrap();
        assert_eq!(feedback, [WrongPosition, Absent, Absent, Absent]);
    }

    #[test]
    fn score_case_insensitive() {
        let feedback = score("HELLO", "hello").unwrap();
        assert_eq!(feedback, vec![Correct; 5]);

        let feedback = score("nick", "NICK").unwrap();
        assert!(is_all_correct(&feedback));
    }

    #[test]
    fn score_length_mismatch() {
        assert_eq!(
            score("nick", "vitalik"),
            Err(ScoreError {
                guess: 4,
                target: 7
            })
        );
    }

    #[test]
    fn is_all_correct_rejects_partial_and_empty() {
        assert!(!is_all_correct(&[Correct, WrongPosition, Correct]));
        assert!(!is_all_correct(&[]));
    }

    #[test]
    fn feedback_serializes_kebab_case() {
        let json = serde_json::to_string(&[Correct, WrongPosition, Absent]).unwrap();
        assert_eq!(json, r#"["correct","wrong-position","absent"]"#);
    }

    #[test]
    fn parse_feedback_valid() {
        let p1 = parse_feedback("GY-").unwrap();
        let p2 = parse_feedback("🟩🟨⬜").unwrap();
        let p3 = parse_feedback("gy_").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, [Correct, WrongPosition, Absent]);
    }

    #[test]
    fn parse_feedback_invalid() {
        assert!(parse_feedback("GXG").is_none());
        assert!(parse_feedback("").is_none());
    }

    #[test]
    fn emoji_row() {
        assert_eq!(feedback_to_emoji(&[Correct, Absent, WrongPosition]), "🟩⬜🟨");
    }

    proptest! {
        #[test]
        fn score_self_is_all_correct(word in "[a-zA-Z]{1,12}") {
            let feedback = score(&word, &word.to_uppercase()).unwrap();
            prop_assert!(is_all_correct(&feedback));
        }

        #[test]
        fn score_is_deterministic_and_length_preserving(
            (guess, target) in (1usize..10).prop_flat_map(|n| {
                (
                    proptest::string::string_regex(&format!("[a-e]{{{n}}}")).unwrap(),
                    proptest::string::string_regex(&format!("[a-e]{{{n}}}")).unwrap(),
                )
            })
        ) {
            let first = score(&guess, &target).unwrap();
            let second = score(&guess, &target).unwrap();
            prop_assert_eq!(first.len(), guess.len());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn score_never_credits_more_than_target_has(
            (guess, target) in (1usize..10).prop_flat_map(|n| {
                (
                    proptest::string::string_regex(&format!("[a-c]{{{n}}}")).unwrap(),
                    proptest::string::string_regex(&format!("[a-c]{{{n}}}")).unwrap(),
                )
            })
        ) {
            let feedback = score(&guess, &target).unwrap();
            for letter in ['a', 'b', 'c'] {
                let credited = guess
                    .chars()
                    .zip(&feedback)
                    .filter(|&(ch, &f)| ch == letter && f != Absent)
                    .count();
                let available = target.chars().filter(|&ch| ch == letter).count();
                prop_assert!(credited <= available);
            }
        }
    }
}

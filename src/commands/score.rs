//! Score command
//!
//! Scores one guess against one target without touching any saved round.

use crate::core::{LetterFeedback, Word, is_all_correct, score};

/// Result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub feedback: Vec<LetterFeedback>,
    pub solved: bool,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is empty or contains anything but letters
/// - The two words differ in length
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;

    let feedback = score(guess.text(), target.text()).map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        solved: is_all_correct(&feedback),
        feedback,
    })
}

//! Guess submission errors

use thiserror::Error;

/// Reasons a submitted guess is rejected
///
/// All variants are recoverable: the state is left unchanged and the player
/// may submit again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Only letters allowed")]
    InvalidCharacters,

    #[error("Game is not in playing state")]
    GameAlreadyOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_length_message_names_both_lengths() {
        let err = GuessError::WrongLength {
            expected: 7,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Must be 7 letters, got 4");
    }
}

//! Target word representation
//!
//! A `Word` is a validated, lowercase, ASCII-alphabetic string of any non-zero
//! length. Target words come from the name list and are not limited to five letters.

use std::fmt;
use thiserror::Error;

/// A lowercase alphabetic target word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains anything other than ASCII letters (whitespace included)
    ///
    /// # Examples
    /// ```
    /// use ens_wordle::core::Word;
    ///
    /// let word = Word::new("Vitalik").unwrap();
    /// assert_eq!(word.text(), "vitalik");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("nick.eth").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("vitalik").unwrap();
        assert_eq!(word.text(), "vitalik");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("NICK").unwrap();
        assert_eq!(word.text(), "nick");

        let word2 = Word::new("BrAnTlY").unwrap();
        assert_eq!(word2.text(), "brantly");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("blockchain").unwrap().len(), 10);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters)); // Number
        assert_eq!(Word::new(" nick"), Err(WordError::InvalidCharacters)); // Space
        assert_eq!(Word::new("nick.eth"), Err(WordError::InvalidCharacters)); // Dot
        assert_eq!(Word::new("jeff-lau"), Err(WordError::InvalidCharacters)); // Hyphen
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacters)); // Non-ASCII
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Aave".parse().unwrap();
        assert_eq!(format!("{word}"), "aave");
    }
}

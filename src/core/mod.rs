//! Core domain types for the guessing game
//!
//! This module contains the scoring rules and letter-knowledge aggregation.
//! Everything here is pure: every call takes its inputs by reference and
//! returns a new value.

mod feedback;
mod knowledge;
mod word;

pub use feedback::{
    LetterFeedback, ScoreError, feedback_to_emoji, is_all_correct, parse_feedback, score,
};
pub use knowledge::{LetterKnowledge, LetterState, merge};
pub use word::{Word, WordError};

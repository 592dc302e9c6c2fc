//! ENS Wordle
//!
//! Word-guessing game where the hidden word is an ENS name. The crate holds the
//! scoring rules, the round state machine, statistics, and validated
//! persistence; the binary wraps them in a terminal game.
//!
//! # Quick Start
//!
//! ```rust
//! use ens_wordle::core::{LetterFeedback, Word, score};
//! use ens_wordle::game::{GameState, GameStatus};
//!
//! let feedback = score("hello", "world").unwrap();
//! assert_eq!(feedback[3], LetterFeedback::Correct);
//!
//! let state = GameState::start_round(&Word::new("vitalik").unwrap(), 0);
//! let state = state.apply_guess("vitamin", 1_000).unwrap();
//! assert_eq!(state.status(), GameStatus::Playing);
//! ```

// Scoring and letter knowledge
pub mod core;

// Round state machine
pub mod game;

// Long-run statistics
pub mod stats;

// Saved rounds and statistics
pub mod storage;

// Round owner tying state, statistics, and storage together
pub mod session;

// Curated target names
pub mod names;

// Avatar hints
pub mod avatar;

// Rules and data directory
pub mod config;

// Subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

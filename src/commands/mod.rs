//! Command implementations

pub mod play;
pub mod score;
pub mod stats;

pub use play::{TargetOptions, pick_target, run_play};
pub use score::{ScoreResult, score_words};
pub use stats::{ResetResult, load_statistics, reset_progress};

//! Round lifecycle: the guess state machine and its errors

mod error;
mod state;

pub use error::GuessError;
pub use state::{GameState, GameStatus, Guess, Timestamp};

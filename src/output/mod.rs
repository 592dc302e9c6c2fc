//! Terminal output formatting
//!
//! Display utilities for the game board and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_board, print_name_list, print_reset_result, print_round_summary,
    print_score_result, print_statistics,
};

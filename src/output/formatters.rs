//! Formatting utilities for terminal output

use crate::core::{LetterFeedback, LetterKnowledge, LetterState, feedback_to_emoji};
use crate::game::{GameState, Guess};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Colored tile for one guessed letter
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::WrongPosition => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black().bold(),
    }
}

/// A word and its feedback as a row of colored tiles
#[must_use]
pub fn feedback_row(word: &str, feedback: &[LetterFeedback]) -> String {
    word.chars()
        .zip(feedback)
        .map(|(letter, &feedback)| letter_tile(letter, feedback).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    feedback_row(guess.word(), guess.feedback())
}

/// Placeholder row for a guess not yet made
#[must_use]
pub fn empty_row(length: usize) -> String {
    vec![" _ ".bright_black().to_string(); length].join(" ")
}

/// Keyboard key colored by what is known about the letter
#[must_use]
pub fn keyboard_key(letter: char, state: LetterState) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match state {
        LetterState::Correct => text.green().bold(),
        LetterState::WrongPosition => text.yellow().bold(),
        LetterState::Absent => text.bright_black().strikethrough(),
        LetterState::Unused => text.white(),
    }
}

/// The keyboard, one string per row, indented like a physical keyboard
#[must_use]
pub fn keyboard_rows(knowledge: &LetterKnowledge) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|letter| keyboard_key(letter, knowledge.get(letter)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Emoji grid of a round, one line per guess
#[must_use]
pub fn share_grid(state: &GameState) -> String {
    state
        .guesses()
        .iter()
        .map(|guess| feedback_to_emoji(guess.feedback()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `42s` under a minute, `2m 5s` otherwise
#[must_use]
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds < 60 {
        format!("{seconds}s")
    } else {
        format!("{}m {}s", seconds / 60, seconds % 60)
    }
}

/// `try` or `tries`
#[must_use]
pub const fn tries(count: usize) -> &'static str {
    if count == 1 { "try" } else { "tries" }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn played(target: &str, guesses: &[&str]) -> GameState {
        let mut state = GameState::start_round(&Word::new(target).unwrap(), 0);
        for guess in guesses {
            state = state.apply_guess(guess, 0).unwrap();
        }
        state
    }

    #[test]
    fn guess_row_shows_every_letter() {
        let state = played("nick", &["nice"]);
        let row = guess_row(&state.guesses()[0]);

        for letter in ['N', 'I', 'C', 'E'] {
            assert!(row.contains(letter), "{row}");
        }
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let rows = keyboard_rows(&LetterKnowledge::new());
        assert_eq!(rows.len(), 3);

        let letters: usize = KEYBOARD_ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(letters, 26);
        assert!(rows[0].contains('Q'));
        assert!(rows[2].starts_with("  "));
    }

    #[test]
    fn share_grid_one_line_per_guess() {
        let state = played("ens", &["eta", "ens"]);
        assert_eq!(share_grid(&state), "🟩⬜⬜\n🟩🟩🟩");
    }

    #[test]
    fn duration_formats() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(-3), "0s");
    }

    #[test]
    fn tries_pluralizes() {
        assert_eq!(tries(1), "try");
        assert_eq!(tries(2), "tries");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 3), "░░░");
    }
}

//! Interactive play mode
//!
//! Line-based game loop: each line is a guess or a command.

use crate::avatar::AvatarResolver;
use crate::core::Word;
use crate::game::Timestamp;
use crate::names::{self, Category, Difficulty};
use crate::output::{print_banner, print_board, print_round_summary, print_statistics};
use crate::session::Session;
use crate::storage::KeyValueStore;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// How new target names are picked
#[derive(Debug, Clone, Default)]
pub struct TargetOptions {
    /// Fixed practice word; overrides the filters
    pub word: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
}

/// Pick the next target word
///
/// # Errors
///
/// Returns an error if the fixed practice word is not a valid word.
pub fn pick_target<R: Rng + ?Sized>(rng: &mut R, options: &TargetOptions) -> Result<Word, String> {
    if let Some(word) = &options.word {
        return Word::new(word).map_err(|e| format!("Invalid practice word: {e}"));
    }

    let entry = match (options.difficulty, options.category) {
        (Some(difficulty), _) => names::random_name_by_difficulty(rng, difficulty),
        (None, Some(category)) => names::random_name_by_category(rng, category),
        (None, None) => names::random_name(rng),
    };

    entry
        .word()
        .or_else(|_| names::fallback_name().word())
        .map_err(|e| format!("No usable target name: {e}"))
}

/// Run the interactive game loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input fails or a new target cannot be picked.
pub fn run_play<S, A, R, B>(
    session: &mut Session<S>,
    avatars: &A,
    options: &TargetOptions,
    rng: &mut R,
    mut input: B,
    now: &dyn Fn() -> Timestamp,
) -> Result<(), String>
where
    S: KeyValueStore,
    A: AvatarResolver + ?Sized,
    R: Rng + ?Sized,
    B: BufRead,
{
    print_banner();
    if !session.is_persistent() {
        println!(
            "{}\n",
            "⚠ Storage unavailable, progress will not be saved".yellow()
        );
    }

    let mut avatar = avatars.resolve_avatar(session.state().target_word());
    print_board(session.state(), session.config(), avatar.as_deref());

    loop {
        if session.state().is_terminal() {
            print_round_summary(session.state(), session.config(), now());

            let Some(answer) = read_input(&mut input, "Play again? (yes/no)")? else {
                return Ok(());
            };
            if !matches!(answer.trim().to_lowercase().as_str(), "yes" | "y") {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }

            let target = pick_target(rng, options)?;
            session.start_new_game(&target, now());
            avatar = avatars.resolve_avatar(target.text());
            println!("\n🔄 New game started!");
            print_board(session.state(), session.config(), avatar.as_deref());
            continue;
        }

        let Some(line) = read_input(&mut input, "Guess")? else {
            return Ok(());
        };

        if session.is_valid_guess_format(&line) {
            submit_guess(session, &line, avatar.as_deref(), now());
            continue;
        }

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing! Your round is saved.\n");
                return Ok(());
            }
            "new" | "n" => {
                let target = pick_target(rng, options)?;
                session.start_new_game(&target, now());
                avatar = avatars.resolve_avatar(target.text());
                info!("new game started");
                println!("\n🔄 New game started!");
                print_board(session.state(), session.config(), avatar.as_deref());
            }
            "reset" | "r" => {
                session.reset_game(now());
                println!("\n↺ Round restarted");
                print_board(session.state(), session.config(), avatar.as_deref());
            }
            "stats" | "s" => print_statistics(session.stats(), session.config()),
            _ => submit_guess(session, &line, avatar.as_deref(), now()),
        }
    }
}

/// Apply a guess and redraw, or report why it was rejected
fn submit_guess<S: KeyValueStore>(
    session: &mut Session<S>,
    line: &str,
    avatar: Option<&str>,
    now: Timestamp,
) {
    match session.make_guess(line, now) {
        Ok(outcome) => {
            print_board(session.state(), session.config(), avatar);
            if !outcome.saved && session.is_persistent() {
                println!("{}", "⚠ Progress could not be saved".yellow());
            }
        }
        Err(e) => println!("❌ {e}\n"),
    }
}

/// Prompt and read one line without its line ending, `None` at end of input
fn read_input<B: BufRead>(input: &mut B, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

//! Display functions for the game and command results

use super::formatters::{
    create_progress_bar, empty_row, feedback_row, format_duration, guess_row, keyboard_rows,
    share_grid, tries,
};
use crate::avatar::full_name;
use crate::commands::{ResetResult, ScoreResult};
use crate::config::GameConfig;
use crate::core::feedback_to_emoji;
use crate::game::{GameState, GameStatus, Timestamp};
use crate::names::ListSummary;
use crate::stats::GameStatistics;
use colored::Colorize;

/// Print the welcome banner and controls
pub fn print_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   ENS Wordle - Guess the Name                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("The hidden word is an ENS name. Type a guess and press enter.");
    println!("  {} right letter, right spot", " G ".black().on_green().bold());
    println!("  {} in the name, wrong spot", " Y ".black().on_yellow().bold());
    println!("  {} not in the name", " - ".white().on_bright_black().bold());
    println!("\nCommands: 'new' (n), 'reset' (r), 'stats' (s), 'quit' (q)");
    println!("A line that is a valid guess is always played as a guess.\n");
}

/// Print the board: avatar hint, guesses so far, empty rows, and keyboard
pub fn print_board(state: &GameState, config: &GameConfig, avatar_url: Option<&str>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Name: {} letters   Guesses left: {}",
        state.target_length().to_string().bright_yellow().bold(),
        state.remaining_guesses(config)
    );
    if let Some(url) = avatar_url {
        println!("Avatar hint: {}", url.bright_blue().underline());
    }
    println!("{}", "─".repeat(60).cyan());

    println!();
    for guess in state.guesses() {
        println!("   {}", guess_row(guess));
    }
    for _ in 0..state.remaining_guesses(config) {
        println!("   {}", empty_row(state.target_length()));
    }

    println!();
    for row in keyboard_rows(state.letter_knowledge()) {
        println!("   {row}");
    }
    println!();
}

/// Print the end-of-round summary
pub fn print_round_summary(state: &GameState, config: &GameConfig, now: Timestamp) {
    let name = full_name(state.target_word());
    let guess_count = state.guess_index();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match state.status() {
        GameStatus::Won => {
            println!("  {}", "🎉 Congratulations!".bright_green().bold());
            println!(
                "  You guessed {} in {guess_count} {}!",
                name.bright_yellow().bold(),
                tries(guess_count)
            );
        }
        GameStatus::Lost => {
            println!("  {}", "❌ Game Over".red().bold());
            println!("  The answer was {}", name.bright_yellow().bold());
        }
        GameStatus::Playing => {
            println!("  Round in progress: {guess_count} guesses so far");
        }
    }

    println!(
        "\n  Time:     {}",
        format_duration(state.duration_secs(now))
    );
    if state.status() == GameStatus::Won {
        println!("  Guesses:  {guess_count}/{}", config.max_guesses);
    }

    println!("\n{}", share_grid(state));
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print long-run statistics with the winning-guess distribution
pub fn print_statistics(stats: &GameStatistics, config: &GameConfig) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Totals:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!("   Lost:            {}", stats.games_lost());
    println!(
        "   Win %:           {}",
        stats.win_percentage().to_string().bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak.to_string().green());
    println!("   Max streak:      {}", stats.max_streak.to_string().yellow());

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guess_count in 1..=config.max_guesses as u32 {
        let count = stats.wins_in(guess_count);
        let bar = create_progress_bar(f64::from(count), f64::from(most), 30);
        println!("   {guess_count}: {} {count:4}", bar.green());
    }
    println!();
}

/// Print what the embedded name list holds
pub fn print_name_list(summary: &ListSummary) {
    println!("📚 {}", "Name list:".bright_cyan().bold());
    println!(
        "   {} names, {} with avatars, {} letters on average",
        summary.total, summary.with_avatars, summary.average_length
    );
    println!(
        "   Easy {} / Medium {} / Hard {}",
        summary.easy, summary.medium, summary.hard
    );
    println!(
        "   Individuals {} / Projects {} / Generic {}",
        summary.individual, summary.project, summary.generic
    );
    println!();
}

/// Print the feedback for a single guess against a target
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("   {}", feedback_row(&result.guess, &result.feedback));
    println!("   {}", feedback_to_emoji(&result.feedback));
    if result.solved {
        println!("{}", "✅ Exact match".green().bold());
    }
}

/// Print what a reset removed
pub fn print_reset_result(result: &ResetResult) {
    if !result.persistent {
        println!("{}", "Storage unavailable, nothing to reset".yellow());
        return;
    }

    println!("✓ Saved round cleared");
    if result.cleared_stats {
        println!("✓ Statistics cleared");
    }
}

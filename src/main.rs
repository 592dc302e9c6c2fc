//! ENS Wordle - CLI
//!
//! Guess the hidden ENS name in the terminal. Rounds and statistics are saved
//! under the platform data directory and resumed on the next run.

use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use ens_wordle::{
    avatar::{AvatarResolver, MetadataResolver, NoAvatar},
    commands::{
        TargetOptions, load_statistics, pick_target, reset_progress, run_play, score_words,
    },
    config::{DEFAULT_MAX_GUESSES, GameConfig, resolve_data_dir},
    game::Timestamp,
    logging::{DEFAULT_LEVEL, LOG_FORMAT_ENV, LOG_LEVEL_ENV, LogFormat, LoggingConfig},
    names::{self, Category, Difficulty},
    output::{print_name_list, print_reset_result, print_score_result, print_statistics},
    session::Session,
    storage::{DisabledStore, FileStore, KeyValueStore, Persistence},
};
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "ens_wordle",
    about = "Guess the hidden ENS name, with its avatar as a hint",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved rounds and statistics
    #[arg(long, global = true, env = "ENS_WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Guesses allowed per round
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_GUESSES,
        value_parser = parse_max_guesses
    )]
    max_guesses: usize,

    /// Log format: text (default), json, pretty
    #[arg(long, global = true, env = LOG_FORMAT_ENV, default_value = "text")]
    log_format: LogFormat,

    /// Minimum log level, or any `RUST_LOG`-style directive
    #[arg(long, global = true, env = LOG_LEVEL_ENV, default_value = DEFAULT_LEVEL)]
    log_level: String,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Play without saving anything
    #[arg(long, global = true)]
    no_persist: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play(PlayArgs),

    /// Score a guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Show statistics and the name list
    Stats,

    /// Clear the saved round
    Reset {
        /// Clear statistics too
        #[arg(long)]
        all: bool,
    },
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Only pick names of this difficulty: easy, medium, hard
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Only pick names of this category: individual, project, generic
    #[arg(short, long)]
    category: Option<Category>,

    /// Practice against a fixed word instead of a random name
    #[arg(short, long)]
    word: Option<String>,

    /// Do not show avatar hints
    #[arg(long)]
    no_avatar: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    LoggingConfig::new(cli.log_format, cli.log_level.clone(), cli.verbose)
        .init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = GameConfig::new(cli.max_guesses);

    // Default to Play mode if no command given
    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Play(PlayArgs::default()));

    match command {
        Commands::Play(args) => {
            let options = TargetOptions {
                word: args.word,
                difficulty: args.difficulty,
                category: args.category,
            };
            run_play_command(&cli, config, &options, args.no_avatar)
        }
        Commands::Score { guess, target } => run_score_command(&guess, &target),
        Commands::Stats => {
            let mut persistence = open_persistence(&cli, config);
            print_statistics(&load_statistics(&mut persistence), &config);
            print_name_list(&names::summary());
            Ok(())
        }
        Commands::Reset { all } => {
            let mut persistence = open_persistence(&cli, config);
            print_reset_result(&reset_progress(&mut persistence, all));
            Ok(())
        }
    }
}

fn parse_max_guesses(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must allow at least one guess".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn now() -> Timestamp {
    Utc::now().timestamp_millis()
}

/// File storage under the data directory, or nothing if that is not possible
fn open_persistence(cli: &Cli, config: GameConfig) -> Persistence<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = if cli.no_persist {
        debug!("persistence disabled by flag");
        Box::new(DisabledStore)
    } else if let Some(dir) = resolve_data_dir(cli.data_dir.clone()) {
        debug!(dir = %dir.display(), "using data directory");
        Box::new(FileStore::new(dir))
    } else {
        warn!("no data directory available, progress will not be saved");
        Box::new(DisabledStore)
    };

    Persistence::new(store, config)
}

fn run_play_command(
    cli: &Cli,
    config: GameConfig,
    options: &TargetOptions,
    no_avatar: bool,
) -> Result<()> {
    let mut rng = rand::rng();
    let target = pick_target(&mut rng, options).map_err(|e| anyhow::anyhow!(e))?;

    let mut session = Session::open(open_persistence(cli, config), &target, now());

    let avatars: Box<dyn AvatarResolver> = if no_avatar {
        Box::new(NoAvatar)
    } else {
        Box::new(MetadataResolver::default())
    };

    run_play(
        &mut session,
        avatars.as_ref(),
        options,
        &mut rng,
        io::stdin().lock(),
        &now,
    )
    .map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_words(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

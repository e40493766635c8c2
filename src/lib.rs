//! rAppearance library root.
//!
//! Computes how long the lesson window, the pupil and the tutor were all
//! present at once, from flat `[start, end, start, end, ...]` timestamp
//! lists. Exposes the CLI parser, the high-level `run()` function and the
//! calculator modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::calculator::normalizer::OddLengthPolicy;
use errors::AppResult;
use models::Attendance;

/// Total time during which all three roles are present, rejecting
/// odd-length timestamp lists.
///
/// ```
/// use rappearance::models::{Attendance, Role};
///
/// let attendance = Attendance::new()
///     .with(Role::Lesson, vec![0, 100])
///     .with(Role::Pupil, vec![10, 90])
///     .with(Role::Tutor, vec![20, 80]);
/// assert_eq!(rappearance::compute_triple_overlap(&attendance).unwrap(), 60);
/// ```
pub fn compute_triple_overlap(attendance: &Attendance) -> AppResult<u64> {
    crate::core::logic::Core::compute_triple_overlap(attendance, OddLengthPolicy::default())
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let config_path = Config::resolve_path(cli.config.as_deref());
    match &cli.command {
        Commands::Compute { .. } => cli::commands::compute::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Check => cli::commands::check::handle(cfg),
        Commands::Init { force } => cli::commands::init::handle(&config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, &config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&path)?;

    dispatch(&cli, &cfg)
}

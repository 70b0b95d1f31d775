use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use blockfall::core::GameConfig;
use blockfall::types::{FALL_DELAY_MS, MOVE_DELAY_MS, ROTATE_DELAY_MS};

/// Falling-block puzzle for the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding scores.json, users.json and blockfall.log
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Seed for the piece randomizer (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Gravity interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = FALL_DELAY_MS)]
    pub fall_ms: u64,

    /// Repeat delay for held move and soft-drop keys in milliseconds
    #[arg(long, value_name = "MS", default_value_t = MOVE_DELAY_MS)]
    pub move_ms: u64,

    /// Repeat delay for a held rotate key in milliseconds
    #[arg(long, value_name = "MS", default_value_t = ROTATE_DELAY_MS)]
    pub rotate_ms: u64,

    /// Play as this user without the login menu
    #[arg(long)]
    pub user: Option<String>,

    /// Print the N best scores and exit
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Log level written to the log file (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_fall_interval_ms(self.fall_ms)
            .with_repeat_delays(self.move_ms, self.rotate_ms)
    }
}

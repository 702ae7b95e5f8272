//! Application configuration: environment variables, then command-line flags.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::Parser;

use crate::core::GameConfig;
use crate::types::RESOLVE_DELAY_MS;

pub const ENV_SEED: &str = "RECALLFLIP_SEED";
pub const ENV_RESOLVE_DELAY_MS: &str = "RECALLFLIP_RESOLVE_DELAY_MS";
pub const ENV_NO_SOUND: &str = "RECALLFLIP_NO_SOUND";
pub const ENV_LOG_PATH: &str = "RECALLFLIP_LOG_PATH";
pub const ENV_LOG_FILTER: &str = "RECALLFLIP_LOG";

const KEYS_HELP: &str = "\
Keys:   arrows/hjkl/wasd move, enter/space flip, r restart, q quit
Mouse:  click a card to flip it";

/// RecallFlip - a terminal memory-matching card game
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "recallflip")]
#[command(version, about, long_about = None, after_help = KEYS_HELP)]
pub struct AppConfig {
    /// Shuffle seed; every restart reuses the same sequence of boards
    #[arg(long, env = ENV_SEED, value_name = "N")]
    pub seed: Option<u64>,

    /// Delay before a mismatched pair flips back
    #[arg(
        long = "delay-ms",
        env = ENV_RESOLVE_DELAY_MS,
        value_name = "MS",
        default_value_t = RESOLVE_DELAY_MS
    )]
    pub resolve_delay_ms: u64,

    /// Disable the flip cue (terminal bell)
    #[arg(long, env = ENV_NO_SOUND, value_parser = FalseyValueParser::new())]
    pub no_sound: bool,

    /// Append logs to this file; nothing is logged without it
    #[arg(long = "log", env = ENV_LOG_PATH, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log filter directives (trace, debug, info, warn, error)
    #[arg(long = "log-filter", env = ENV_LOG_FILTER, default_value = "info")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            resolve_delay_ms: RESOLVE_DELAY_MS,
            no_sound: false,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn sound(&self) -> bool {
        !self.no_sound
    }

    pub fn game_config(&self) -> GameConfig {
        let config = GameConfig::default().with_resolve_delay_ms(self.resolve_delay_ms);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

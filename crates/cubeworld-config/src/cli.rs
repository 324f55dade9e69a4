//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Cube world command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "cubeworld", about = "Cube world gravity sandbox")]
pub struct CliArgs {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Fixed simulation rate in Hz.
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Simulated run length in seconds.
    #[arg(long)]
    pub duration: Option<f32>,

    /// Startup grace window in milliseconds.
    #[arg(long)]
    pub grace_ms: Option<u64>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(rate) = args.tick_rate {
            self.world.tick_rate_hz = rate;
        }
        if let Some(secs) = args.duration {
            self.world.duration_s = secs;
        }
        if let Some(grace) = args.grace_ms {
            self.gravity.startup_grace_ms = grace;
        }
    }
}

//! Configuration for the cube world runtime.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line. Gravity transition timings live here so designers can tune
//! the feel of a face change without recompiling.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GravityConfig, WorldConfig};
pub use error::ConfigError;

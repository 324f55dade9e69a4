//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Face-change timing settings.
    pub gravity: GravityConfig,
    /// World layout and simulation rate.
    pub world: WorldConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Timings of a face transition, all in milliseconds.
///
/// Offsets are measured from the moment a face change is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    /// Window after session start during which face detection is suppressed.
    pub startup_grace_ms: u64,
    /// Offset at which the player's rotation lock is reinstated.
    pub rotation_lock_ms: u64,
    /// Offset at which the applied gravity switches to the new face.
    pub gravity_swap_ms: u64,
    /// Length of the eased body/camera reorientation.
    pub rotation_duration_ms: u64,
    /// Offset at which the transition completes and detection resumes.
    pub settle_ms: u64,
}

/// World layout and simulation rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Center of the cube world in world space.
    pub cube_center: [f32; 3],
    /// Distance from the center at which the player walks.
    pub walk_radius: f32,
    /// Fixed simulation rate in Hz.
    pub tick_rate_hz: u32,
    /// How long the headless driver runs, in seconds.
    pub duration_s: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log every transition event as it is drained.
    pub log_events: bool,
}

// --- Default implementations ---

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            startup_grace_ms: 500,
            rotation_lock_ms: 100,
            gravity_swap_ms: 200,
            rotation_duration_ms: 1000,
            settle_ms: 1500,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            cube_center: [0.0, 0.0, 0.0],
            walk_radius: 300.0,
            tick_rate_hz: 60,
            duration_s: 8.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_events: true,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Validate the world section: positive tick rate and walk radius, and a
    /// finite run length.
    ///
    /// Gravity timings are validated where they are consumed, when the
    /// gravity controller builds its transition timing from them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world.tick_rate_hz == 0 {
            return Err(ConfigError::Invalid(
                "tick_rate_hz must be positive".to_string(),
            ));
        }
        if !self.world.walk_radius.is_finite() || self.world.walk_radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "walk_radius must be positive, got {}",
                self.world.walk_radius
            )));
        }
        if !self.world.duration_s.is_finite() || self.world.duration_s < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "duration_s must be finite and non-negative, got {}",
                self.world.duration_s
            )));
        }
        Ok(())
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

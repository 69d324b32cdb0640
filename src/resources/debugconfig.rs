//! Debug settings resources.
//!
//! [`DebugConfig`] holds the tunables exposed to users, loaded from an INI
//! file. [`BuildProfile`] tells whether the running binary is a debug build.
//!
//! # Configuration File Format
//!
//! ```ini
//! [debug]
//! force_release_build = false
//!
//! [longpress]
//! duration = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_LONG_PRESS_DURATION: f32 = 1.0;
const DEFAULT_FORCE_RELEASE_BUILD: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./debug.ini";

/// User-tunable debug settings.
#[derive(Resource, Debug, Clone)]
pub struct DebugConfig {
    /// Seconds a long-press button must be held before it activates.
    pub long_press_duration: f32,
    /// Behave as a release build even when compiled with debug assertions.
    pub force_release_build: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            long_press_duration: DEFAULT_LONG_PRESS_DURATION,
            force_release_build: DEFAULT_FORCE_RELEASE_BUILD,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. A non-positive duration is
    /// ignored with a warning.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [debug] section
        if let Some(force) = config.getbool("debug", "force_release_build").ok().flatten() {
            self.force_release_build = force;
        }

        // [longpress] section
        if let Some(duration) = config.getfloat("longpress", "duration").ok().flatten() {
            self.set_long_press_duration(duration as f32);
        }

        info!(
            "Loaded config: long_press_duration={}, force_release_build={}",
            self.long_press_duration, self.force_release_build
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set(
            "debug",
            "force_release_build",
            Some(self.force_release_build.to_string()),
        );
        config.set(
            "longpress",
            "duration",
            Some(self.long_press_duration.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set the long-press duration. Non-positive or non-finite values are
    /// rejected and the current value kept.
    pub fn set_long_press_duration(&mut self, duration: f32) -> bool {
        if !duration.is_finite() || duration <= 0.0 {
            warn!(
                "Ignoring invalid long-press duration {}, keeping {}",
                duration, self.long_press_duration
            );
            return false;
        }
        self.long_press_duration = duration;
        true
    }
}

/// Whether the running binary counts as a debug build.
#[derive(Resource, Debug, Clone, Copy)]
pub struct BuildProfile {
    pub debug_build: bool,
}

impl Default for BuildProfile {
    fn default() -> Self {
        BuildProfile {
            debug_build: cfg!(debug_assertions),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tictactoe_common::config::Validate;

use super::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    /// Fixes the computer's tie-breaking when set.
    pub seed: Option<u64>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.timing.validate()?;
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 500,
                height: 600,
                min_width: 300,
                min_height: 360,
            },
            timing: TimingConfig {
                computer_think_time_ms: 500,
                game_over_display_ms: 1500,
            },
            seed: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.min_width < 200 || self.min_height < 200 {
            return Err("minimum window size must be at least 200x200".to_string());
        }
        if self.width < self.min_width || self.height < self.min_height {
            return Err(format!(
                "window size {}x{} is below the minimum {}x{}",
                self.width, self.height, self.min_width, self.min_height
            ));
        }
        if self.width > 4000 || self.height > 4000 {
            return Err("window size must not exceed 4000x4000".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TimingConfig {
    /// Minimum time the computer appears to think before its mark shows up.
    pub computer_think_time_ms: u32,
    pub game_over_display_ms: u32,
}

impl TimingConfig {
    pub fn computer_think_time(&self) -> Duration {
        Duration::from_millis(self.computer_think_time_ms as u64)
    }

    pub fn game_over_display(&self) -> Duration {
        Duration::from_millis(self.game_over_display_ms as u64)
    }
}

impl Validate for TimingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_think_time_ms > 10_000 {
            return Err("computer_think_time_ms must not exceed 10000".to_string());
        }
        if self.game_over_display_ms > 30_000 {
            return Err("game_over_display_ms must not exceed 30000".to_string());
        }
        Ok(())
    }
}

mod client_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use client_config::{ClientConfig, DEFAULT_CONFIG_FILE, get_config_manager};

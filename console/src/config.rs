use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub log: LogConfig,
    pub bot: BotConfig,
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.log.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("log prefix must not be blank".to_string());
        }
        Ok(())
    }
}

/// `seed` makes the random bots repeatable.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct BotConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub empty_cell: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { empty_cell: ' ' }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if matches!(self.empty_cell, 'X' | 'O') {
            return Err(format!(
                "empty_cell must differ from the player marks, got {:?}",
                self.empty_cell
            ));
        }
        if self.empty_cell.is_control() {
            return Err("empty_cell must be a printable character".to_string());
        }
        Ok(())
    }
}

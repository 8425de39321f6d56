use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::{Difficulty, Mark, TicTacToeSessionSettings};

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
const MAX_THINKING_DELAY_MS: u64 = 5000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    pub thinking_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub verbose: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {} (got {})",
                MAX_THINKING_DELAY_MS, self.thinking_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            human_mark: Mark::X,
            thinking_delay_ms: 400,
            seed: None,
            verbose: false,
        }
    }
}

impl Config {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            human_mark: self.human_mark,
            difficulty: self.difficulty,
        }
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_console_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        assert!(serialized.contains("difficulty: hard"));
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        let config = Config {
            difficulty: Difficulty::Medium,
            human_mark: Mark::O,
            thinking_delay_ms: 0,
            seed: Some(99),
            verbose: true,
        };
        manager.set_config(&config).unwrap();

        let provider = FileContentConfigProvider::new(file_path.clone());
        let content = provider.get_config_content().unwrap().unwrap();
        assert!(content.contains("difficulty: medium"));

        let fresh_manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_gives_default() {
        let manager = get_config_manager(Some(get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("difficulty: easy\nhuman_mark: X\nthinking_delay_ms: 100\n")
            .unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, None);
        assert!(!config.verbose);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let empty_mark = Config {
            human_mark: Mark::Empty,
            ..Config::default()
        };
        assert!(empty_mark.validate().is_err());

        let slow = Config {
            thinking_delay_ms: MAX_THINKING_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(slow.validate().is_err());
    }
}

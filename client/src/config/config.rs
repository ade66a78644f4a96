use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::{LogConfig, TicTacToeConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, otherwise the config file next to the executable.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::ConfigError;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_common::games::tictactoe::Mark;
    use tictactoe_common::logger::LogLevel;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = Config {
            tictactoe: TicTacToeConfig {
                human_mark: Mark::O,
                show_hints: true,
            },
            log: LogConfig {
                level: LogLevel::Debug,
                prefix: Some("Client".to_string()),
            },
        };
        let file_path = get_temp_file_path();

        get_config_manager(Some(file_path.clone()))
            .set_config(&config)
            .unwrap();
        let loaded = get_config_manager(Some(file_path.clone()))
            .get_config()
            .unwrap();

        assert_eq!(config, loaded);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(&file_path)
            .set_config_content("tictactoe:\n  human_mark: O\n")
            .unwrap();

        let loaded = get_config_manager(Some(file_path.clone()))
            .get_config()
            .unwrap();

        assert_eq!(loaded.tictactoe.human_mark, Mark::O);
        assert!(!loaded.tictactoe.show_hints);
        assert_eq!(loaded.log, LogConfig::default());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_empty_human_mark_cant_be_read() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(&file_path)
            .set_config_content("tictactoe:\n  human_mark: Empty\n")
            .unwrap();

        let result = get_config_manager(Some(file_path.clone())).get_config();

        assert!(matches!(result, Err(ConfigError::Validation(_))));
        let _ = std::fs::remove_file(file_path);
    }
}

use serde::{Deserialize, Serialize};
use tictactoe_core::config::{load_yaml_config, Validate};
use tictactoe_core::Difficulty;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    #[serde(default = "default_highlight")]
    pub highlight_winning_line: bool,
}

fn default_highlight() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Impossible,
            seed: None,
            highlight_winning_line: true,
        }
    }
}

pub fn load_config(path: &str) -> Result<Config, String> {
    Ok(load_yaml_config(path)?.unwrap_or_default())
}

use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Loads a YAML config file. A missing file is not an error; the caller
/// falls back to its `Default`.
pub fn load_yaml_config<TConfig>(path: &str) -> Result<Option<TConfig>, String>
where
    TConfig: for<'de> Deserialize<'de> + Validate,
{
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(format!("Failed to read config file {}: {}", path, e)),
    };

    let config: TConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(Some(config))
}

pub fn save_yaml_config<TConfig>(path: &str, config: &TConfig) -> Result<(), String>
where
    TConfig: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, content).map_err(|e| format!("Failed to write config file {}: {}", path, e))
}

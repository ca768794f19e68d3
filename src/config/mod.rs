use std::path::PathBuf;

use serde_derive::Deserialize;

use crate::tee::Result;

#[derive(Clone, Deserialize)]
pub struct LoggingSettings {
    pub save_as: String,
    pub path: String,
    pub timestamp_console: bool,
    pub timestamp_file: bool,
}

#[derive(Clone, Deserialize)]
pub struct Config {
    pub logging: LoggingSettings,
}

pub fn load_config(path: PathBuf) -> Result<Config> {
    let config = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&config)?)
}

pub fn load_config_relative(path: &str) -> Result<Config> {
    let current_dir = std::env::current_dir()?;
    load_config(current_dir.join(path))
}

use std::fs::File;

use serde::Deserialize;
use thiserror::Error;

use crate::{api::ApiConfig, app::AppConfig, db::DbConfig, log::LogConfig};

pub mod api;
pub mod app;
pub mod db;
pub mod log;

pub const ENV_DB_PATH: &str = "PORTFOLIO_DB_PATH";
pub const ENV_PORT: &str = "PORTFOLIO_PORT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to open config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("environment variable {name} has an invalid value {value:?}")]
    Env { name: &'static str, value: String },
}

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    app: AppConfig,
    #[serde(default)]
    log: LogConfig,
    #[serde(default)]
    db: DbConfig,
    #[serde(default)]
    api: ApiConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Applies the storage location and listening port overrides.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DB_PATH) {
            if !path.trim().is_empty() {
                self.db.sqlite_mut().set_path(path.trim());
            }
        }

        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.api.web_mut().set_port(port),
                Err(_) => {
                    return Err(ConfigError::Env {
                        name: ENV_PORT,
                        value: port,
                    })
                }
            }
        }

        Ok(())
    }
}

/// Reads the YAML file at `path`, then applies environment overrides.
pub fn from_path(path: &str) -> Result<Config, ConfigError> {
    let file = File::open(path)?;
    let mut config = serde_yaml::from_reader::<_, Config>(file)?;
    config.apply_overrides(|name| std::env::var(name).ok())?;
    Ok(config)
}

/// Built-in defaults plus environment overrides, for running without a file.
pub fn from_env() -> Result<Config, ConfigError> {
    let mut config = Config::default();
    config.apply_overrides(|name| std::env::var(name).ok())?;
    Ok(config)
}

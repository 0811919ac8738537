use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Address the HTTP listener binds to.
    pub bind_address: String,

    /// Directory holding `departments.json` and `students.json`; seeding is skipped when unset.
    pub seed_data_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            seed_data_dir: std::env::var("SEED_DATA_DIR").ok().map(PathBuf::from),
        })
    }
}

use crate::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub server: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("HENRIK_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "HENRIK_API_KEY not found in .env file".to_string(),
            )
        })?;

        let server = env::var("VALO_SERVER").unwrap_or_else(|_| "eu".to_string());

        Ok(Config { api_key, server })
    }
}

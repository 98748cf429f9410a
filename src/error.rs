use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("API returned status {0}")]
    ApiStatus(u16),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No competitive match history found for this player")]
    NoMatchHistory,

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Unparseable match timestamp: {0}")]
    TimestampError(String),
}

use config::ConfigError;
use thiserror::Error;

// Core internal errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Upstream responded with status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },
    #[error("Validation error: {0}")]
    Validation(String),
}

use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::error::AppError;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    #[serde(default = "default_ifsc_api_base_url")]
    pub ifsc_api_base_url: String,
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
    #[serde(default = "default_copy_buttons")]
    pub copy_buttons: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            ifsc_api_base_url: default_ifsc_api_base_url(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            copy_buttons: default_copy_buttons(),
        }
    }
}

impl AppConfig {
    /// Parsed upstream base URL. Must be an absolute http(s) URL.
    pub fn api_base_url(&self) -> Result<Url, AppError> {
        let url = Url::parse(&self.ifsc_api_base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(AppError::Validation(format!(
                "ifsc_api_base_url must use http or https, got {scheme}"
            ))),
        }
    }

    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

const fn default_http_port() -> u16 {
    3000
}

fn default_ifsc_api_base_url() -> String {
    "https://ifsclookup-api.onrender.com".to_string()
}

const fn default_upstream_timeout_secs() -> u64 {
    10
}

const fn default_copy_buttons() -> bool {
    true
}

pub fn get_config() -> Result<AppConfig, AppError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    let config: AppConfig = config.try_deserialize()?;

    // Fail at startup rather than on the first lookup.
    config.api_base_url()?;
    if config.upstream_timeout_secs == 0 {
        return Err(AppError::Validation(
            "upstream_timeout_secs must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_api() {
        let config = AppConfig::default();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.upstream_timeout(), Duration::from_secs(10));
        assert!(config.copy_buttons);
        assert_eq!(
            config.api_base_url().map(|u| u.host_str().map(String::from)).ok().flatten(),
            Some("ifsclookup-api.onrender.com".to_string())
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = AppConfig {
            ifsc_api_base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.api_base_url(), Err(AppError::Validation(_))));

        let config = AppConfig {
            ifsc_api_base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.api_base_url(), Err(AppError::Url(_))));
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::{error::AppError, utils::config::AppConfig};

use super::record::BranchRecord;

/// Outcome of a successful round trip to the branch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchLookup {
    Found(BranchRecord),
    NotFound,
}

/// Source of branch records keyed by IFSC code.
#[async_trait]
pub trait BranchDirectory: Send + Sync {
    /// Look up a single code. Implementations must make at most one upstream
    /// request per call and must not cache.
    async fn lookup(&self, code: &str) -> Result<BranchLookup, AppError>;
}

/// Branch directory backed by the public IFSC REST API.
#[derive(Clone, Debug)]
pub struct HttpBranchDirectory {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBranchDirectory {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::ClientBuilder::new().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Self::new(config.api_base_url()?, config.upstream_timeout())
    }

    /// `{base}/ifsc/{code}` with `code` kept as one percent-encoded segment.
    pub fn lookup_url(&self, code: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::Validation(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .push("ifsc")
            .push(code);
        Ok(url)
    }
}

#[async_trait]
impl BranchDirectory for HttpBranchDirectory {
    async fn lookup(&self, code: &str) -> Result<BranchLookup, AppError> {
        let url = self.lookup_url(code)?;
        let response = self.client.get(url.clone()).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(BranchLookup::NotFound),
            status if status.is_success() => {
                let record = response.json::<BranchRecord>().await?;
                Ok(BranchLookup::Found(record))
            }
            status => Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}

/// Resolve a code to a record, folding every failure into `None`.
///
/// Not-found and upstream failures are indistinguishable to the caller; only
/// the latter is logged.
pub async fn resolve_branch(directory: &dyn BranchDirectory, code: &str) -> Option<BranchRecord> {
    match directory.lookup(code).await {
        Ok(BranchLookup::Found(record)) => {
            debug!(%code, "Branch lookup succeeded");
            Some(record)
        }
        Ok(BranchLookup::NotFound) => {
            debug!(%code, "Branch lookup returned not found");
            None
        }
        Err(err) => {
            warn!(%code, error = %err, "Error fetching branch data");
            None
        }
    }
}

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::Request,
    response::Response,
    Router,
};
use common::{
    branch::{BranchDirectory, BranchLookup, BranchRecord},
    error::AppError,
    utils::config::AppConfig,
};
use tower::ServiceExt;

use crate::{html_routes, html_state::HtmlState};

enum Outcome {
    Found(BranchRecord),
    NotFound,
    Failing,
}

/// In-process directory that records every code it is asked for.
pub struct FakeDirectory {
    outcome: Outcome,
    calls: Mutex<Vec<String>>,
}

impl FakeDirectory {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn found(record: BranchRecord) -> Self {
        Self::with_outcome(Outcome::Found(record))
    }

    pub fn not_found() -> Self {
        Self::with_outcome(Outcome::NotFound)
    }

    pub fn failing() -> Self {
        Self::with_outcome(Outcome::Failing)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl BranchDirectory for FakeDirectory {
    async fn lookup(&self, code: &str) -> Result<BranchLookup, AppError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(code.to_string());
        }
        match &self.outcome {
            Outcome::Found(record) => Ok(BranchLookup::Found(record.clone())),
            Outcome::NotFound => Ok(BranchLookup::NotFound),
            Outcome::Failing => Err(AppError::UpstreamStatus {
                status: 500,
                url: format!("http://upstream.test/ifsc/{code}"),
            }),
        }
    }
}

pub fn test_router(config: AppConfig, directory: Arc<dyn BranchDirectory>) -> Router {
    let state = HtmlState::new_with_resources(config, directory, None);
    html_routes(&state).with_state(state)
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router response")
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

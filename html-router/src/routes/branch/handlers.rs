use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::branch::{resolve_branch, BranchRecord, BranchView};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::{
    html_state::HtmlState,
    middlewares::response_middleware::TemplateResponse,
    utils::clipboard::{ClipboardCapability, CopyButton},
};

#[derive(Serialize)]
pub struct BranchPageData {
    branch: BranchView,
    copy_ifsc: Option<CopyButton>,
    copy_micr: Option<CopyButton>,
}

impl BranchPageData {
    pub fn new(record: &BranchRecord, clipboard: ClipboardCapability) -> Self {
        Self {
            branch: record.to_view(),
            copy_ifsc: clipboard.copy_button("IFSC", record.ifsc.as_deref()),
            copy_micr: clipboard.copy_button("MICR", record.micr.as_deref()),
        }
    }
}

/// `/ifsc/{code}` with `code` as one percent-encoded path segment.
pub fn detail_path(code: &str) -> String {
    Url::parse("http://localhost/")
        .ok()
        .and_then(|mut url| {
            url.path_segments_mut().ok()?.clear().push("ifsc").push(code);
            Some(url.path().to_string())
        })
        .unwrap_or_else(|| "/".to_string())
}

fn not_found_page() -> TemplateResponse {
    TemplateResponse::new_template("branch/not_found.html", ()).with_status(StatusCode::NOT_FOUND)
}

pub async fn branch_detail_handler(
    State(state): State<HtmlState>,
    code: Result<Path<String>, PathRejection>,
) -> impl IntoResponse {
    let code = match code {
        Ok(Path(code)) => code,
        Err(rejection) => {
            debug!(error = %rejection, "Unusable IFSC path segment");
            return not_found_page();
        }
    };

    match resolve_branch(state.branches.as_ref(), &code).await {
        Some(record) => TemplateResponse::new_template(
            "branch/detail.html",
            BranchPageData::new(&record, state.clipboard),
        ),
        // Unknown codes and upstream outages render the same panel.
        None => not_found_page(),
    }
}

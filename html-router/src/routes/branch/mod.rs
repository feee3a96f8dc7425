mod handlers;

use axum::{extract::FromRef, routing::get, Router};
pub use handlers::{branch_detail_handler, detail_path, BranchPageData};

use crate::html_state::HtmlState;

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    HtmlState: FromRef<S>,
{
    Router::new().route("/ifsc/{code}", get(branch_detail_handler))
}

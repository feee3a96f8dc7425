use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    Extension,
};
use common::utils::template_engine::{ProvidesTemplateEngine, Value};
use minijinja::context;
use serde::Serialize;
use tracing::error;

use crate::html_state::HtmlState;

/// Title used by every page that does not set its own.
pub const DEFAULT_TITLE: &str = "IFSC Lookup | Find Bank Branch Details Instantly";
pub const DEFAULT_DESCRIPTION: &str = "Search and find any bank branch's IFSC code, address, contact, and more. Fast and free IFSC lookup for all Indian banks.";

pub trait ProvidesHtmlState {
    fn html_state(&self) -> &HtmlState;
}

#[derive(Clone, Debug)]
pub enum TemplateKind {
    Full(String),
    Error,
    Redirect(String),
}

#[derive(Clone)]
pub struct TemplateResponse {
    template_kind: TemplateKind,
    status: StatusCode,
    context: Value,
}

impl TemplateResponse {
    pub fn new_template<T: Serialize>(name: impl Into<String>, context: T) -> Self {
        Self {
            template_kind: TemplateKind::Full(name.into()),
            status: StatusCode::OK,
            context: Value::from_serialize(&context),
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn error(status: StatusCode, title: &str, description: &str) -> Self {
        let ctx = context! {
            status_code => status.as_u16(),
            title => title,
            description => description
        };
        Self {
            template_kind: TemplateKind::Error,
            status,
            context: ctx,
        }
    }

    pub fn not_found() -> Self {
        Self::error(
            StatusCode::NOT_FOUND,
            "Page Not Found",
            "The page you're looking for doesn't exist or was removed.",
        )
    }

    pub fn redirect(path: impl Into<String>) -> Self {
        Self {
            template_kind: TemplateKind::Redirect(path.into()),
            status: StatusCode::SEE_OTHER,
            context: Value::from_serialize(()),
        }
    }
}

impl IntoResponse for TemplateResponse {
    fn into_response(self) -> Response {
        Extension(self).into_response()
    }
}

#[derive(Serialize)]
struct ContextWrapper<'a> {
    default_title: &'a str,
    default_description: &'a str,
    clipboard_enabled: bool,
    #[serde(flatten)]
    context: HashMap<String, Value>,
}

fn context_to_map(value: &Value) -> Result<HashMap<String, Value>, minijinja::value::ValueKind> {
    match value.kind() {
        minijinja::value::ValueKind::Map => {
            let mut map = HashMap::new();
            if let Ok(keys) = value.try_iter() {
                for key in keys {
                    if let Ok(val) = value.get_item(&key) {
                        map.insert(key.to_string(), val);
                    }
                }
            }
            Ok(map)
        }
        minijinja::value::ValueKind::None | minijinja::value::ValueKind::Undefined => {
            Ok(HashMap::new())
        }
        other => Err(other),
    }
}

/// Renders any [`TemplateResponse`] left in the response extensions by a handler.
pub async fn with_template_response<S>(
    State(state): State<S>,
    req: Request,
    next: Next,
) -> Response
where
    S: ProvidesTemplateEngine + ProvidesHtmlState + Clone + Send + Sync + 'static,
{
    let response = next.run(req).await;

    let Some(template_response) = response.extensions().get::<TemplateResponse>().cloned() else {
        return response;
    };

    let name = match &template_response.template_kind {
        TemplateKind::Full(name) => name.as_str(),
        TemplateKind::Error => "errors/error.html",
        TemplateKind::Redirect(path) => return Redirect::to(path).into_response(),
    };

    let context_map = match context_to_map(&template_response.context) {
        Ok(map) => map,
        Err(kind) => {
            error!(
                "Template context must be a map or unit, got kind={:?} for template_kind={:?}",
                kind, template_response.template_kind
            );
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response();
        }
    };

    let context = ContextWrapper {
        default_title: DEFAULT_TITLE,
        default_description: DEFAULT_DESCRIPTION,
        clipboard_enabled: state.html_state().clipboard.is_interactive(),
        context: context_map,
    };

    match state
        .template_engine()
        .render(name, &Value::from_serialize(&context))
    {
        Ok(html) => (template_response.status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render template '{}': {:?}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(fallback_error())).into_response()
        }
    }
}

fn fallback_error() -> String {
    r#"
    <html>
        <body>
            <div class="container">
                <h1>Error</h1>
                <p>Sorry, something went wrong displaying this page.</p>
            </div>
        </body>
    </html>
    "#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_carries_status() {
        let response = TemplateResponse::not_found();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(matches!(response.template_kind, TemplateKind::Error));
        assert_eq!(
            response
                .context
                .get_attr("title")
                .ok()
                .and_then(|v| v.as_str().map(String::from)),
            Some("Page Not Found".to_string())
        );
    }

    #[test]
    fn context_map_accepts_unit_and_rejects_scalars() {
        assert!(context_to_map(&Value::from_serialize(())).is_ok_and(|m| m.is_empty()));
        assert!(context_to_map(&Value::from(3)).is_err());

        let map = context_to_map(&context! { code => "SBIN0000628" }).unwrap_or_default();
        assert_eq!(
            map.get("code").and_then(|v| v.as_str().map(String::from)),
            Some("SBIN0000628".to_string())
        );
    }
}

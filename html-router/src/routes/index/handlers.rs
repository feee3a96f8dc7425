use std::{fmt, str::FromStr};

use axum::{extract::Query, response::IntoResponse};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{middlewares::response_middleware::TemplateResponse, routes::branch::detail_path};

/// Browser-side hint only: 4 letters, a literal `0`, then 6 alphanumerics.
pub const IFSC_INPUT_PATTERN: &str = "[A-Za-z]{4}0[A-Za-z0-9]{6}";
pub const IFSC_LENGTH: usize = 11;

const EXAMPLE_CODES: [&str; 3] = ["HDFC0000060", "ICIC0000104", "KKBK0000631"];

/// Serde deserialization decorator to map empty Strings to None,
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ifsc: Option<String>,
}

#[derive(Serialize)]
pub struct IndexPageData {
    input_pattern: &'static str,
    input_length: usize,
    examples: &'static [&'static str],
}

pub async fn index_handler() -> impl IntoResponse {
    TemplateResponse::new_template(
        "index.html",
        IndexPageData {
            input_pattern: IFSC_INPUT_PATTERN,
            input_length: IFSC_LENGTH,
            examples: &EXAMPLE_CODES,
        },
    )
}

/// Form target for browsers without script: redirect to the uppercased detail route.
pub async fn search_handler(Query(params): Query<SearchParams>) -> impl IntoResponse {
    match params.ifsc {
        Some(code) => TemplateResponse::redirect(detail_path(&code.to_uppercase())),
        None => TemplateResponse::redirect("/"),
    }
}

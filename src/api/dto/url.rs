//! DTOs for the `/url` endpoints.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors};

use crate::domain::entities::UrlRecord;

/// Allowed characters for caller-chosen aliases.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("alias regex is valid"));

/// Body of `POST /url`.
///
/// A missing `url` decodes as an empty string so it is reported as a
/// validation failure rather than a decode failure.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    #[validate(url)]
    pub url: String,

    /// Optional alias; generated when absent or empty.
    #[validate(length(max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX"))]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// Envelope returned by `POST /url`.
///
/// Duplicate aliases and invalid input are reported here with HTTP 200, not
/// with an error status.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: ResponseStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SaveResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            error: None,
            alias: Some(alias.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error: Some(message.into()),
            alias: None,
        }
    }
}

/// Body of `GET /url/{alias}/info`.
#[derive(Debug, Serialize)]
pub struct UrlInfoResponse {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl From<UrlRecord> for UrlInfoResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            alias: record.alias,
            url: record.url,
        }
    }
}

/// Renders validation errors as one human-readable line.
///
/// Fields are listed in alphabetical order, one message per field:
/// `field URL is a required field, field Alias is not valid`.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field = field.to_string();
            let name = display_name(&field);
            let has = |code: &str| errs.iter().any(|e| e.code == code);
            let message = if has("required") {
                format!("field {name} is a required field")
            } else if has("url") {
                format!("field {name} is not a valid URL")
            } else {
                format!("field {name} is not valid")
            };
            (field, message)
        })
        .collect();

    fields.sort();

    fields
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_name(field: &str) -> String {
    if field == "url" {
        return "URL".to_string();
    }

    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

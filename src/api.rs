//! Request handling for the calculate endpoint.
//!
//! This is the transport-facing layer: it decodes a JSON request body, runs
//! the calculator, and chooses the status code and JSON response body. It has
//! no network listener of its own; a server wraps `handle`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculator::{CalcError, calculate, format_result};

/// Route the calculate endpoint is served on.
pub const CALCULATE_ROUTE: &str = "/api/v1/calculate";

/// Request body: `{"expression": "..."}`.
///
/// A missing or `null` expression decodes as empty.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CalculateRequest {
    #[serde(default)]
    pub expression: Option<String>,
}

/// Response body. Exactly one of the fields is set.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CalculateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculateResponse {
    fn result(result: String) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }
}

/// How calculation errors map to HTTP statuses.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StatusMapping {
    /// Every calculation error is the caller's fault: 422 with the error message.
    #[default]
    ClientErrors,
    /// Only an empty expression is 422; everything else is an opaque 500.
    Legacy,
}

/// Settings for the request handler.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    pub status_mapping: StatusMapping,
}

/// Status code plus JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: CalculateResponse,
}

impl ApiResponse {
    fn new(status: u16, body: CalculateResponse) -> Self {
        Self { status, body }
    }

    /// Check if the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Serialize the body as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

/// Handle one request to the calculate endpoint.
pub fn handle(method: &str, body: &[u8], config: &ApiConfig) -> ApiResponse {
    if method != "POST" {
        debug!(method, "rejecting non-POST request");
        return ApiResponse::new(405, CalculateResponse::error("Method not allowed"));
    }

    let request: CalculateRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "invalid request body");
            return ApiResponse::new(400, CalculateResponse::error("Invalid request body"));
        }
    };

    let expression = request.expression.unwrap_or_default();
    match calculate(&expression) {
        Ok(value) => {
            debug!(expression = %expression, value, "calculated");
            ApiResponse::new(200, CalculateResponse::result(format_result(value)))
        }
        Err(err) => {
            let (status, message) = status_for(&err, config.status_mapping);
            warn!(expression = %expression, error = %err, status, "calculation failed");
            ApiResponse::new(status, CalculateResponse::error(message))
        }
    }
}

/// Pick the status code and client-facing message for a calculation error.
pub fn status_for(err: &CalcError, mapping: StatusMapping) -> (u16, String) {
    match mapping {
        StatusMapping::ClientErrors => match err {
            CalcError::EmptyExpression
            | CalcError::MismatchedParentheses
            | CalcError::InvalidCharacter(_)
            | CalcError::InvalidNumber(_)
            | CalcError::InsufficientOperands(_)
            | CalcError::DivisionByZero
            | CalcError::InvalidOperation(_)
            | CalcError::MalformedExpression => (422, err.to_string()),
        },
        StatusMapping::Legacy => match err {
            CalcError::EmptyExpression => (422, "Expression is not valid".to_string()),
            _ => (500, "Internal server error".to_string()),
        },
    }
}

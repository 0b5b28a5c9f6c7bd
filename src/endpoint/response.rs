use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::EndpointError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub input: String,
    pub from: String,
    pub to: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

/// Exactly one of the two payload shapes is returned per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationResponse {
    Success(TranslationResult),
    Error(ErrorPayload),
}

impl From<EndpointError> for TranslationResponse {
    fn from(err: EndpointError) -> Self {
        TranslationResponse::Error(ErrorPayload {
            error: err.to_string(),
        })
    }
}

impl IntoResponse for TranslationResponse {
    // Error payloads are sent with 200 as well; clients branch on the body.
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

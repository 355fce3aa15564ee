use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::contact::FieldErrors;
use crate::store::StoreError;
use crate::view::SpecSheetError;

/// Request failure, rendered as a JSON error body
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Please correct the highlighted fields")]
    Validation(FieldErrors),

    #[error(transparent)]
    SpecSheet(#[from] SpecSheetError),

    /// A page could not load its data; the visitor may retry
    #[error("{0}")]
    PageUnavailable(String),

    #[error("Page not found")]
    PageNotFound(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    retry: bool,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::IdsExhausted(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::SpecSheet(_) => StatusCode::NOT_FOUND,
            ApiError::PageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::PageNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Store(StoreError::NotFound { .. }) => "NOT_FOUND",
            ApiError::Store(StoreError::InvalidId(_)) => "INVALID_ID",
            ApiError::Store(StoreError::IdsExhausted(_)) => "IDS_EXHAUSTED",
            ApiError::Store(StoreError::Unavailable(_)) => "UNAVAILABLE",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::SpecSheet(_) => "NO_SPECIFICATIONS",
            ApiError::PageUnavailable(_) => "FETCH_FAILED",
            ApiError::PageNotFound(_) => "PAGE_NOT_FOUND",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("Request failed: {}", self);
        }
        let body = ErrorBody {
            error: self.to_string(),
            code: self.code(),
            fields: match &self {
                ApiError::Validation(fields) => Some(fields),
                _ => None,
            },
            path: match &self {
                ApiError::PageNotFound(path) => Some(path.as_str()),
                _ => None,
            },
            retry: matches!(self, ApiError::PageUnavailable(_)),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::db::store::StoreError;
use crate::llm::LlmError;

/// Service-level failure taxonomy. Everything a handler can surface
/// maps onto exactly one of these variants.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration Error: {0}")]
    Configuration(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Provider Error: {0}")]
    Provider(#[from] LlmError),

    #[error("Store Error: {0}")]
    Store(#[from] StoreError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Provider(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Configuration(_) | ServiceError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}

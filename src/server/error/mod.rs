//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the only type that crosses
//! the controller boundary; its `IntoResponse` implementation is the single place
//! where error kinds are mapped to status codes and the `{error, message}` body.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error, in practice a failure to bind the listening socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Submitted form failed validation.
    ///
    /// Results in 422 Unprocessable Entity with the validation message.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Request could not be decoded (bad path parameter, undecodable body).
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Error kind reported in the `error` field of the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigErr(_) => "config_error",
            Self::DbErr(_) => "store_error",
            Self::IoErr(_) => "internal_error",
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
            Self::BadRequest(_) => "bad_request",
        }
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::IoErr(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Client errors echo their message. Server errors are logged with full details and
/// answered with a generic message to avoid leaking store internals.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `Validation`
/// - 500 Internal Server Error - For `DbErr`, `ConfigErr` and `IoErr`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.kind().to_string();

        let message = if status.is_server_error() {
            tracing::error!("{}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!("{}: {}", error, self);
            self.to_string()
        };

        (status, Json(ErrorDto { error, message })).into_response()
    }
}

//! Error types for the corredora server.
//!
//! Domain-specific error enums built with `thiserror`, aggregated into a
//! single server `Error` that implements `IntoResponse` for axum handlers.
//! Unexpected errors are logged and surfaced to the operator as a generic
//! message rather than leaking internals.

pub mod config;
pub mod renewal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, renewal::RenewalError},
};

/// Main error type for the corredora server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Renewal workflow error (missing policy, invalid window).
    #[error(transparent)]
    RenewalError(#[from] RenewalError),
    /// Database error (query failures, connection issues, constraint
    /// violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (listener binding, shutdown signals).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::RenewalError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body; the full message goes to the log, not to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

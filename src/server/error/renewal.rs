use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RenewalError {
    #[error("Policy with id {0} not found")]
    PolicyNotFound(i32),
    #[error("Invalid renewal window: {0}")]
    InvalidWindow(String),
}

impl IntoResponse for RenewalError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::PolicyNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidWindow(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

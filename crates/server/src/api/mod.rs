mod inquiry;
mod trips;

pub use inquiry::*;
pub use trips::*;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::dto::ErrorDto;

/// A failure the visitor sees: a status code and one sentence.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorDto {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

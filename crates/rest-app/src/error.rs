use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use sun2000_device::DeviceError;

/// Failures reported to HTTP clients as `{"message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No or invalid API-key provided")]
    Unauthorized,
    #[error("No value for {0}")]
    MissingField(&'static str),
    #[error("Invalid value for {0}")]
    InvalidValue(&'static str),
    #[error("At least one invalid register passed")]
    InvalidRegister,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Reading register {register} failed")]
    DeviceRead {
        register: &'static str,
        #[source]
        source: DeviceError,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::MissingField(_)
            | ApiError::InvalidValue(_)
            | ApiError::InvalidRegister
            | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::DeviceRead { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::DeviceRead { source, .. } => {
                warn!(status = status.as_u16(), error = %source, "{}", self);
            }
            _ => debug!(status = status.as_u16(), "{}", self),
        }
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_carry_compatible_messages() {
        assert_eq!(ApiError::Unauthorized.to_string(), "No or invalid API-key provided");
        assert_eq!(ApiError::MissingField("equipment").to_string(), "No value for equipment");
        assert_eq!(ApiError::MissingField("registers").to_string(), "No value for registers");
        assert_eq!(ApiError::InvalidValue("equipment").to_string(), "Invalid value for equipment");
        assert_eq!(ApiError::InvalidRegister.to_string(), "At least one invalid register passed");
    }

    #[test]
    fn statuses_follow_the_failure_kind() {
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidRegister.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidBody.status(), StatusCode::BAD_REQUEST);
    }
}

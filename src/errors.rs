use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Reasons a lookup could not be started.
///
/// Validation failures are stored on the tracker as a message for display;
/// they are never surfaced as faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Nothing but whitespace was submitted.
    EmptyInput,
    /// Input does not match the E.164-like shape.
    InvalidPhoneFormat,
    /// A lookup is already in flight; re-triggering is disabled until it settles.
    AlreadyPending,
}

impl LookupError {
    /// Whether this error comes from input validation (as opposed to tracker state).
    pub fn is_validation(&self) -> bool {
        matches!(self, LookupError::EmptyInput | LookupError::InvalidPhoneFormat)
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::EmptyInput => write!(f, "Please enter a phone number"),
            LookupError::InvalidPhoneFormat => {
                write!(f, "Please enter a valid phone number (e.g., +1234567890)")
            }
            LookupError::AlreadyPending => write!(f, "A lookup is already in progress"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Application-specific error types.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Resource not found error.
    NotFound(String),
    /// Bad request error (invalid input).
    BadRequest(String),
    /// Request conflicts with the current tracker state.
    Conflict(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and JSON body.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::CONFLICT, msg.clone())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<LookupError> for AppError {
    /// Converts a `LookupError` into an `AppError`.
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::EmptyInput | LookupError::InvalidPhoneFormat => {
                AppError::BadRequest(err.to_string())
            }
            LookupError::AlreadyPending => AppError::Conflict(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages() {
        assert_eq!(LookupError::EmptyInput.to_string(), "Please enter a phone number");
        assert_eq!(
            LookupError::InvalidPhoneFormat.to_string(),
            "Please enter a valid phone number (e.g., +1234567890)"
        );
    }

    #[test]
    fn test_lookup_error_status_mapping() {
        let resp = AppError::from(LookupError::InvalidPhoneFormat).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::from(LookupError::AlreadyPending).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = AppError::NotFound("sample 9".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_every_variant_maps_to_client_error_with_message() {
        for (err, status) in [
            (AppError::NotFound("Sample 9 not found".to_string()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("Sample 9 not found".to_string()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("Sample 9 not found".to_string()), StatusCode::CONFLICT),
        ] {
            let resp = err.into_response();
            assert_eq!(resp.status(), status);
            assert!(resp.status().is_client_error());

            let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
                .await
                .expect("body bytes");
            let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
            assert_eq!(json["error"], "Sample 9 not found");
        }
    }

    #[test]
    fn test_validation_classification() {
        assert!(LookupError::EmptyInput.is_validation());
        assert!(LookupError::InvalidPhoneFormat.is_validation());
        assert!(!LookupError::AlreadyPending.is_validation());
    }
}

//! Error responses.
//!
//! # Responsibilities
//! - Map the two surfaced failure kinds to HTTP status codes
//! - Render them as `{error, message}` JSON bodies
//! - Turn handler panics into 500 responses
//!
//! Panic messages are passed through verbatim.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("The requested resource was not found")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppError::NotFound => "Not Found",
            AppError::Internal(_) => "Something went wrong!",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.title(),
            "message": self.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

/// Fallback for unmatched routes and methods.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Response for a panic caught by `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!(error = %message, "Handler panicked");
    AppError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_shape() {
        let response = not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Not Found", "message": "The requested resource was not found"})
        );
    }

    #[tokio::test]
    async fn test_panic_message_passed_through() {
        let response = handle_panic(Box::new("store exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Something went wrong!", "message": "store exploded"})
        );
    }

    #[tokio::test]
    async fn test_formatted_panic_message() {
        let response = handle_panic(Box::new(format!("bad visitor {}", 7)));
        assert_eq!(body_json(response).await["message"], "bad visitor 7");
    }
}

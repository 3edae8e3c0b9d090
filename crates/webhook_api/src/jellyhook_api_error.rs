//! Helper utilities for returning API errors to webhook callers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Represents an error to send back to the caller (the Jellyfin webhook plugin).
#[derive(Debug, Serialize)]
pub struct JellyhookApiError {
    pub status: u16,
    pub message: String,
}

impl ResponseError for JellyhookApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl JellyhookApiError {
    /// Create a new instance of [JellyhookApiError] with a given [StatusCode].
    /// Before creating a new [JellyhookApiError], check for dedicated methods
    /// to return the appropriate status code.
    pub fn new(message: &str, status: StatusCode) -> Self {
        JellyhookApiError {
            message: String::from(message),
            status: status.as_u16(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }
}

impl Display for JellyhookApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            serde_json::to_string(self)
                .unwrap_or_else(|_| String::from("{ message: \"Fatal Error\" }"))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn error_response_serializes_status_and_message() {
        // Arrange
        let error = JellyhookApiError::bad_request("Data is not json!");

        // Act
        let response = error.error_response();
        let body = to_bytes(response.into_body()).await.unwrap();

        // Assert
        assert_eq!(
            r#"{"status":400,"message":"Data is not json!"}"#,
            std::str::from_utf8(&body).unwrap()
        );
    }

    #[test]
    fn status_code_falls_back_to_500_given_invalid_status() {
        let error = JellyhookApiError {
            status: 42,
            message: String::new(),
        };

        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, error.status_code());
    }
}

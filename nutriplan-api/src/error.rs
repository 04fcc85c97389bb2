use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use log::error;
use nutriplan_report::ReportError;
use serde::Serialize;

/// Failures surfaced by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("report rendering was interrupted")]
    Interrupted(#[from] BlockingError),
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Report(_) | ApiError::Interrupted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidInput(message) => {
                HttpResponse::build(self.status_code()).json(ErrorBody { error: message })
            }
            _ => {
                error!("Request failed: {}", self);
                HttpResponse::build(self.status_code()).json(ErrorBody {
                    error: "internal server error",
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn invalid_input_is_a_client_error() {
        let error = ApiError::InvalidInput("weight must be positive".to_owned());

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, r#"{"error":"weight must be positive"}"#);
    }

    #[actix_web::test]
    async fn report_failures_are_redacted() {
        let error = ApiError::Report(ReportError::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "/var/lib/nutriplan/pdfs",
        )));

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, r#"{"error":"internal server error"}"#);
    }
}

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::data_structs::responses::error_response::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Malformed form payload: {0}")]
    MalformedForm(String),

    #[error("Hit counter unavailable: {0}")]
    HitCounter(#[from] redis::RedisError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::MalformedForm(_) => StatusCode::BAD_REQUEST,
            AppError::HitCounter(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing yml: {0}")]
    Yaml(#[from] yaml_rust::ScanError),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_a_bad_request() {
        let error = AppError::MissingField("email");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Missing required field `email`");
    }

    #[test]
    fn malformed_form_is_a_bad_request() {
        let error = AppError::MalformedForm("expected `=`".to_string());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn hit_counter_failure_is_service_unavailable() {
        let error = AppError::from(redis::RedisError::from((redis::ErrorKind::IoError, "connection refused")));
        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(error.to_string().starts_with("Hit counter unavailable"));
    }
}

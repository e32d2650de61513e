use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use thiserror::Error;

/// Failures reported to the caller of the auth endpoints.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Failed to generate token")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid token")]
    InvalidToken,
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidPayload => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::TokenGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}

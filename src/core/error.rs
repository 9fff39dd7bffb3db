use axum::BoxError;
use axum::http::StatusCode;
use axum::http::header::ToStrError;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Signing secret is empty")]
    EmptySecret,
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("Invalid token")]
    InvalidToken,
    #[error("Expired token")]
    ExpiredToken,
    #[error("Token already used")]
    AlreadyUsed,
    #[error("No credentials provided")]
    NoCredentials,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Header decode error: {0}")]
    HeaderDecode(#[from] ToStrError),
    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self);

        let (status, message) = match self {
            Error::Jwt(_) => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Error::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Error::ExpiredToken => (StatusCode::UNAUTHORIZED, "Expired token"),
            Error::AlreadyUsed => (StatusCode::UNAUTHORIZED, "Token already used"),
            Error::NoCredentials => (StatusCode::UNAUTHORIZED, "No credentials provided"),
            Error::InvalidApiKey => (StatusCode::UNAUTHORIZED, "Invalid API key"),
            Error::HeaderDecode(_) => (StatusCode::UNAUTHORIZED, "Invalid credential header"),
            Error::InvalidMessage(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Invalid message"),
        };

        (status, message).into_response()
    }
}

pub(crate) async fn handle_middleware_errors(err: BoxError) -> (StatusCode, &'static str) {
    tracing::error!("Unhandled error: {:?}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

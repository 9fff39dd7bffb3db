use axum::extract::State;
use axum::{body::Body, extract::Request, http::HeaderMap, http::Response, middleware::Next};

use crate::core::error::Error;
use crate::core::state::AppState;

pub(crate) const API_KEY_HEADER: &str = "x-service-key";
pub(crate) const TOKEN_HEADER: &str = "x-message-token";

fn check_api_key(headers: &HeaderMap, state: &AppState) -> Result<(), Error> {
    let api_key = headers.get(API_KEY_HEADER).ok_or(Error::NoCredentials)?;

    if api_key.to_str()? != state.api_key {
        return Err(Error::InvalidApiKey);
    }

    Ok(())
}

/// Gate for the protected route: the static service key plus a single-use
/// token, both carried in headers. The token is consumed here, before the
/// handler runs, so a retry with the same token fails regardless of what
/// happens downstream.
pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let headers = request.headers();

    check_api_key(headers, &state)?;

    let token = headers.get(TOKEN_HEADER).ok_or(Error::NoCredentials)?;

    let claims = state.registry.verify_and_consume(token.to_str()?)?;

    tracing::debug!("token consumed: {}", claims.jti);

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Lighter gate for read-only introspection: service key only, no token.
pub(crate) async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    check_api_key(request.headers(), &state)?;

    Ok(next.run(request).await)
}

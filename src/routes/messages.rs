use axum::Json;
use axum::extract::Extension;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::core::error::Error;
use crate::token::claims::Claims;
use crate::types::request;
use crate::types::response;

/// The protected operation. By the time this runs the `authorize` middleware
/// has already consumed the caller's token; `claims` carries its identity.
#[instrument(skip_all)]
pub(crate) async fn post(
    Extension(claims): Extension<Claims>,
    Json(message): Json<request::NewMessage>,
) -> Result<impl IntoResponse, Error> {
    message.validate()?;

    tracing::info!(
        "delivering message from {} to {} (token {})",
        message.sender,
        message.to,
        claims.jti
    );

    Ok(Json(response::Receipt::new(&message.to)))
}

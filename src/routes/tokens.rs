use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::response;

#[instrument(skip(state))]
pub(crate) async fn post(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let token = state.issuer.issue()?;

    Ok(Json(response::IssuedToken::new(&token)))
}

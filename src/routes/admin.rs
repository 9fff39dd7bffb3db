use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::response;

#[instrument(skip(state))]
pub(crate) async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let stats = state.registry.stats();

    Ok(Json(response::Stats::new(&stats)))
}

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use log::error;

use crate::{db::Talk, AppState};

#[utoipa::path(
    get,
    path = "/api/talks",
    responses(
        (status = OK, description = "Every talk, newest first", body = Vec<Talk>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read talks")
    ))]
pub async fn all_talks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Talk>>, (StatusCode, String)> {
    state.talks.fetch_all().await.map(Json).map_err(|e| {
        error!("error fetching all talks: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            String::from("Failed to read talks"),
        )
    })
}

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::{templates::talk_list_page, AppState};

use super::server_error;

/// Handler for the full talk list (GET /talks)
pub async fn talk_list_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.talks.fetch_all().await {
        Ok(talks) => Html(talk_list_page(&talks).into_string()).into_response(),
        Err(e) => server_error("error fetching talk list", e),
    }
}

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use super::server_error;
use crate::{homepage::homepage_months, templates::homepage_page, AppState};

/// Handler for the homepage (GET /)
pub async fn home_handler(State(state): State<Arc<AppState>>) -> Response {
    let now = state.clock.now();
    match homepage_months(state.talks.as_ref(), now).await {
        Ok(months) => Html(homepage_page(&months).into_string()).into_response(),
        Err(e) => server_error("error working out homepage months", e),
    }
}

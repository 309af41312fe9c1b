use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::{db::parse_month, templates::talk_selection_page, AppState};

use super::{not_found, server_error, talk_detail::render_talk};

/// Handler for a month of talks (GET /talks/{year}/{month})
///
/// A month with a single talk goes straight to that talk's page.
pub async fn talk_months_handler(
    State(state): State<Arc<AppState>>,
    Path((year, month_name)): Path<(i32, String)>,
) -> Response {
    let Some(month) = parse_month(&month_name) else {
        return not_found(&format!("There is no month called \"{}\".", month_name));
    };

    let mut talks = match state.talks.fetch_talks(year, month).await {
        Ok(talks) => talks,
        Err(e) => return server_error("error fetching talks for month", e),
    };

    if talks.len() == 1 {
        if let Some(talk) = talks.pop() {
            return render_talk(&state, talk).into_response();
        }
    }

    Html(talk_selection_page(year, month, &talks).into_string()).into_response()
}

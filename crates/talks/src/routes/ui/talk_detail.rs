use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::{
    db::{parse_month, Talk},
    templates::{talk_detail_page, TalkPage},
    AppState,
};

use super::{not_found, server_error};

/// Handler for a single talk (GET /talks/{year}/{month}/{key})
pub async fn talk_detail_handler(
    State(state): State<Arc<AppState>>,
    Path((year, month_name, key)): Path<(i32, String, i64)>,
) -> Response {
    let Some(month) = parse_month(&month_name) else {
        return not_found(&format!("There is no month called \"{}\".", month_name));
    };

    match state.talks.fetch_talk(year, month, key).await {
        Ok(Some(talk)) => render_talk(&state, talk).into_response(),
        Ok(None) => not_found(&format!(
            "No talk {} was found for {} {}.",
            key, month, year
        )),
        Err(e) => server_error("error fetching talk", e),
    }
}

/// Talk page with the slides link only when the file is really there
pub(super) fn render_talk(state: &AppState, talk: Talk) -> Html<String> {
    let has_presentation = talk
        .pdf
        .as_deref()
        .is_some_and(|pdf| state.presentations.has_presentation(pdf));

    let page = TalkPage {
        talk,
        has_presentation,
    };
    Html(talk_detail_page(&page).into_string())
}

mod home;
mod talk_detail;
mod talk_list;
mod talk_months;

pub use home::home_handler;
pub use talk_detail::talk_detail_handler;
pub use talk_list::talk_list_handler;
pub use talk_months::talk_months_handler;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::error;

use crate::templates::not_found_page;

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(not_found_page(message).into_string()),
    )
        .into_response()
}

fn server_error(context: &str, err: impl std::fmt::Display) -> Response {
    error!("{}: {}", context, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(String::from("Something went wrong loading talks")),
    )
        .into_response()
}

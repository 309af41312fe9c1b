pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{month_section, talk_card};
pub use layouts::{CurrentPage, PageConfig};
pub use pages::{
    homepage_page, not_found_page, talk_detail_page, talk_list_page, talk_selection_page,
    TalkPage,
};

use time::{format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime};

const TALK_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday] [day padding:none] [month repr:long] [year], [hour]:[minute]"
);
const MONTH_HEADING_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [year]");
const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// "Tuesday 20 June 2023, 18:30"
pub(crate) fn format_talk_date(date: &OffsetDateTime) -> String {
    date.format(TALK_DATE_FORMAT)
        .unwrap_or_else(|_| "Invalid".to_string())
}

/// "June 2023"
pub(crate) fn format_month_heading(date: &OffsetDateTime) -> String {
    date.format(MONTH_HEADING_FORMAT)
        .unwrap_or_else(|_| "Invalid".to_string())
}

/// `YYYY-MM-DD`, comparable as a string
pub(crate) fn format_day(date: &OffsetDateTime) -> String {
    date.format(DAY_FORMAT).unwrap_or_default()
}

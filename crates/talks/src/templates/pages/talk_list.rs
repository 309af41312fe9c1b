use itertools::Itertools;
use maud::{html, Markup};

use crate::db::Talk;
use crate::templates::{
    format_day, format_talk_date,
    layouts::{base, CurrentPage, PageConfig},
};

/// Every talk, grouped by year in the order the repository returned them
pub fn talk_list_page(talks: &[Talk]) -> Markup {
    let config = PageConfig {
        title: "All Talks - PHP Dorset",
        current_page: CurrentPage::Talks,
    };

    base(&config, talk_list_content(talks))
}

pub fn talk_list_content(talks: &[Talk]) -> Markup {
    html! {
        h2 class="title is-4" { "All Talks" }
        @if talks.is_empty() {
            p class="has-text-grey" { "No talks yet." }
        }
        @for (year, year_talks) in &talks.iter().chunk_by(|talk| talk.year) {
            section class="mb-5" data-year=(year) {
                h3 class="title is-5 month-heading" { (year) }
                table class="table is-fullwidth is-striped" {
                    thead {
                        tr {
                            th { "Date" }
                            th { "Talk" }
                            th { "Speaker" }
                        }
                    }
                    tbody {
                        @for talk in year_talks {
                            tr {
                                td {
                                    time datetime=(format_day(&talk.date)) {
                                        (format_talk_date(&talk.date))
                                    }
                                }
                                td { a href=(talk.path()) { (talk.title) } }
                                td { (talk.speaker) }
                            }
                        }
                    }
                }
            }
        }
    }
}

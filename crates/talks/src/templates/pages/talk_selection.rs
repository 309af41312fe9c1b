use maud::{html, Markup};
use time::Month;

use crate::db::Talk;
use crate::templates::{
    fragments::talk_card,
    layouts::{base, CurrentPage, PageConfig},
};

/// Lists the talks of a month that has more than one (or none)
pub fn talk_selection_page(year: i32, month: Month, talks: &[Talk]) -> Markup {
    let heading = format!("Talks in {} {}", month, year);
    let config = PageConfig {
        title: &format!("{} - PHP Dorset", heading),
        current_page: CurrentPage::Talks,
    };

    base(
        &config,
        html! {
            h2 class="title is-4" { (heading) }
            @if talks.is_empty() {
                p class="has-text-grey" { "No talks found for " (month) " " (year) "." }
            } @else {
                @for talk in talks {
                    (talk_card(talk, None))
                }
            }
        },
    )
}

use maud::{html, Markup};
use time::OffsetDateTime;

use crate::homepage::MonthBucket;
use crate::templates::{format_month_heading, talk_card};

pub fn month_section(bucket: &MonthBucket, now: OffsetDateTime) -> Markup {
    html! {
        section class="mb-5 month" data-month=(bucket.key) {
            h2 class="title is-4 month-heading" { (format_month_heading(&bucket.month)) }
            @if bucket.talks.is_empty() {
                p class="has-text-grey" { "No talks scheduled." }
            } @else {
                @for talk in &bucket.talks {
                    (talk_card(talk, Some(now)))
                }
            }
        }
    }
}

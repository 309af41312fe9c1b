use maud::{html, Markup};

use crate::homepage::HomepageMonths;
use crate::templates::{
    fragments::month_section,
    layouts::{base, CurrentPage, PageConfig},
};

/// Homepage - the selected months, in the order they were chosen
pub fn homepage_page(months: &HomepageMonths) -> Markup {
    let config = PageConfig {
        title: "PHP Dorset - Talks",
        current_page: CurrentPage::Home,
    };

    base(&config, homepage_content(months))
}

pub fn homepage_content(months: &HomepageMonths) -> Markup {
    html! {
        p class="is-size-7 has-text-grey mb-4" data-current-date=(months.current_date) {
            "Today is " (months.current_date)
        }
        @for bucket in &months.buckets {
            (month_section(bucket, months.now))
        }
    }
}

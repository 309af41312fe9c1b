use maud::{html, Markup};

use crate::templates::layouts::{base, CurrentPage, PageConfig};

pub fn not_found_page(message: &str) -> Markup {
    let config = PageConfig {
        title: "Not Found - PHP Dorset",
        current_page: CurrentPage::Other,
    };

    base(
        &config,
        html! {
            div class="notification is-warning" {
                h2 class="title is-4" { "Not Found" }
                p { (message) }
                a href="/talks" class="button is-primary mt-4" { "Browse all talks" }
            }
        },
    )
}

use maud::{html, Markup};

use crate::templates::layouts::CurrentPage;

pub fn navbar(current_page: CurrentPage) -> Markup {
    html! {
        nav class="navbar mb-4" role="navigation" aria-label="main navigation" {
            div id="navbarMenu" class="navbar-menu is-active" {
                div class="navbar-start" {
                    a href="/" class=(nav_item_class(current_page, CurrentPage::Home)) {
                        span class="icon-text" {
                            span class="icon" { (home_icon()) }
                            span { "Home" }
                        }
                    }

                    a href="/talks" class=(nav_item_class(current_page, CurrentPage::Talks)) {
                        span class="icon-text" {
                            span class="icon" { (talks_icon()) }
                            span { "Talks" }
                        }
                    }
                }
            }
        }
    }
}

fn nav_item_class(current: CurrentPage, page: CurrentPage) -> &'static str {
    if current == page {
        "navbar-item is-active"
    } else {
        "navbar-item"
    }
}

fn home_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" {}
            polyline points="9 22 9 12 15 12 15 22" {}
        }
    }
}

fn talks_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            rect x="3" y="4" width="18" height="18" rx="2" ry="2" {}
            line x1="16" y1="2" x2="16" y2="6" {}
            line x1="8" y1="2" x2="8" y2="6" {}
            line x1="3" y1="10" x2="21" y2="10" {}
        }
    }
}

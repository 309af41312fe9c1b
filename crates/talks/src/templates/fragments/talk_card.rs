use maud::{html, Markup};
use time::OffsetDateTime;

use crate::db::Talk;
use crate::templates::{format_day, format_talk_date};

/// Summary box for one talk, tagged "Upcoming" when it starts at or after `now`
pub fn talk_card(talk: &Talk, now: Option<OffsetDateTime>) -> Markup {
    let upcoming = now.is_some_and(|now| talk.is_upcoming(now));

    html! {
        div class="box talk-card" data-talk=(talk.path()) {
            article class="media" {
                @if let Some(avatar) = &talk.avatar {
                    figure class="media-left talk-avatar" {
                        p class="image is-64x64" {
                            img src=(avatar) alt=(talk.speaker);
                        }
                    }
                }
                div class="media-content" {
                    p class="title is-5 mb-1" {
                        a href=(talk.path()) { (talk.title) }
                        @if upcoming {
                            span class="tag is-success is-light ml-2" { "Upcoming" }
                        }
                    }
                    p class="subtitle is-6 mb-2" {
                        (talk.speaker)
                        " · "
                        time datetime=(format_day(&talk.date)) { (format_talk_date(&talk.date)) }
                    }
                    @if !talk.summary.is_empty() {
                        p class="is-size-7" { (excerpt(&talk.summary, 280)) }
                    }
                }
            }
        }
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(space) => format!("{}…", &cut[..space]),
        None => format!("{}…", cut),
    }
}

use maud::{html, Markup};

use crate::db::{Cue, Talk};
use crate::templates::{
    format_day, format_month_heading, format_talk_date,
    layouts::{base, CurrentPage, PageConfig},
};

/// Everything the talk page needs
pub struct TalkPage {
    pub talk: Talk,
    /// Slides exist under the document root and can be linked
    pub has_presentation: bool,
}

/// Talk detail page - speaker, abstract, media and links for one talk
pub fn talk_detail_page(page: &TalkPage) -> Markup {
    let config = PageConfig {
        title: &format!("{} - PHP Dorset", page.talk.title),
        current_page: CurrentPage::Talks,
    };

    base(&config, talk_detail_content(page))
}

pub fn talk_detail_content(page: &TalkPage) -> Markup {
    let talk = &page.talk;

    html! {
        a href=(talk.month_path()) class="button is-light mb-4" {
            "More from " (format_month_heading(&talk.date))
        }

        div class="columns" {
            div class="column is-two-thirds" {
                h2 class="title is-3" { (talk.title) }
                p class="subtitle is-5" {
                    time datetime=(format_day(&talk.date)) { (format_talk_date(&talk.date)) }
                }

                div class="content" {
                    @for paragraph in talk.summary.split("\n\n").filter(|p| !p.trim().is_empty()) {
                        p { (paragraph.trim()) }
                    }
                }

                div class="buttons" {
                    @if let Some(video) = &talk.video {
                        a href=(video) class="button is-link" target="_blank" { "Watch the video" }
                    }
                    @if page.has_presentation {
                        @if let Some(pdf) = &talk.pdf {
                            a href=(pdf) class="button is-info" download { "Download the slides" }
                        }
                    }
                    @if let Some(feedback) = &talk.feedback_url {
                        a href=(feedback) class="button is-success is-light" target="_blank" {
                            "Leave feedback"
                        }
                    }
                }

                @if !talk.cues.is_empty() {
                    div class="box" {
                        h3 class="title is-6 mb-3" { "Chapters" }
                        ul class="cue-list" {
                            @for cue in &talk.cues {
                                li {
                                    @if let Some(video) = &talk.video {
                                        a href=(cue_link(video, cue)) target="_blank" {
                                            time { (cue.timestamp()) }
                                        }
                                    } @else {
                                        time { (cue.timestamp()) }
                                    }
                                    (cue.label)
                                }
                            }
                        }
                    }
                }

                @if !talk.resources.is_empty() {
                    div class="box" {
                        h3 class="title is-6 mb-3" { "Resources" }
                        ul {
                            @for resource in &talk.resources {
                                li { a href=(resource.url) target="_blank" { (resource.title) } }
                            }
                        }
                    }
                }
            }

            div class="column" {
                div class="box has-text-centered" {
                    @if let Some(avatar) = &talk.avatar {
                        figure class="image is-128x128 talk-avatar mx-auto mb-3" {
                            img src=(avatar) alt=(talk.speaker);
                        }
                    }
                    p class="title is-5" { (talk.speaker) }
                    @if let Some(handle) = &talk.twitter {
                        a href=(format!("https://twitter.com/{}", handle.trim_start_matches('@')))
                          target="_blank" {
                            "@" (handle.trim_start_matches('@'))
                        }
                    }
                }
            }
        }
    }
}

/// Video url that starts playback at the cue
fn cue_link(video: &str, cue: &Cue) -> String {
    let separator = if video.contains('?') { '&' } else { '?' };
    format!("{}{}t={}s", video, separator, cue.seconds)
}

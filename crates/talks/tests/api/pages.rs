use crate::helpers::{mock_talk, query_error, spawn_app, MockTalkStore, SLIDES_PATH};
use axum::http::StatusCode;
use std::sync::Arc;
use time::{macros::datetime, Month};

const JULY: &str = "data-month=\"2023-07-01T00:00:00+00:00\"";
const JUNE: &str = "data-month=\"2023-06-01T00:00:00+00:00\"";
const MAY: &str = "data-month=\"2023-05-01T00:00:00+00:00\"";

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{} not found in page", needle))
}

/// Once this month's talks are over the homepage leads with next month
#[tokio::test]
async fn homepage_leads_with_next_month_after_this_months_talks() {
    let mut talks = MockTalkStore::new();
    talks
        .expect_fetch_talks()
        .withf(|year, _| *year == 2023)
        .times(3)
        .returning(|_, month| {
            Ok(match month {
                Month::July => vec![mock_talk(1, "Next month", datetime!(2023-07-19 18:30 UTC))],
                Month::June => vec![mock_talk(1, "Already done", datetime!(2023-06-10 18:00 UTC))],
                _ => vec![],
            })
        });

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(position(&html, JULY) < position(&html, JUNE));
    assert!(position(&html, JUNE) < position(&html, MAY));
    assert!(html.contains("Next month"));
    assert!(html.contains("Already done"));
    assert!(html.contains("Today is 2023-06-15"));
}

#[tokio::test]
async fn homepage_hides_next_month_while_a_talk_is_upcoming() {
    let mut talks = MockTalkStore::new();
    talks.expect_fetch_talks().times(3).returning(|_, month| {
        Ok(match month {
            Month::July => vec![mock_talk(1, "Next month", datetime!(2023-07-19 18:30 UTC))],
            Month::June => vec![mock_talk(1, "Coming up", datetime!(2023-06-20 18:00 UTC))],
            _ => vec![],
        })
    });

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains(JULY));
    assert!(!html.contains("Next month"));
    assert!(position(&html, JUNE) < position(&html, MAY));
    assert!(html.contains("Upcoming"));
}

/// A talk that started earlier today is over for both the month order and its card
#[tokio::test]
async fn talk_earlier_today_is_not_marked_upcoming() {
    let mut talks = MockTalkStore::new();
    talks.expect_fetch_talks().times(3).returning(|_, month| {
        Ok(match month {
            Month::June => vec![mock_talk(1, "Breakfast talk", datetime!(2023-06-15 08:00 UTC))],
            _ => vec![],
        })
    });

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(position(&html, JULY) < position(&html, JUNE));
    assert!(html.contains("Breakfast talk"));
    assert!(!html.contains("Upcoming"));
}

#[tokio::test]
async fn homepage_treats_repository_errors_as_empty_months() {
    let mut talks = MockTalkStore::new();
    talks
        .expect_fetch_talks()
        .times(3)
        .returning(|_, _| Err(query_error()));

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(JULY));
    assert!(html.contains(JUNE));
    assert!(html.contains(MAY));
    assert_eq!(html.matches("No talks scheduled.").count(), 3);
}

#[tokio::test]
async fn homepage_months_roll_over_the_year() {
    let mut talks = MockTalkStore::new();
    talks
        .expect_fetch_talks()
        .withf(|year, month| {
            matches!(
                (*year, *month),
                (2024, Month::January) | (2023, Month::December) | (2023, Month::November)
            )
        })
        .times(3)
        .returning(|_, _| Ok(vec![]));

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-12-31 23:00 UTC)).await;
    let (_, html) = test_app.get("/").await;

    assert!(html.contains("data-month=\"2024-01-01T00:00:00+00:00\""));
    assert!(html.contains("January 2024"));
    assert!(html.contains("November 2023"));
}

#[tokio::test]
async fn talk_page_links_slides_that_exist() {
    let mut talks = MockTalkStore::new();
    talks
        .expect_fetch_talk()
        .withf(|year, month, key| *year == 2023 && *month == Month::June && *key == 2)
        .times(1)
        .returning(|_, _, _| {
            let mut talk = mock_talk(2, "Static analysis", datetime!(2023-06-20 18:30 UTC));
            talk.pdf = Some(SLIDES_PATH.to_string());
            Ok(Some(talk))
        });

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/talks/2023/june/2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Static analysis"));
    assert!(html.contains("Download the slides"));
    assert!(html.contains(SLIDES_PATH));
}

#[tokio::test]
async fn talk_page_hides_missing_slides() {
    let mut talks = MockTalkStore::new();
    talks.expect_fetch_talk().times(1).returning(|_, _, _| {
        let mut talk = mock_talk(1, "Lost slides", datetime!(2023-06-20 18:30 UTC));
        talk.pdf = Some("/slides/2023/june/missing.pdf".to_string());
        Ok(Some(talk))
    });

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/talks/2023/june/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Lost slides"));
    assert!(!html.contains("Download the slides"));
}

#[tokio::test]
async fn unknown_talk_is_not_found() {
    let mut talks = MockTalkStore::new();
    talks
        .expect_fetch_talk()
        .times(1)
        .returning(|_, _, _| Ok(None));

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/talks/2023/june/7").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("No talk 7 was found for June 2023."));
}

#[tokio::test]
async fn unknown_month_is_not_found_without_a_lookup() {
    let test_app = spawn_app(
        Arc::new(MockTalkStore::new()),
        datetime!(2023-06-15 10:00 UTC),
    )
    .await;

    let (status, html) = test_app.get("/talks/2023/smarch/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("smarch"));

    let (status, _) = test_app.get("/talks/2023/smarch").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn talk_lookup_failure_is_a_server_error() {
    let mut talks = MockTalkStore::new();
    talks
        .expect_fetch_talk()
        .times(1)
        .returning(|_, _, _| Err(query_error()));

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, _) = test_app.get("/talks/2023/june/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

/// A month holding one talk renders exactly that talk's page
#[tokio::test]
async fn month_with_one_talk_renders_the_talk_page() {
    let talk = mock_talk(1, "The only talk", datetime!(2023-06-20 18:30 UTC));

    let mut talks = MockTalkStore::new();
    let month_talk = talk.clone();
    talks
        .expect_fetch_talks()
        .withf(|year, month| *year == 2023 && *month == Month::June)
        .times(1)
        .returning(move |_, _| Ok(vec![month_talk.clone()]));
    talks
        .expect_fetch_talk()
        .withf(|_, _, key| *key == 1)
        .times(1)
        .returning(move |_, _, _| Ok(Some(talk.clone())));

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (month_status, month_html) = test_app.get("/talks/2023/June").await;
    let (talk_status, talk_html) = test_app.get("/talks/2023/june/1").await;

    assert_eq!(month_status, StatusCode::OK);
    assert_eq!(talk_status, StatusCode::OK);
    assert_eq!(month_html, talk_html);
}

#[tokio::test]
async fn month_with_several_talks_lists_them() {
    let mut talks = MockTalkStore::new();
    talks.expect_fetch_talks().times(1).returning(|_, _| {
        Ok(vec![
            mock_talk(1, "Opening talk", datetime!(2023-06-20 18:30 UTC)),
            mock_talk(2, "Lightning talk", datetime!(2023-06-20 19:30 UTC)),
        ])
    });

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/talks/2023/june").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Talks in June 2023"));
    assert!(html.contains("href=\"/talks/2023/june/1\""));
    assert!(html.contains("href=\"/talks/2023/june/2\""));
}

#[tokio::test]
async fn month_without_talks_says_so() {
    let mut talks = MockTalkStore::new();
    talks
        .expect_fetch_talks()
        .times(1)
        .returning(|_, _| Ok(vec![]));

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/talks/2022/august").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No talks found for August 2022."));
}

#[tokio::test]
async fn talk_list_groups_talks_by_year() {
    let mut talks = MockTalkStore::new();
    talks.expect_fetch_all().times(1).returning(|| {
        Ok(vec![
            mock_talk(1, "Newest", datetime!(2023-06-20 18:30 UTC)),
            mock_talk(1, "Spring", datetime!(2023-03-15 18:30 UTC)),
            mock_talk(1, "Oldest", datetime!(2022-11-16 18:30 UTC)),
        ])
    });

    let test_app = spawn_app(Arc::new(talks), datetime!(2023-06-15 10:00 UTC)).await;
    let (status, html) = test_app.get("/talks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("data-year=").count(), 2);
    assert!(position(&html, "data-year=\"2023\"") < position(&html, "data-year=\"2022\""));
    assert!(position(&html, "Newest") < position(&html, "Oldest"));
}

#[tokio::test]
async fn document_root_files_are_served() {
    let test_app = spawn_app(
        Arc::new(MockTalkStore::new()),
        datetime!(2023-06-15 10:00 UTC),
    )
    .await;

    let (status, body) = test_app.get(SLIDES_PATH).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "%PDF-1.4");

    let (status, _) = test_app.get("/slides/nothing-here.pdf").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn document_root_is_removed_with_the_app() {
    let test_app = spawn_app(
        Arc::new(MockTalkStore::new()),
        datetime!(2023-06-15 10:00 UTC),
    )
    .await;

    let root = test_app.document_root.path().to_path_buf();
    assert!(root.join(SLIDES_PATH.trim_start_matches('/')).is_file());

    drop(test_app);
    assert!(!root.exists());
}

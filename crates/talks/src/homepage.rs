//! Picks the months shown on the homepage.
//!
//! The homepage always lists this month and last month. Once every talk of
//! this month has started, next month is added in front so visitors see
//! what is coming up.

use log::warn;
use time::{
    error::ComponentRange, format_description::BorrowedFormatItem, macros::format_description,
    Date, Month, OffsetDateTime,
};

use crate::db::{Talk, TalkRepository};

const BUCKET_KEY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);
const CURRENT_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// First-of-month instants around "now", all in now's offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthWindow {
    pub now: OffsetDateTime,
    pub last_month: OffsetDateTime,
    pub this_month: OffsetDateTime,
    pub next_month: OffsetDateTime,
}

impl MonthWindow {
    pub fn containing(now: OffsetDateTime) -> Result<Self, ComponentRange> {
        let this_month = now.date().replace_day(1)?;
        let at_midnight = |date: Date| date.midnight().assume_offset(now.offset());

        Ok(Self {
            now,
            last_month: at_midnight(previous_month(this_month)?),
            this_month: at_midnight(this_month),
            next_month: at_midnight(following_month(this_month)?),
        })
    }
}

/// One month of talks keyed by its first-day timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBucket {
    pub key: String,
    pub month: OffsetDateTime,
    pub talks: Vec<Talk>,
}

impl MonthBucket {
    pub fn new(month: OffsetDateTime, talks: Vec<Talk>) -> Self {
        Self {
            key: bucket_key(month),
            month,
            talks,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomepageMonths {
    pub buckets: Vec<MonthBucket>,
    /// Instant the months were selected for
    pub now: OffsetDateTime,
    /// `YYYY-MM-DD`
    pub current_date: String,
}

/// ISO-8601 timestamp of a month start, e.g. `2023-06-01T00:00:00+01:00`
pub fn bucket_key(month: OffsetDateTime) -> String {
    month.format(BUCKET_KEY_FORMAT).unwrap_or_default()
}

fn following_month(date: Date) -> Result<Date, ComponentRange> {
    let year = match date.month() {
        Month::December => date.year() + 1,
        _ => date.year(),
    };
    Date::from_calendar_date(year, date.month().next(), 1)
}

fn previous_month(date: Date) -> Result<Date, ComponentRange> {
    let year = match date.month() {
        Month::January => date.year() - 1,
        _ => date.year(),
    };
    Date::from_calendar_date(year, date.month().previous(), 1)
}

/// Talks of the slice starting at or after `now`
pub fn upcoming_talks(talks: &[Talk], now: OffsetDateTime) -> usize {
    talks.iter().filter(|talk| talk.is_upcoming(now)).count()
}

/// Orders the fetched months for display: next month first when nothing
/// is left this month, then this month, then last month
pub fn select_months(
    window: &MonthWindow,
    next_month_talks: Vec<Talk>,
    this_month_talks: Vec<Talk>,
    last_month_talks: Vec<Talk>,
) -> HomepageMonths {
    let mut buckets = Vec::with_capacity(3);

    if upcoming_talks(&this_month_talks, window.now) == 0 {
        buckets.push(MonthBucket::new(window.next_month, next_month_talks));
    }
    buckets.push(MonthBucket::new(window.this_month, this_month_talks));
    buckets.push(MonthBucket::new(window.last_month, last_month_talks));

    HomepageMonths {
        buckets,
        now: window.now,
        current_date: window
            .now
            .date()
            .format(CURRENT_DATE_FORMAT)
            .unwrap_or_default(),
    }
}

/// Fetches the three months around `now` and selects the ones to show.
/// Fails only when `now` sits at the edge of the representable calendar.
pub async fn homepage_months(
    talks: &dyn TalkRepository,
    now: OffsetDateTime,
) -> Result<HomepageMonths, ComponentRange> {
    let window = MonthWindow::containing(now)?;

    let next_month_talks = fetch_month(talks, window.next_month).await;
    let this_month_talks = fetch_month(talks, window.this_month).await;
    let last_month_talks = fetch_month(talks, window.last_month).await;

    Ok(select_months(
        &window,
        next_month_talks,
        this_month_talks,
        last_month_talks,
    ))
}

async fn fetch_month(talks: &dyn TalkRepository, month: OffsetDateTime) -> Vec<Talk> {
    talks
        .fetch_talks(month.year(), month.month())
        .await
        .unwrap_or_else(|e| {
            warn!(
                "error fetching talks for {} {}, showing none: {}",
                month.month(),
                month.year(),
                e
            );
            Vec::new()
        })
}

pub mod sqlite;

pub use sqlite::Database;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::{Month, OffsetDateTime};
use utoipa::ToSchema;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query talks database: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Failed to decode stored talk data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Stored talk date is out of range: {0}")]
    Date(#[from] time::error::ComponentRange),
}

/// Read access to the talk archive
#[async_trait]
pub trait TalkRepository: Send + Sync {
    /// A single talk, `None` when nothing is stored under that key
    async fn fetch_talk(&self, year: i32, month: Month, key: i64) -> Result<Option<Talk>, Error>;
    /// Every talk of one month, earliest first
    async fn fetch_talks(&self, year: i32, month: Month) -> Result<Vec<Talk>, Error>;
    /// The whole archive, newest first
    async fn fetch_all(&self) -> Result<Vec<Talk>, Error>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Talk {
    /// Position of the talk within its month, starting at 1
    pub key: i64,
    pub year: i32,
    /// Lowercase english month name, e.g. "june"
    pub month: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub date: OffsetDateTime,
    pub title: String,
    pub speaker: String,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub video: Option<String>,
    /// Slides location relative to the document root
    pub pdf: Option<String>,
    pub feedback_url: Option<String>,
    pub cues: Vec<Cue>,
    pub resources: Vec<Resource>,
}

impl Talk {
    pub fn path(&self) -> String {
        format!("{}/{}", self.month_path(), self.key)
    }

    pub fn month_path(&self) -> String {
        format!("/talks/{}/{}", self.year, self.month)
    }

    pub fn is_upcoming(&self, now: OffsetDateTime) -> bool {
        self.date >= now
    }
}

/// A point in the talk video worth jumping to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cue {
    pub seconds: u32,
    pub label: String,
}

impl Cue {
    /// `m:ss`, or `h:mm:ss` past the hour
    pub fn timestamp(&self) -> String {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resource {
    pub title: String,
    pub url: String,
}

/// Lowercase month name used in urls and storage
pub fn month_label(month: Month) -> String {
    month.to_string().to_lowercase()
}

/// Parses a month name regardless of case ("June", "june", "JUNE")
pub fn parse_month(name: &str) -> Option<Month> {
    MONTHS
        .iter()
        .copied()
        .find(|month| month.to_string().eq_ignore_ascii_case(name.trim()))
}

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
    Row,
};
use std::{path::Path, str::FromStr, time::Duration};
use time::{Month, OffsetDateTime, UtcOffset};
use tokio::fs::create_dir_all;

use super::{month_label, Cue, Error, Resource, Talk, TalkRepository};

const TALK_COLUMNS: &str = "year, month, talk_key, talk_date, utc_offset_seconds, title, speaker,
     avatar, twitter, abstract, video_url, pdf_path, feedback_url, cues, resources";

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(path: &str) -> Result<Self> {
        let db_path = format!("{}/talks.sqlite", path);

        if let Some(parent) = Path::new(&db_path).parent() {
            create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create database directory: {parent:?}"))?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path))?
            .create_if_missing(true)
            .pragma("journal_mode", "WAL")
            .pragma("synchronous", "NORMAL")
            .pragma("busy_timeout", "5000")
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "MEMORY");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .context("Failed to create database connection pool")?;

        let db = Self { pool };
        db.run_migrations().await?;
        info!("SQLite database initialized at: {}", db_path);

        Ok(db)
    }

    /// Single-connection in-memory database, the connection is never recycled
    /// since that would drop every table with it
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory database")?;

        let db = Self { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_talk(row: &SqliteRow) -> Result<Talk, Error> {
        let date_ts: i64 = row.try_get("talk_date")?;
        let offset_seconds: i32 = row.try_get("utc_offset_seconds")?;
        let cues_json: String = row.try_get("cues")?;
        let resources_json: String = row.try_get("resources")?;

        let offset = UtcOffset::from_whole_seconds(offset_seconds)?;
        let date = OffsetDateTime::from_unix_timestamp(date_ts)?.to_offset(offset);
        let cues: Vec<Cue> = serde_json::from_str(&cues_json)?;
        let resources: Vec<Resource> = serde_json::from_str(&resources_json)?;

        Ok(Talk {
            key: row.try_get("talk_key")?,
            year: row.try_get("year")?,
            month: row.try_get("month")?,
            date,
            title: row.try_get("title")?,
            speaker: row.try_get("speaker")?,
            avatar: row.try_get("avatar")?,
            twitter: row.try_get("twitter")?,
            summary: row.try_get("abstract")?,
            video: row.try_get("video_url")?,
            pdf: row.try_get("pdf_path")?,
            feedback_url: row.try_get("feedback_url")?,
            cues,
            resources,
        })
    }
}

#[async_trait]
impl TalkRepository for Database {
    async fn fetch_talk(&self, year: i32, month: Month, key: i64) -> Result<Option<Talk>, Error> {
        let query = format!(
            "SELECT {} FROM talks WHERE year = ? AND month = ? AND talk_key = ?",
            TALK_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(year)
            .bind(month_label(month))
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_talk).transpose()
    }

    async fn fetch_talks(&self, year: i32, month: Month) -> Result<Vec<Talk>, Error> {
        let query = format!(
            "SELECT {} FROM talks WHERE year = ? AND month = ?
             ORDER BY talk_date ASC, talk_key ASC",
            TALK_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(year)
            .bind(month_label(month))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_talk).collect()
    }

    async fn fetch_all(&self) -> Result<Vec<Talk>, Error> {
        let query = format!(
            "SELECT {} FROM talks ORDER BY talk_date DESC, talk_key ASC",
            TALK_COLUMNS
        );
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        rows.iter().map(Self::row_to_talk).collect()
    }
}

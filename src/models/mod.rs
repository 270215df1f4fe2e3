/// Data models for the board feed service.
///
/// Everything here is built fresh for a single page load and dropped after
/// rendering; the persisted tables (users, posts, comments) are owned by
/// other services.
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One raw row from the feed query: a windowed post joined with its author
/// and an aggregated comment count.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FeedRecord {
    pub id: i64,
    pub title: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub nickname: String,
    pub comment_count: i64,
}

/// One display-ready feed entry. Text fields are HTML-escaped by the
/// assembler; numeric and timestamp fields stay typed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRow {
    pub id: i64,
    pub title: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub nickname: String,
    pub comment_count: i64,
}

/// The authenticated viewer, when there is one. Used only to toggle the
/// navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub nickname: String,
}

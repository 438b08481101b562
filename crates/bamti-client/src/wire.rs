//! Wire representations of the API payloads.
//!
//! Dates travel as ISO-8601 strings. Every record is converted into its
//! `bamti_core` counterpart here, so nothing downstream sees a raw date string.

use bamti_core::{
    Comment, DetailsGroup, Sentiment, SentimentCounts, SentimentDetails, Video,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ClientError;

/// `{"items": [...]}` envelope used by the collection endpoints.
#[derive(Debug, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireComment {
    pub id: String,
    pub text: String,
    pub date: String,
    pub sentiment: Sentiment,
    pub source: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub analysis: Map<String, Value>,
}

impl TryFrom<WireComment> for Comment {
    type Error = ClientError;

    fn try_from(wire: WireComment) -> Result<Self, Self::Error> {
        Ok(Comment {
            date: parse_timestamp("date", &wire.date)?,
            id: wire.id,
            text: wire.text,
            sentiment: wire.sentiment,
            source: wire.source,
            attributes: wire.attributes,
            likes: wire.likes,
            analysis: wire.analysis,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireVideo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    pub publish_date: String,
    #[serde(default)]
    pub sentiments: SentimentCounts,
    #[serde(default)]
    pub is_short: bool,
}

impl TryFrom<WireVideo> for Video {
    type Error = ClientError;

    fn try_from(wire: WireVideo) -> Result<Self, Self::Error> {
        Ok(Video {
            publish_date: parse_timestamp("publish_date", &wire.publish_date)?,
            id: wire.id,
            title: wire.title,
            thumbnail_url: wire.thumbnail_url,
            views: wire.views,
            likes: wire.likes,
            comments: wire.comments,
            sentiments: wire.sentiments,
            is_short: wire.is_short,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireDetailsGroup {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub comments: Vec<WireComment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireDetails {
    pub positive: WireDetailsGroup,
    pub negative: WireDetailsGroup,
}

impl TryFrom<WireDetailsGroup> for DetailsGroup {
    type Error = ClientError;

    fn try_from(wire: WireDetailsGroup) -> Result<Self, Self::Error> {
        Ok(DetailsGroup {
            summary: wire.summary,
            comments: convert_all(wire.comments)?,
        })
    }
}

impl TryFrom<WireDetails> for SentimentDetails {
    type Error = ClientError;

    fn try_from(wire: WireDetails) -> Result<Self, Self::Error> {
        Ok(SentimentDetails {
            positive: wire.positive.try_into()?,
            negative: wire.negative.try_into()?,
        })
    }
}

/// Converts every wire record; the first bad record fails the whole batch.
pub fn convert_all<W, T>(items: Vec<W>) -> Result<Vec<T>, ClientError>
where
    T: TryFrom<W, Error = ClientError>,
{
    items.into_iter().map(T::try_from).collect()
}

/// Parses an ISO-8601 timestamp into UTC.
///
/// Accepts RFC 3339 (`2025-10-01T09:30:00+09:00`), an offset-less date-time
/// (read as UTC, with `T` or a space separator), or a bare date (UTC midnight).
///
/// # Errors
///
/// Returns [`ClientError::InvalidDate`] when none of the forms match.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, ClientError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ClientError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

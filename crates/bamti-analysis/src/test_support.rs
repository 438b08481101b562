//! Record builders shared by the unit tests in this crate.

use bamti_core::{Comment, Sentiment, SentimentCounts, Video};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Map;

pub(crate) fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, d, 12, 0, 0).unwrap()
}

pub(crate) fn comment(
    id: &str,
    sentiment: Sentiment,
    source: &str,
    date: DateTime<Utc>,
    likes: Option<u64>,
) -> Comment {
    Comment {
        id: id.to_string(),
        text: format!("comment {id}"),
        date,
        sentiment,
        source: source.to_string(),
        attributes: Vec::new(),
        likes,
        analysis: Map::new(),
    }
}

pub(crate) fn tagged(mut c: Comment, attributes: &[&str]) -> Comment {
    c.attributes = attributes.iter().map(|a| (*a).to_string()).collect();
    c
}

pub(crate) fn video(id: &str, views: u64, likes: u64, comments: u64, sentiments: SentimentCounts) -> Video {
    Video {
        id: id.to_string(),
        title: format!("video {id}"),
        thumbnail_url: format!("https://img.example.com/{id}.jpg"),
        views,
        likes,
        comments,
        publish_date: day(10),
        sentiments,
        is_short: false,
    }
}

pub(crate) fn ids<T, F: Fn(&T) -> &str>(items: &[T], id: F) -> Vec<String> {
    items.iter().map(|i| id(i).to_string()).collect()
}

pub(crate) fn comment_ids(comments: &[Comment]) -> Vec<String> {
    ids(comments, |c| c.id.as_str())
}

pub(crate) fn video_ids(videos: &[Video]) -> Vec<String> {
    ids(videos, |v| v.id.as_str())
}

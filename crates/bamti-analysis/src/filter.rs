//! Filter stage: narrows a collection by AND-composed predicates.
//!
//! Filtering never reorders, never duplicates, and never mutates its input.

use bamti_core::{Comment, DateRange, Sentiment, Video};
use chrono::{DateTime, Utc};

/// A filter control value: either no constraint or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    pub fn admits<F: FnOnce(&T) -> bool>(&self, pred: F) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => pred(value),
        }
    }

    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }
}

impl Selection<String> {
    /// Parses an open-vocabulary control (channel, attribute).
    ///
    /// `all`, `전체` and blank mean no constraint. Any other value is kept as is,
    /// even if no record carries it; such a selection simply matches nothing.
    #[must_use]
    pub fn parse_open(s: &str) -> Self {
        match s.trim() {
            "" | "all" | "전체" => Selection::All,
            value => Selection::Only(value.to_string()),
        }
    }
}

impl Selection<Sentiment> {
    /// Parses the sentiment control. Values outside the closed enum fall back
    /// to no constraint.
    #[must_use]
    pub fn parse_sentiment(s: &str) -> Self {
        Sentiment::parse(s).map_or(Selection::All, Selection::Only)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentFilter {
    pub channel: Selection<String>,
    pub sentiment: Selection<Sentiment>,
    pub attribute: Selection<String>,
    pub date_range: Option<DateRange>,
}

impl CommentFilter {
    #[must_use]
    pub fn matches(&self, comment: &Comment, now: DateTime<Utc>) -> bool {
        self.channel.admits(|c| comment.source == *c)
            && self.sentiment.admits(|s| comment.sentiment == *s)
            && self.attribute.admits(|a| comment.has_attribute(a))
            && self
                .date_range
                .is_none_or(|range| range.contains(comment.date, now))
    }
}

/// Returns the comments matching every predicate of `filter`, in input order.
#[must_use]
pub fn filter_comments(
    comments: &[Comment],
    filter: &CommentFilter,
    now: DateTime<Utc>,
) -> Vec<Comment> {
    let kept: Vec<Comment> = comments
        .iter()
        .filter(|c| filter.matches(c, now))
        .cloned()
        .collect();
    tracing::debug!(input = comments.len(), kept = kept.len(), "filtered comments");
    kept
}

/// Returns the videos published inside `date_range` (all of them when `None`).
#[must_use]
pub fn filter_videos(
    videos: &[Video],
    date_range: Option<&DateRange>,
    now: DateTime<Utc>,
) -> Vec<Video> {
    videos
        .iter()
        .filter(|v| date_range.is_none_or(|range| range.contains(v.publish_date, now)))
        .cloned()
        .collect()
}

/// Splits videos into `(shorts, long_form)`, preserving order in each half.
#[must_use]
pub fn partition_videos(videos: &[Video]) -> (Vec<Video>, Vec<Video>) {
    videos.iter().cloned().partition(|v| v.is_short)
}

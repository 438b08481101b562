//! Aggregations feeding the summary and sentiment charts.
//!
//! Percentages are kept as `f64` internally; rounding to whole numbers only
//! happens through the `rounded_*` helpers at the presentation boundary.

use bamti_core::{AttributeSentiment, Comment, Sentiment, SentimentCounts, Video};
use serde::Serialize;

/// Sentiment counts for one group plus the derived percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub counts: SentimentCounts,
}

impl SentimentDistribution {
    #[must_use]
    pub fn from_counts(counts: SentimentCounts) -> Self {
        Self { counts }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// A zero-total group. Charts render an explicit "no data" state for it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Percentage of the group in `sentiment`, `0.0..=100.0`, unrounded.
    #[must_use]
    pub fn percent(&self, sentiment: Sentiment) -> f64 {
        self.counts.share(sentiment) * 100.0
    }

    /// Whole-number percentage for display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percent(&self, sentiment: Sentiment) -> u8 {
        self.percent(sentiment).round() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelDistribution {
    pub channel: String,
    pub distribution: SentimentDistribution,
}

/// Sentiment distribution over a whole collection.
#[must_use]
pub fn distribution(comments: &[Comment]) -> SentimentDistribution {
    let mut counts = SentimentCounts::default();
    for comment in comments {
        counts.increment(comment.sentiment);
    }
    SentimentDistribution { counts }
}

/// One distribution per channel, in the order of `channels`.
///
/// Channels with no comments get an empty distribution. Comments from
/// channels not listed are ignored here (they still count in [`distribution`]).
#[must_use]
pub fn distribution_by_channel(
    comments: &[Comment],
    channels: &[String],
) -> Vec<ChannelDistribution> {
    channels
        .iter()
        .map(|channel| {
            let mut counts = SentimentCounts::default();
            for comment in comments.iter().filter(|c| c.source == *channel) {
                counts.increment(comment.sentiment);
            }
            ChannelDistribution {
                channel: channel.clone(),
                distribution: SentimentDistribution { counts },
            }
        })
        .collect()
}

/// Per-attribute sentiment counts, one entry per known attribute, in order.
///
/// A comment carrying several tags counts once toward each of them.
#[must_use]
pub fn attribute_breakdown(comments: &[Comment], attributes: &[String]) -> Vec<AttributeSentiment> {
    attributes
        .iter()
        .map(|name| {
            let mut counts = SentimentCounts::default();
            for comment in comments.iter().filter(|c| c.has_attribute(name)) {
                counts.increment(comment.sentiment);
            }
            AttributeSentiment {
                name: name.clone(),
                counts,
            }
        })
        .collect()
}

/// Totals over a video collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VideoSummary {
    pub count: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub sentiments: SentimentDistribution,
}

#[must_use]
pub fn summarize_videos(videos: &[Video]) -> VideoSummary {
    let mut summary = VideoSummary {
        count: videos.len(),
        ..VideoSummary::default()
    };
    for video in videos {
        summary.total_views = summary.total_views.saturating_add(video.views);
        summary.total_likes = summary.total_likes.saturating_add(video.likes);
        summary.total_comments = summary.total_comments.saturating_add(video.comments);
        summary.sentiments.counts.add(&video.sentiments);
    }
    summary
}

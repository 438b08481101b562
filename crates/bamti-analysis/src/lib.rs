//! Client-side analysis pipeline for the bamti dashboard.
//!
//! Acquired collections flow through a filter stage ([`filter`]) and then
//! either a sort ([`sort`]) or an aggregation ([`aggregate`], [`engagement`],
//! [`trend`]). Every stage is pure: inputs are borrowed, outputs are new collections.
//! The [`view`] controllers hold one acquired collection each and re-derive
//! their output on every selection change without re-fetching.

pub mod aggregate;
pub mod engagement;
pub mod filter;
pub mod sort;
pub mod tagger;
pub mod trend;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{
    attribute_breakdown, distribution, distribution_by_channel, summarize_videos,
    ChannelDistribution, SentimentDistribution, VideoSummary,
};
pub use engagement::{parse_likes_filter, top_by_engagement, EngagementPercentile};
pub use filter::{filter_comments, filter_videos, partition_videos, CommentFilter, Selection};
pub use sort::{sort_comments, sort_videos, CommentSort, VideoSort};
pub use tagger::{AttributeTagger, Tagging};
pub use trend::{sentiment_trend, summary_change, SummaryChange, TrendPoint};
pub use view::{
    CommentsView, DashboardSummary, Generation, SentimentView, SummaryView, VideosView,
    ViewStatus,
};

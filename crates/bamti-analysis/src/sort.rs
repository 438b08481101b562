//! Sort stage. All orderings are stable: records with equal keys keep their
//! relative input order.

use std::cmp::Ordering;

use bamti_core::{Comment, Video};

/// Orderings offered by the comment table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentSort {
    #[default]
    Latest,
    Oldest,
    LikesHigh,
    LikesLow,
}

impl CommentSort {
    /// Parses a sort key; anything unrecognized falls back to [`CommentSort::Latest`].
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim() {
            "oldest" => CommentSort::Oldest,
            "likesHigh" | "likes-high" => CommentSort::LikesHigh,
            "likesLow" | "likes-low" => CommentSort::LikesLow,
            _ => CommentSort::Latest,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CommentSort::Latest => "최신 날짜 순",
            CommentSort::Oldest => "오래된 날짜 순",
            CommentSort::LikesHigh => "좋아요 많은 순",
            CommentSort::LikesLow => "좋아요 적은 순",
        }
    }

    fn compare(self, a: &Comment, b: &Comment) -> Ordering {
        match self {
            CommentSort::Latest => b.date.cmp(&a.date),
            CommentSort::Oldest => a.date.cmp(&b.date),
            CommentSort::LikesHigh => b.engagement().cmp(&a.engagement()),
            CommentSort::LikesLow => a.engagement().cmp(&b.engagement()),
        }
    }
}

/// Orderings offered by the video grids. Every key sorts descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VideoSort {
    #[default]
    Views,
    Likes,
    Comments,
    PositiveRate,
    NegativeRate,
}

impl VideoSort {
    /// Parses a sort key; anything unrecognized falls back to [`VideoSort::Views`].
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim() {
            "likes" => VideoSort::Likes,
            "comments" => VideoSort::Comments,
            "positiveRate" | "positive-rate" => VideoSort::PositiveRate,
            "negativeRate" | "negative-rate" => VideoSort::NegativeRate,
            _ => VideoSort::Views,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VideoSort::Views => "조회수",
            VideoSort::Likes => "좋아요",
            VideoSort::Comments => "댓글 수",
            VideoSort::PositiveRate => "긍정 비율",
            VideoSort::NegativeRate => "부정 비율",
        }
    }

    fn compare(self, a: &Video, b: &Video) -> Ordering {
        match self {
            VideoSort::Views => b.views.cmp(&a.views),
            VideoSort::Likes => b.likes.cmp(&a.likes),
            VideoSort::Comments => b.comments.cmp(&a.comments),
            VideoSort::PositiveRate => b.positive_rate().total_cmp(&a.positive_rate()),
            VideoSort::NegativeRate => b.negative_rate().total_cmp(&a.negative_rate()),
        }
    }
}

/// Returns a sorted copy of `comments`.
#[must_use]
pub fn sort_comments(comments: &[Comment], sort: CommentSort) -> Vec<Comment> {
    let mut sorted = comments.to_vec();
    sorted.sort_by(|a, b| sort.compare(a, b));
    sorted
}

/// Returns a sorted copy of `videos`.
#[must_use]
pub fn sort_videos(videos: &[Video], sort: VideoSort) -> Vec<Video> {
    let mut sorted = videos.to_vec();
    sorted.sort_by(|a, b| sort.compare(a, b));
    sorted
}

//! "Top N% by likes" selection used by the sentiment view.

use std::sync::LazyLock;

use bamti_core::Comment;
use regex::Regex;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)%").expect("valid percent regex"));

/// Engagement percentile thresholds offered by the likes filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngagementPercentile {
    Top5,
    #[default]
    Top10,
    Top20,
    Top50,
}

impl EngagementPercentile {
    #[must_use]
    pub fn from_percent(percent: u32) -> Option<Self> {
        match percent {
            5 => Some(EngagementPercentile::Top5),
            10 => Some(EngagementPercentile::Top10),
            20 => Some(EngagementPercentile::Top20),
            50 => Some(EngagementPercentile::Top50),
            _ => None,
        }
    }

    #[must_use]
    pub fn percent(self) -> u32 {
        match self {
            EngagementPercentile::Top5 => 5,
            EngagementPercentile::Top10 => 10,
            EngagementPercentile::Top20 => 20,
            EngagementPercentile::Top50 => 50,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("좋아요 상위 {}%", self.percent())
    }

    /// Number of records kept out of `n`: `ceil(percent * n / 100)`.
    #[must_use]
    pub fn keep_count(self, n: usize) -> usize {
        (n * self.percent() as usize).div_ceil(100)
    }
}

/// Parses a likes-filter label such as `좋아요 상위 20%`.
///
/// The first `N%` in the label wins. Missing or unsupported percentages fall
/// back to the 10% default.
#[must_use]
pub fn parse_likes_filter(label: &str) -> EngagementPercentile {
    PERCENT_RE
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .and_then(EngagementPercentile::from_percent)
        .unwrap_or_default()
}

/// Keeps the leading `percentile` share of `comments` ranked by likes.
///
/// Ranking is a stable descending sort on likes (a missing counter counts as
/// zero), so ties at the cutoff are broken by input order.
#[must_use]
pub fn top_by_engagement(comments: &[Comment], percentile: EngagementPercentile) -> Vec<Comment> {
    let keep = percentile.keep_count(comments.len());
    let mut ranked: Vec<&Comment> = comments.iter().collect();
    ranked.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
    ranked.into_iter().take(keep).cloned().collect()
}

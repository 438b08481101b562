//! Time-based summaries: the daily sentiment trend and the change against the
//! preceding window.

use bamti_core::{Comment, DateRange, Sentiment, SentimentCounts};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::aggregate::SentimentDistribution;

/// Sentiment counts for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: SentimentCounts,
}

/// One point per UTC day from `range.from` through the range end, oldest first.
///
/// Days without comments are present with zero counts. Comments outside the
/// range are ignored. An inverted range gives an empty trend.
#[must_use]
pub fn sentiment_trend(
    comments: &[Comment],
    range: &DateRange,
    now: DateTime<Utc>,
) -> Vec<TrendPoint> {
    let first = range.from.date_naive();
    let last = range.end_or(now).date_naive();

    let mut points: Vec<TrendPoint> = first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| TrendPoint {
            date,
            counts: SentimentCounts::default(),
        })
        .collect();

    for comment in comments.iter().filter(|c| range.contains(c.date, now)) {
        let offset = (comment.date.date_naive() - first).num_days();
        if let Some(point) = usize::try_from(offset).ok().and_then(|i| points.get_mut(i)) {
            point.counts.increment(comment.sentiment);
        }
    }
    points
}

/// Change of the current window against the one before it.
///
/// `positive_points` and `negative_points` are percentage-point differences of
/// the class shares. `total_percent` is the relative change in comment volume.
/// Every percentage is `0.0` when the previous window has no comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryChange {
    pub positive_points: f64,
    pub negative_points: f64,
    pub total_change: i64,
    pub total_percent: f64,
}

impl SummaryChange {
    /// `+1.2%p` style label for one of the point deltas.
    #[must_use]
    pub fn points_label(points: f64) -> String {
        format!("{points:+.1}%p")
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summary_change(
    current: &SentimentDistribution,
    previous: &SentimentDistribution,
) -> SummaryChange {
    let total_change = i64::try_from(current.total())
        .unwrap_or(i64::MAX)
        .saturating_sub(i64::try_from(previous.total()).unwrap_or(i64::MAX));

    if previous.is_empty() {
        return SummaryChange {
            total_change,
            ..SummaryChange::default()
        };
    }

    let delta = |s: Sentiment| current.percent(s) - previous.percent(s);
    SummaryChange {
        positive_points: delta(Sentiment::Positive),
        negative_points: delta(Sentiment::Negative),
        total_change,
        total_percent: total_change as f64 / previous.total() as f64 * 100.0,
    }
}

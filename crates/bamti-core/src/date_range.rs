//! Date ranges and the period presets offered by the dashboard filters.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive date range. An open `to` means "up to now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    #[must_use]
    pub fn new(from: DateTime<Utc>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    /// The `days` days ending at `now`.
    #[must_use]
    pub fn last_days(now: DateTime<Utc>, days: i64) -> Self {
        Self {
            from: now - Duration::days(days),
            to: Some(now),
        }
    }

    /// Upper bound, substituting `now` for an open end.
    #[must_use]
    pub fn end_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.to.unwrap_or(now)
    }

    /// The window of the same length that ends just before this one starts.
    #[must_use]
    pub fn preceding(&self, now: DateTime<Utc>) -> Self {
        let span = self.end_or(now) - self.from;
        let to = self.from - Duration::nanoseconds(1);
        Self {
            from: to - span,
            to: Some(to),
        }
    }

    /// `from <= at <= to`, both ends inclusive.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.from <= at && at <= self.end_or(now)
    }
}

/// Period presets from the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Last7Days,
    Last14Days,
    Last30Days,
    Custom,
}

impl Period {
    /// Accepts the Korean labels (`최근 7일`, `사용자 지정`) and short forms (`7d`, `custom`).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "최근 7일" | "7d" | "7" => Some(Period::Last7Days),
            "최근 14일" | "14d" | "14" => Some(Period::Last14Days),
            "최근 30일" | "30d" | "30" => Some(Period::Last30Days),
            "사용자 지정" | "custom" => Some(Period::Custom),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Period::Last7Days => "최근 7일",
            Period::Last14Days => "최근 14일",
            Period::Last30Days => "최근 30일",
            Period::Custom => "사용자 지정",
        }
    }

    #[must_use]
    pub fn days(self) -> Option<i64> {
        match self {
            Period::Last7Days => Some(7),
            Period::Last14Days => Some(14),
            Period::Last30Days => Some(30),
            Period::Custom => None,
        }
    }

    /// Range for this preset. `Custom` keeps whatever range is already selected.
    #[must_use]
    pub fn resolve(self, now: DateTime<Utc>, current: DateRange) -> DateRange {
        match self.days() {
            Some(days) => DateRange::last_days(now, days),
            None => current,
        }
    }
}

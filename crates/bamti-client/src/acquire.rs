//! Acquisition with fallback.
//!
//! One policy for every endpoint: a transport failure, a non-2xx status or a
//! malformed body is logged and the whole collection is replaced by the
//! injected fallback dataset. The only exceptions are the two errors the
//! details endpoint declares explicitly (unregistered keyword, no liked
//! comments in range); those reach the caller as [`DeclaredError`].

use bamti_core::{
    Acquisition, Comment, DateRange, DeclaredError, SentimentDetails, SentimentOverview, Video,
};
use chrono::Utc;

use crate::client::DashboardClient;
use crate::error::ClientError;
use crate::fallback::FallbackData;

/// Window used when the caller gives no date range.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

pub struct Acquirer {
    client: DashboardClient,
    fallback: FallbackData,
    default_days: i64,
}

impl Acquirer {
    #[must_use]
    pub fn new(client: DashboardClient, fallback: FallbackData) -> Self {
        Self {
            client,
            fallback,
            default_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Overrides the window used for requests without a date range.
    #[must_use]
    pub fn with_default_days(mut self, days: i64) -> Self {
        self.default_days = days;
        self
    }

    pub async fn comments(
        &self,
        keyword: Option<&str>,
        range: Option<DateRange>,
    ) -> Acquisition<Vec<Comment>> {
        let Some((keyword, range)) = self.prepare(keyword, range) else {
            return Acquisition::NoKeyword;
        };
        let result = self.client.comments(keyword, &range).await;
        settle("comments", result, &self.fallback.comments)
    }

    pub async fn videos(
        &self,
        keyword: Option<&str>,
        range: Option<DateRange>,
        platform: Option<&str>,
    ) -> Acquisition<Vec<Video>> {
        let Some((keyword, range)) = self.prepare(keyword, range) else {
            return Acquisition::NoKeyword;
        };
        let result = self.client.videos(keyword, &range, platform).await;
        settle("videos", result, &self.fallback.videos)
    }

    pub async fn sentiment_overview(
        &self,
        keyword: Option<&str>,
        range: Option<DateRange>,
    ) -> Acquisition<SentimentOverview> {
        let Some((keyword, range)) = self.prepare(keyword, range) else {
            return Acquisition::NoKeyword;
        };
        let result = self.client.sentiment_overview(keyword, &range).await;
        settle("sentiment/overview", result, &self.fallback.overview)
    }

    pub async fn sentiment_details(
        &self,
        keyword: Option<&str>,
        range: Option<DateRange>,
        top: Option<u32>,
    ) -> Acquisition<SentimentDetails> {
        let Some((keyword, range)) = self.prepare(keyword, range) else {
            return Acquisition::NoKeyword;
        };
        match self.client.sentiment_details(keyword, &range, top).await {
            Err(err) => match declared_error(&err) {
                Some(declared) => {
                    tracing::info!(keyword, error = %err, "details endpoint declared no data");
                    Acquisition::Declared(declared)
                }
                None => settle("sentiment/details", Err(err), &self.fallback.details),
            },
            ok => settle("sentiment/details", ok, &self.fallback.details),
        }
    }

    /// Fetches overview and details concurrently. Each side settles on its
    /// own, so one failing never blanks the other.
    pub async fn overview_and_details(
        &self,
        keyword: Option<&str>,
        range: Option<DateRange>,
        top: Option<u32>,
    ) -> (Acquisition<SentimentOverview>, Acquisition<SentimentDetails>) {
        tokio::join!(
            self.sentiment_overview(keyword, range),
            self.sentiment_details(keyword, range, top),
        )
    }

    /// Trims the keyword and fills in the default window. `None` means no
    /// request should be sent.
    fn prepare<'k>(
        &self,
        keyword: Option<&'k str>,
        range: Option<DateRange>,
    ) -> Option<(&'k str, DateRange)> {
        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty())?;
        let range =
            range.unwrap_or_else(|| DateRange::last_days(Utc::now(), self.default_days));
        Some((keyword, range))
    }
}

/// Maps the details endpoint's declared statuses to user-facing errors.
#[must_use]
pub fn declared_error(err: &ClientError) -> Option<DeclaredError> {
    match err {
        ClientError::NotFound { .. } => Some(DeclaredError::KeywordNotRegistered),
        ClientError::BadRequest { .. } => Some(DeclaredError::NoEngagementInRange),
        _ => None,
    }
}

fn settle<T: Clone>(
    endpoint: &'static str,
    result: Result<T, ClientError>,
    fallback: &T,
) -> Acquisition<T> {
    match result {
        Ok(data) => Acquisition::remote(data),
        Err(err) => {
            tracing::warn!(endpoint, error = %err, "API request failed; serving fallback data");
            Acquisition::fallback(fallback.clone())
        }
    }
}

//! Per-view controllers.
//!
//! Each view exclusively owns the collection it last acquired and its
//! selection state. It exposes two separate entry points:
//!
//! - acquisition: [`begin`](CommentsView::begin_acquisition) hands out a
//!   [`Generation`]; [`complete`](CommentsView::complete_acquisition) stores the
//!   result only if that generation is still the latest one issued.
//! - derivation: `recompute()` re-runs filter/sort/aggregate over the stored
//!   collection. Selection setters call it; they never trigger a fetch.

use bamti_core::{
    Acquisition, AttributeSentiment, Comment, DataOrigin, DateRange, DeclaredError, Sentiment,
    SentimentDetails, SentimentOverview, Video,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::{
    attribute_breakdown, distribution, distribution_by_channel, summarize_videos,
    ChannelDistribution, SentimentDistribution, VideoSummary,
};
use crate::engagement::{parse_likes_filter, top_by_engagement, EngagementPercentile};
use crate::filter::{filter_comments, filter_videos, partition_videos, CommentFilter, Selection};
use crate::sort::{sort_comments, sort_videos, CommentSort, VideoSort};
use crate::trend::{sentiment_trend, summary_change, SummaryChange, TrendPoint};

type Clock = fn() -> DateTime<Utc>;

/// Identifies one acquisition request issued by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// Nothing acquired yet, or a request is in flight.
    Pending,
    NoKeyword,
    Ready(DataOrigin),
    Failed(DeclaredError),
}

impl ViewStatus {
    /// User-facing message for the states that replace the data display.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            ViewStatus::NoKeyword => Some("키워드를 입력해 주세요.".to_string()),
            ViewStatus::Failed(e) => Some(e.to_string()),
            ViewStatus::Pending | ViewStatus::Ready(_) => None,
        }
    }
}

/// One acquired collection plus the generation bookkeeping that guards it.
#[derive(Debug)]
struct Slot<T> {
    latest: u64,
    status: ViewStatus,
    data: T,
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            status: ViewStatus::Pending,
            data: T::default(),
        }
    }
}

impl<T: Default> Slot<T> {
    fn begin(&mut self) -> Generation {
        self.latest += 1;
        self.status = ViewStatus::Pending;
        Generation(self.latest)
    }

    fn complete(&mut self, generation: Generation, acquisition: Acquisition<T>, view: &str) -> bool {
        if generation.0 != self.latest {
            tracing::debug!(
                view,
                generation = generation.0,
                latest = self.latest,
                "discarding superseded acquisition"
            );
            return false;
        }
        match acquisition {
            Acquisition::NoKeyword => {
                self.data = T::default();
                self.status = ViewStatus::NoKeyword;
            }
            Acquisition::Loaded { data, origin } => {
                self.data = data;
                self.status = ViewStatus::Ready(origin);
            }
            Acquisition::Declared(error) => {
                tracing::info!(view, error = %error, "acquisition declared no data");
                self.data = T::default();
                self.status = ViewStatus::Failed(error);
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Comments table
// ---------------------------------------------------------------------------

/// Filterable, sortable comment table.
#[derive(Debug)]
pub struct CommentsView {
    slot: Slot<Vec<Comment>>,
    filter: CommentFilter,
    sort: CommentSort,
    visible: Vec<Comment>,
    clock: Clock,
}

impl Default for CommentsView {
    fn default() -> Self {
        Self::with_clock(Utc::now)
    }
}

impl CommentsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            slot: Slot::default(),
            filter: CommentFilter::default(),
            sort: CommentSort::default(),
            visible: Vec::new(),
            clock,
        }
    }

    pub fn begin_acquisition(&mut self) -> Generation {
        self.slot.begin()
    }

    /// Stores `acquisition` and recomputes, unless a newer request was issued
    /// since `generation`. Returns whether the result was applied.
    pub fn complete_acquisition(
        &mut self,
        generation: Generation,
        acquisition: Acquisition<Vec<Comment>>,
    ) -> bool {
        let applied = self.slot.complete(generation, acquisition, "comments");
        if applied {
            self.recompute();
        }
        applied
    }

    pub fn select_channel(&mut self, value: &str) {
        self.filter.channel = Selection::parse_open(value);
        self.recompute();
    }

    pub fn select_sentiment(&mut self, value: &str) {
        self.filter.sentiment = Selection::parse_sentiment(value);
        self.recompute();
    }

    pub fn select_attribute(&mut self, value: &str) {
        self.filter.attribute = Selection::parse_open(value);
        self.recompute();
    }

    pub fn select_sort(&mut self, value: &str) {
        self.sort = CommentSort::parse_or_default(value);
        self.recompute();
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.filter.date_range = range;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        let now = (self.clock)();
        let filtered = filter_comments(&self.slot.data, &self.filter, now);
        self.visible = sort_comments(&filtered, self.sort);
    }

    #[must_use]
    pub fn visible(&self) -> &[Comment] {
        &self.visible
    }

    /// The full acquired collection, before filtering.
    #[must_use]
    pub fn acquired(&self) -> &[Comment] {
        &self.slot.data
    }

    /// Detail lookup; searches the acquired collection so a comment stays
    /// reachable even after a filter hides it.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Comment> {
        self.slot.data.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn status(&self) -> &ViewStatus {
        &self.slot.status
    }

    #[must_use]
    pub fn filter(&self) -> &CommentFilter {
        &self.filter
    }

    #[must_use]
    pub fn sort(&self) -> CommentSort {
        self.sort
    }
}

// ---------------------------------------------------------------------------
// Video grids
// ---------------------------------------------------------------------------

/// Shorts and long-form grids, each with its own sort.
#[derive(Debug)]
pub struct VideosView {
    slot: Slot<Vec<Video>>,
    date_range: Option<DateRange>,
    shorts_sort: VideoSort,
    long_sort: VideoSort,
    shorts: Vec<Video>,
    long_form: Vec<Video>,
    clock: Clock,
}

impl Default for VideosView {
    fn default() -> Self {
        Self::with_clock(Utc::now)
    }
}

impl VideosView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            slot: Slot::default(),
            date_range: None,
            shorts_sort: VideoSort::default(),
            long_sort: VideoSort::default(),
            shorts: Vec::new(),
            long_form: Vec::new(),
            clock,
        }
    }

    pub fn begin_acquisition(&mut self) -> Generation {
        self.slot.begin()
    }

    pub fn complete_acquisition(
        &mut self,
        generation: Generation,
        acquisition: Acquisition<Vec<Video>>,
    ) -> bool {
        let applied = self.slot.complete(generation, acquisition, "videos");
        if applied {
            self.recompute();
        }
        applied
    }

    pub fn select_shorts_sort(&mut self, value: &str) {
        self.shorts_sort = VideoSort::parse_or_default(value);
        self.recompute();
    }

    pub fn select_long_sort(&mut self, value: &str) {
        self.long_sort = VideoSort::parse_or_default(value);
        self.recompute();
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.date_range = range;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        let now = (self.clock)();
        let in_range = filter_videos(&self.slot.data, self.date_range.as_ref(), now);
        let (shorts, long_form) = partition_videos(&in_range);
        self.shorts = sort_videos(&shorts, self.shorts_sort);
        self.long_form = sort_videos(&long_form, self.long_sort);
    }

    #[must_use]
    pub fn shorts(&self) -> &[Video] {
        &self.shorts
    }

    #[must_use]
    pub fn long_form(&self) -> &[Video] {
        &self.long_form
    }

    #[must_use]
    pub fn shorts_sort(&self) -> VideoSort {
        self.shorts_sort
    }

    #[must_use]
    pub fn long_sort(&self) -> VideoSort {
        self.long_sort
    }

    /// Totals over both grids as currently displayed.
    #[must_use]
    pub fn summary(&self) -> VideoSummary {
        let all: Vec<Video> = self
            .shorts
            .iter()
            .chain(self.long_form.iter())
            .cloned()
            .collect();
        summarize_videos(&all)
    }

    #[must_use]
    pub fn status(&self) -> &ViewStatus {
        &self.slot.status
    }
}

// ---------------------------------------------------------------------------
// Sentiment tab
// ---------------------------------------------------------------------------

/// Overview and details are acquired independently: one failing leaves the
/// other's data in place.
#[derive(Debug, Default)]
pub struct SentimentView {
    overview: Slot<SentimentOverview>,
    details: Slot<SentimentDetails>,
    /// `None` shows the whole group.
    positive_top: Option<EngagementPercentile>,
    negative_top: Option<EngagementPercentile>,
    positive: Vec<Comment>,
    negative: Vec<Comment>,
}

impl SentimentView {
    /// Starts with both likes filters at the 10% default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positive_top: Some(EngagementPercentile::default()),
            negative_top: Some(EngagementPercentile::default()),
            ..Self::default()
        }
    }

    pub fn begin_overview(&mut self) -> Generation {
        self.overview.begin()
    }

    pub fn complete_overview(
        &mut self,
        generation: Generation,
        acquisition: Acquisition<SentimentOverview>,
    ) -> bool {
        self.overview
            .complete(generation, acquisition, "sentiment-overview")
    }

    pub fn begin_details(&mut self) -> Generation {
        self.details.begin()
    }

    pub fn complete_details(
        &mut self,
        generation: Generation,
        acquisition: Acquisition<SentimentDetails>,
    ) -> bool {
        let applied = self
            .details
            .complete(generation, acquisition, "sentiment-details");
        if applied {
            self.recompute();
        }
        applied
    }

    /// Sets the likes filter for one side from its label. `전체`/`all` shows
    /// the whole group; other labels go through [`parse_likes_filter`].
    pub fn select_likes_filter(&mut self, sentiment: Sentiment, label: &str) {
        let choice = match label.trim() {
            "전체" | "all" => None,
            other => Some(parse_likes_filter(other)),
        };
        match sentiment {
            Sentiment::Positive => self.positive_top = choice,
            Sentiment::Negative => self.negative_top = choice,
            Sentiment::Neutral => return,
        }
        self.recompute();
    }

    pub fn recompute(&mut self) {
        let select = |comments: &[Comment], top: Option<EngagementPercentile>| match top {
            Some(percentile) => top_by_engagement(comments, percentile),
            None => comments.to_vec(),
        };
        self.positive = select(&self.details.data.positive.comments, self.positive_top);
        self.negative = select(&self.details.data.negative.comments, self.negative_top);
    }

    #[must_use]
    pub fn overview(&self) -> Option<&SentimentOverview> {
        matches!(self.overview.status, ViewStatus::Ready(_)).then_some(&self.overview.data)
    }

    #[must_use]
    pub fn overview_status(&self) -> &ViewStatus {
        &self.overview.status
    }

    #[must_use]
    pub fn details_status(&self) -> &ViewStatus {
        &self.details.status
    }

    /// Group summary text for `sentiment`, when details are loaded.
    #[must_use]
    pub fn details_summary(&self, sentiment: Sentiment) -> Option<&str> {
        if !matches!(self.details.status, ViewStatus::Ready(_)) {
            return None;
        }
        self.details
            .data
            .group(sentiment)
            .map(|g| g.summary.as_str())
    }

    /// Comments shown for one side after the likes filter.
    #[must_use]
    pub fn comments(&self, sentiment: Sentiment) -> &[Comment] {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &[],
        }
    }

    #[must_use]
    pub fn likes_filter(&self, sentiment: Sentiment) -> Option<EngagementPercentile> {
        match sentiment {
            Sentiment::Positive => self.positive_top,
            Sentiment::Negative => self.negative_top,
            Sentiment::Neutral => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Summary tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub overall: SentimentDistribution,
    pub by_channel: Vec<ChannelDistribution>,
    /// Distribution for the selected channel (equal to `overall` for all channels).
    pub selected: SentimentDistribution,
    pub attributes: Vec<AttributeSentiment>,
    pub videos: VideoSummary,
    /// Daily counts for the selected channel; empty until a range is set.
    pub trend: Vec<TrendPoint>,
    /// Change of the selected channel against the preceding window, once that
    /// window has been acquired.
    pub change: Option<SummaryChange>,
}

#[derive(Debug)]
pub struct SummaryView {
    comments: Slot<Vec<Comment>>,
    previous: Slot<Vec<Comment>>,
    videos: Slot<Vec<Video>>,
    channels: Vec<String>,
    attributes: Vec<String>,
    channel: Selection<String>,
    date_range: Option<DateRange>,
    summary: DashboardSummary,
    clock: Clock,
}

impl Default for SummaryView {
    fn default() -> Self {
        Self {
            comments: Slot::default(),
            previous: Slot::default(),
            videos: Slot::default(),
            channels: Vec::new(),
            attributes: Vec::new(),
            channel: Selection::All,
            date_range: None,
            summary: DashboardSummary::default(),
            clock: Utc::now,
        }
    }
}

impl SummaryView {
    /// `channels` and `attributes` fix the row order of the charts.
    #[must_use]
    pub fn new(channels: Vec<String>, attributes: Vec<String>) -> Self {
        Self {
            channels,
            attributes,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn begin_comments(&mut self) -> Generation {
        self.comments.begin()
    }

    pub fn complete_comments(
        &mut self,
        generation: Generation,
        acquisition: Acquisition<Vec<Comment>>,
    ) -> bool {
        let applied = self
            .comments
            .complete(generation, acquisition, "summary-comments");
        if applied {
            self.recompute();
        }
        applied
    }

    /// Comments of the window just before the selected one, for the change cards.
    pub fn begin_previous(&mut self) -> Generation {
        self.previous.begin()
    }

    pub fn complete_previous(
        &mut self,
        generation: Generation,
        acquisition: Acquisition<Vec<Comment>>,
    ) -> bool {
        let applied = self
            .previous
            .complete(generation, acquisition, "summary-previous");
        if applied {
            self.recompute();
        }
        applied
    }

    pub fn begin_videos(&mut self) -> Generation {
        self.videos.begin()
    }

    pub fn complete_videos(
        &mut self,
        generation: Generation,
        acquisition: Acquisition<Vec<Video>>,
    ) -> bool {
        let applied = self
            .videos
            .complete(generation, acquisition, "summary-videos");
        if applied {
            self.recompute();
        }
        applied
    }

    pub fn select_channel(&mut self, value: &str) {
        self.channel = Selection::parse_open(value);
        self.recompute();
    }

    /// Sets the days the trend covers.
    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.date_range = range;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        let now = (self.clock)();
        let comments = &self.comments.data;
        let channel_only = CommentFilter {
            channel: self.channel.clone(),
            ..CommentFilter::default()
        };
        let in_channel = filter_comments(comments, &channel_only, now);
        let selected = distribution(&in_channel);

        let change = matches!(self.previous.status, ViewStatus::Ready(_)).then(|| {
            let previous = filter_comments(&self.previous.data, &channel_only, now);
            summary_change(&selected, &distribution(&previous))
        });

        self.summary = DashboardSummary {
            overall: distribution(comments),
            by_channel: distribution_by_channel(comments, &self.channels),
            selected,
            attributes: attribute_breakdown(&in_channel, &self.attributes),
            videos: summarize_videos(&self.videos.data),
            trend: self
                .date_range
                .map(|range| sentiment_trend(&in_channel, &range, now))
                .unwrap_or_default(),
            change,
        };
    }

    #[must_use]
    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }

    #[must_use]
    pub fn comments_status(&self) -> &ViewStatus {
        &self.comments.status
    }

    #[must_use]
    pub fn videos_status(&self) -> &ViewStatus {
        &self.videos.status
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

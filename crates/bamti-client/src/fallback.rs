//! Embedded datasets served when the API is unreachable.

use bamti_core::{Comment, SentimentDetails, SentimentOverview, Video};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::wire::{convert_all, Items, WireComment, WireDetails, WireVideo};

const COMMENTS_JSON: &str = include_str!("../fixtures/comments.json");
const VIDEOS_JSON: &str = include_str!("../fixtures/videos.json");
const OVERVIEW_JSON: &str = include_str!("../fixtures/overview.json");
const DETAILS_JSON: &str = include_str!("../fixtures/details.json");

/// One complete replacement dataset per endpoint.
///
/// Handed to [`crate::Acquirer`] at construction; tests inject their own.
#[derive(Debug, Clone, Default)]
pub struct FallbackData {
    pub comments: Vec<Comment>,
    pub videos: Vec<Video>,
    pub overview: SentimentOverview,
    pub details: SentimentDetails,
}

impl FallbackData {
    /// Loads the fixtures compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Deserialize`] or [`ClientError::InvalidDate`] if
    /// an embedded fixture is malformed.
    pub fn embedded() -> Result<Self, ClientError> {
        let comments: Items<WireComment> = decode(COMMENTS_JSON, "fixtures/comments.json")?;
        let videos: Items<WireVideo> = decode(VIDEOS_JSON, "fixtures/videos.json")?;
        let overview: SentimentOverview = decode(OVERVIEW_JSON, "fixtures/overview.json")?;
        let details: WireDetails = decode(DETAILS_JSON, "fixtures/details.json")?;

        Ok(Self {
            comments: convert_all(comments.items)?,
            videos: convert_all(videos.items)?,
            overview,
            details: details.try_into()?,
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use bamti_core::{Catalog, Sentiment};

    use super::*;

    #[test]
    fn fixtures_cover_every_sentiment_and_channel() {
        let data = FallbackData::embedded().unwrap();
        let sentiments: HashSet<Sentiment> = data.comments.iter().map(|c| c.sentiment).collect();
        assert_eq!(sentiments.len(), 3);

        let catalog = Catalog::embedded().unwrap();
        for channel in &catalog.channels {
            assert!(
                data.comments.iter().any(|c| &c.source == channel),
                "no fallback comment for {channel}"
            );
        }
    }

    #[test]
    fn fixtures_include_edge_records() {
        let data = FallbackData::embedded().unwrap();
        assert!(data.comments.iter().any(|c| c.likes.is_none()));
        assert!(data.videos.iter().any(|v| v.sentiments.total() == 0));
        assert!(data.videos.iter().any(|v| v.is_short));
        assert!(data.videos.iter().any(|v| !v.is_short));
    }

    #[test]
    fn fixture_attributes_are_catalog_attributes() {
        let data = FallbackData::embedded().unwrap();
        let known: HashSet<String> = Catalog::embedded()
            .unwrap()
            .attribute_names()
            .into_iter()
            .collect();
        for comment in &data.comments {
            for attribute in &comment.attributes {
                assert!(known.contains(attribute), "unknown attribute {attribute}");
            }
        }
        for row in &data.overview.attribute_sentiment {
            assert!(known.contains(&row.name));
        }
    }

    #[test]
    fn details_groups_hold_matching_sentiments() {
        let data = FallbackData::embedded().unwrap();
        assert!(data
            .details
            .positive
            .comments
            .iter()
            .all(|c| c.sentiment == Sentiment::Positive));
        assert!(data
            .details
            .negative
            .comments
            .iter()
            .all(|c| c.sentiment == Sentiment::Negative));
    }
}

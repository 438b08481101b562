//! Shared domain types and configuration for the bamti dashboard.
//!
//! Everything downstream (the analysis pipeline, the API client, the CLI)
//! speaks in the record types defined here. Dates are always parsed into
//! `DateTime<Utc>` before a record reaches this layer.

pub mod acquisition;
pub mod app_config;
pub mod catalog;
pub mod config;
pub mod date_range;
pub mod error;
pub mod types;

pub use acquisition::{Acquisition, DataOrigin, DeclaredError};
pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, parse_catalog, AttributeConfig, Catalog, ProductConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use date_range::{DateRange, Period};
pub use error::ConfigError;
pub use types::{
    AttributeSentiment, Comment, DetailsGroup, Sentiment, SentimentCounts, SentimentDetails,
    SentimentOverview, Video,
};

//! Data acquisition for the bamti dashboard: a typed client for the
//! analytics API, embedded fallback datasets, and the acquirer that decides
//! between them.

pub mod acquire;
pub mod client;
pub mod error;
pub mod fallback;
pub mod mock;
pub mod wire;

pub use acquire::{declared_error, Acquirer, DEFAULT_WINDOW_DAYS};
pub use client::DashboardClient;
pub use error::ClientError;
pub use fallback::FallbackData;
pub use mock::MockGenerator;
pub use wire::parse_timestamp;

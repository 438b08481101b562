//! Outcome of one data acquisition, as seen by the views.

use thiserror::Error;

/// Where an acquired collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Remote,
    /// The remote source failed and the embedded dataset was substituted.
    Fallback,
}

/// Errors the API declares explicitly. These describe data that is known to
/// be absent, so they are shown to the user instead of being papered over
/// with fallback data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclaredError {
    #[error("등록된 키워드가 아닙니다.")]
    KeywordNotRegistered,

    #[error("해당 기간에 좋아요가 있는 댓글이 없습니다.")]
    NoEngagementInRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Acquisition<T> {
    /// No keyword was given, so nothing was requested.
    NoKeyword,
    Loaded { data: T, origin: DataOrigin },
    Declared(DeclaredError),
}

impl<T> Acquisition<T> {
    #[must_use]
    pub fn remote(data: T) -> Self {
        Acquisition::Loaded {
            data,
            origin: DataOrigin::Remote,
        }
    }

    #[must_use]
    pub fn fallback(data: T) -> Self {
        Acquisition::Loaded {
            data,
            origin: DataOrigin::Fallback,
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Acquisition::Loaded { data, .. } => Some(data),
            Acquisition::NoKeyword | Acquisition::Declared(_) => None,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Option<DataOrigin> {
        match self {
            Acquisition::Loaded { origin, .. } => Some(*origin),
            Acquisition::NoKeyword | Acquisition::Declared(_) => None,
        }
    }
}

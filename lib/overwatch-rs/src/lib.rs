mod client;
pub mod reference;
pub mod text;
pub mod types;

pub use crate::{
    client::{
        profile_url,
        search_url,
        Client,
        DEFAULT_PROFILE_BASE_URL,
        DEFAULT_SEARCH_BASE_URL,
    },
    text::{
        cast,
        sanitize,
        StatValue,
    },
    types::{
        search_result::normalize_search_results,
        Achievement,
        CategoryRef,
        GameMode,
        GameModeStats,
        Platform,
        Profile,
        ProfileReport,
        RawSearchResult,
        SearchResult,
        Season,
    },
};
pub use reqwest::StatusCode;
pub use scraper::Html;

/// Result type
pub type OwResult<T> = Result<T, Error>;

/// The kind of failure a caller of the fetch+parse operations sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The profile or tag does not exist.
    ProfileNotFound,

    /// The site answered with a server error, most likely because its markup changed.
    StructureChanged,

    /// Anything else.
    UnclassifiedFailure,
}

impl ErrorKind {
    /// Classify an http status.
    pub fn classify(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::ProfileNotFound,
            StatusCode::INTERNAL_SERVER_ERROR => Self::StructureChanged,
            _ => Self::UnclassifiedFailure,
        }
    }

    /// Get a stable name for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::StructureChanged => "TECHNICAL_EXCEPTION_HTML_STRUCTURE_MAY_HAVE_CHANGED",
            Self::UnclassifiedFailure => "TECHNICAL_EXCEPTION_NOT_IDENTIFIED",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reqwest HTTP error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Invalid HTTP Status
    #[error("{kind} (http status {status})")]
    InvalidStatus {
        kind: ErrorKind,
        status: StatusCode,
    },

    /// A tokio task failed to join
    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),

    /// The pc platform was requested without a region
    #[error("the pc platform requires a region")]
    MissingRegion,

    /// A base url has no path to append segments to
    #[error("`{0}` cannot be used as a base url")]
    CannotBeABase(url::Url),
}

impl Error {
    /// Make an error from a non-success http status
    pub fn from_status(status: StatusCode) -> Self {
        Self::InvalidStatus {
            kind: ErrorKind::classify(status),
            status,
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStatus { kind, .. } => *kind,
            _ => ErrorKind::UnclassifiedFailure,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify_status() {
        assert_eq!(
            ErrorKind::classify(StatusCode::NOT_FOUND),
            ErrorKind::ProfileNotFound
        );
        assert_eq!(
            ErrorKind::classify(StatusCode::INTERNAL_SERVER_ERROR),
            ErrorKind::StructureChanged
        );
        assert_eq!(
            ErrorKind::classify(StatusCode::BAD_GATEWAY),
            ErrorKind::UnclassifiedFailure
        );
        assert_eq!(
            ErrorKind::classify(StatusCode::FORBIDDEN),
            ErrorKind::UnclassifiedFailure
        );
    }

    #[test]
    fn error_kind() {
        let error = Error::from_status(StatusCode::NOT_FOUND);
        assert_eq!(error.kind(), ErrorKind::ProfileNotFound);
        assert!(error.to_string().starts_with("PROFILE_NOT_FOUND"));

        assert_eq!(Error::MissingRegion.kind(), ErrorKind::UnclassifiedFailure);
    }
}

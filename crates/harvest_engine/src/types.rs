use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::{HistoryError, PersistError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub final_url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Why a single link could not be turned into an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("download failed: {0}")]
    Fetch(FetchError),
    #[error("link has no file name")]
    NoFileName,
    #[error("{} is not a zip archive", .path.display())]
    NotAnArchive { path: PathBuf },
    #[error("{entry} not found in {}", .archive.display())]
    MissingEntry { archive: PathBuf, entry: String },
}

/// Result of one per-link step.
///
/// `Rejected` means the item itself is unusable; environment failures travel
/// separately as `Err(HarvestError)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome<T> {
    Done(T),
    Rejected(Rejection),
}

impl<T> StepOutcome<T> {
    /// Converts a rejection into the run-stopping error for `link`.
    pub fn accept(self, link: &str) -> Result<T, HarvestError> {
        match self {
            StepOutcome::Done(value) => Ok(value),
            StepOutcome::Rejected(rejection) => Err(HarvestError::Rejected {
                link: link.to_string(),
                rejection,
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("failed to fetch driver page {url}: {source}")]
    PageFetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("{link}: {rejection}")]
    Rejected { link: String, rejection: Rejection },
    #[error("archive error in {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

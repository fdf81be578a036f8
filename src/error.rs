use std::path::PathBuf;

use thiserror::Error;

/// Failures while pulling fields out of a single listing document.
///
/// Only [`ExtractError::PresentationNotFound`] stops a listing; everything else
/// degrades to an empty sub-record for the concern that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("presentation object not found for listing {listing_id}")]
    PresentationNotFound { listing_id: String },

    #[error("section {section} not found for listing {listing_id}")]
    SectionNotFound { listing_id: String, section: String },

    #[error("section {section} of listing {listing_id} is missing field {field}")]
    MissingSectionField {
        listing_id: String,
        section: String,
        field: String,
    },

    #[error("malformed entry in {section} of listing {listing_id}: {reason}")]
    MalformedGroupOrItem {
        listing_id: String,
        section: String,
        reason: String,
    },
}

impl ExtractError {
    /// Whether the listing can still produce a record after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::PresentationNotFound { .. })
    }

    pub fn listing_id(&self) -> &str {
        match self {
            Self::PresentationNotFound { listing_id }
            | Self::SectionNotFound { listing_id, .. }
            | Self::MissingSectionField { listing_id, .. }
            | Self::MalformedGroupOrItem { listing_id, .. } => listing_id,
        }
    }
}

#[derive(Error, Debug)]
pub enum PdpError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read listing {listing_id}: {reason}")]
    Source { listing_id: String, reason: String },

    #[error("Cannot read data directory {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Worker pool closed: {0}")]
    WorkerPool(#[from] tokio::sync::AcquireError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, PdpError>;

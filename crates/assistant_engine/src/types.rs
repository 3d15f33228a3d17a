use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

/// The `payload` object of a successful backend response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerPayload {
    pub message: String,
    pub chunks: Vec<ChunkRecord>,
}

/// One retrieved chunk. Fields other than `metadata.source` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChunkRecord {
    pub metadata: ChunkMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChunkMetadata {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnswerCompleted {
        request_id: RequestId,
        result: Result<AnswerPayload, AskError>,
    },
    HealthChecked {
        result: Result<(), AskError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskError {
    pub kind: FailureKind,
    pub message: String,
}

impl AskError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedPayload,
    Cancelled,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedPayload => write!(f, "malformed payload"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine thread or runtime: {0}")]
    Startup(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(String),
}

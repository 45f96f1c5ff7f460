use std::fmt;

pub type JobId = u64;

/// One document of a submission: raw bytes plus its category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPart {
    pub name: String,
    pub category: String,
    pub bytes: Vec<u8>,
}

/// The full bundle posted to the summarization endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub documents: Vec<DocumentPart>,
    pub summary_type: String,
}

/// Binary response of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryArtifact {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// Suggested download filename, derived from the content type.
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    JobCompleted {
        job_id: JobId,
        result: Result<SummaryArtifact, FailureKind>,
    },
    AuthCompleted {
        authenticated: bool,
        identity: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

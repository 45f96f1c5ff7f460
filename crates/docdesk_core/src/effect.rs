use crate::state::{DocumentCategory, JobId, SummaryType};

/// A document bundled into a dispatched submission. Owned by the job from
/// dispatch time; the intake list is cleared once the effect is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    pub name: String,
    pub category: DocumentCategory,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Check credentials against the identity endpoint.
    Authenticate { username: String, password: String },
    /// Dispatch a summary request for a freshly created job.
    SubmitSummary {
        job_id: JobId,
        documents: Vec<DocumentPayload>,
        summary_type: SummaryType,
    },
    /// Write a completed job's artifact to disk.
    SaveArtifact {
        job_id: JobId,
        filename: String,
        bytes: Vec<u8>,
    },
}

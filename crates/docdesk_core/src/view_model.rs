use crate::state::{
    DocumentCategory, JobId, JobStatus, SummaryType, ValidationError,
};

/// Author of a chat transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub authenticated: bool,
    pub identity: Option<String>,
    pub documents: Vec<DocumentRowView>,
    pub summary_type: Option<SummaryType>,
    pub validation: Option<ValidationError>,
    pub jobs: Vec<JobRowView>,
    pub job_count: usize,
    pub history: Vec<HistoryRowView>,
    pub chat: Vec<ChatLineView>,
    pub editor: EditorView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRowView {
    pub name: String,
    pub category: DocumentCategory,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub summary_type: SummaryType,
    pub status: JobStatus,
    /// Byte length of the artifact; `Some` exactly when status is `Complete`.
    pub artifact_len: Option<u64>,
    pub failure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub job_id: JobId,
    pub summary_type: SummaryType,
    pub byte_len: u64,
    pub finished_utc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLineView {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub buffer: String,
    pub version_index: usize,
    pub version_count: usize,
    pub at_latest: bool,
}

impl Default for EditorView {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            version_index: 0,
            version_count: 1,
            at_latest: true,
        }
    }
}

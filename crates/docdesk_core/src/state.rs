use std::collections::BTreeMap;
use std::fmt;

use crate::effect::DocumentPayload;
use crate::msg::JobOutcome;
use crate::view_model::{
    AppViewModel, ChatLineView, ChatRole, DocumentRowView, EditorView, HistoryRowView, JobRowView,
};

pub type JobId = u64;

/// Status of a tracked summary job. Transitions are forward-only:
/// `Processing -> Complete` or `Processing -> Error`, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Processing,
    Complete,
    Error,
}

/// Retrievable payload of a completed job: the response bytes plus the
/// filename the download action should suggest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct JobRecord {
    summary_type: SummaryType,
    status: JobStatus,
    artifact: Option<Artifact>,
    failure: Option<String>,
    finished_utc: Option<String>,
}

/// Category label attached to each intake document before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentCategory {
    #[default]
    Unknown,
    Report,
    Presentation,
    Spreadsheet,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 4] = [
        DocumentCategory::Unknown,
        DocumentCategory::Report,
        DocumentCategory::Presentation,
        DocumentCategory::Spreadsheet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::Unknown => "Unknown",
            DocumentCategory::Report => "Report",
            DocumentCategory::Presentation => "Presentation",
            DocumentCategory::Spreadsheet => "Spreadsheet",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Kind of summary requested for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryType {
    Executive,
    Technical,
    Financial,
}

impl SummaryType {
    pub const ALL: [SummaryType; 3] = [
        SummaryType::Executive,
        SummaryType::Technical,
        SummaryType::Financial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryType::Executive => "Executive",
            SummaryType::Technical => "Technical",
            SummaryType::Financial => "Financial",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|summary_type| summary_type.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// A freshly attached file, before it gets a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInput {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Document {
    name: String,
    category: DocumentCategory,
    bytes: Vec<u8>,
}

/// Inline rejection of a Generate click. No job is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NoDocuments,
    NoSummaryType,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoDocuments => write!(f, "attach at least one document"),
            ValidationError::NoSummaryType => write!(f, "select a summary type"),
        }
    }
}

/// Completed job exported for cross-session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedJobSnapshot {
    pub job_id: JobId,
    pub summary_type: SummaryType,
    pub byte_len: u64,
    pub finished_utc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Session {
    authenticated: bool,
    identity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatEntry {
    role: ChatRole,
    content: String,
}

const INITIAL_CODE: &str = "# Enter your Python code here";

#[derive(Debug, Clone, PartialEq, Eq)]
struct EditorState {
    buffer: String,
    versions: Vec<String>,
    cursor: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            buffer: INITIAL_CODE.to_string(),
            versions: vec![INITIAL_CODE.to_string()],
            cursor: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    session: Session,
    documents: Vec<Document>,
    summary_type: Option<SummaryType>,
    validation: Option<ValidationError>,
    next_job_id: JobId,
    jobs: BTreeMap<JobId, JobRecord>,
    history: Vec<CompletedJobSnapshot>,
    chat: Vec<ChatEntry>,
    editor: EditorState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            authenticated: self.session.authenticated,
            identity: self.session.identity.clone(),
            documents: self
                .documents
                .iter()
                .map(|doc| DocumentRowView {
                    name: doc.name.clone(),
                    category: doc.category,
                    byte_len: doc.bytes.len() as u64,
                })
                .collect(),
            summary_type: self.summary_type,
            validation: self.validation,
            jobs: self
                .jobs
                .iter()
                .map(|(job_id, record)| JobRowView {
                    job_id: *job_id,
                    summary_type: record.summary_type,
                    status: record.status,
                    artifact_len: record.artifact.as_ref().map(|a| a.bytes.len() as u64),
                    failure: record.failure.clone(),
                })
                .collect(),
            job_count: self.jobs.len(),
            history: self
                .history
                .iter()
                .map(|snapshot| HistoryRowView {
                    job_id: snapshot.job_id,
                    summary_type: snapshot.summary_type,
                    byte_len: snapshot.byte_len,
                    finished_utc: snapshot.finished_utc.clone(),
                })
                .collect(),
            chat: self
                .chat
                .iter()
                .map(|entry| ChatLineView {
                    role: entry.role,
                    content: entry.content.clone(),
                })
                .collect(),
            editor: EditorView {
                buffer: self.editor.buffer.clone(),
                version_index: self.editor.cursor,
                version_count: self.editor.versions.len(),
                at_latest: self.editor.cursor + 1 == self.editor.versions.len(),
            },
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; the driver re-renders on `true`.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    pub(crate) fn apply_auth(&mut self, authenticated: bool, identity: Option<String>) {
        self.session.authenticated = authenticated;
        self.session.identity = if authenticated { identity } else { None };
        self.mark_dirty();
    }

    pub(crate) fn end_session(&mut self) {
        if self.session == Session::default() {
            return;
        }
        self.session = Session::default();
        self.mark_dirty();
    }

    pub(crate) fn add_documents(&mut self, inputs: Vec<DocumentInput>) {
        if inputs.is_empty() {
            return;
        }
        self.documents.extend(inputs.into_iter().map(|input| Document {
            name: input.name,
            category: DocumentCategory::default(),
            bytes: input.bytes,
        }));
        self.mark_dirty();
    }

    pub(crate) fn set_document_category(&mut self, index: usize, category: DocumentCategory) {
        let Some(doc) = self.documents.get_mut(index) else {
            return;
        };
        if doc.category != category {
            doc.category = category;
            self.mark_dirty();
        }
    }

    pub(crate) fn remove_document(&mut self, index: usize) {
        if index < self.documents.len() {
            self.documents.remove(index);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_summary_type(&mut self, summary_type: Option<SummaryType>) {
        if self.summary_type != summary_type {
            self.summary_type = summary_type;
            self.mark_dirty();
        }
    }

    /// Validates the intake pane and, on acceptance, creates a `Processing`
    /// job and hands back the submission bundle. The intake documents move
    /// into the bundle so a later submission cannot merge with this one.
    pub(crate) fn begin_submission(
        &mut self,
    ) -> Result<(JobId, Vec<DocumentPayload>, SummaryType), ValidationError> {
        let outcome = if self.documents.is_empty() {
            Err(ValidationError::NoDocuments)
        } else {
            match self.summary_type {
                None => Err(ValidationError::NoSummaryType),
                Some(summary_type) => Ok(summary_type),
            }
        };

        match outcome {
            Err(err) => {
                self.validation = Some(err);
                self.mark_dirty();
                Err(err)
            }
            Ok(summary_type) => {
                self.validation = None;
                self.next_job_id += 1;
                let job_id = self.next_job_id;
                self.jobs.insert(
                    job_id,
                    JobRecord {
                        summary_type,
                        status: JobStatus::Processing,
                        artifact: None,
                        failure: None,
                        finished_utc: None,
                    },
                );
                let documents = std::mem::take(&mut self.documents)
                    .into_iter()
                    .map(|doc| DocumentPayload {
                        name: doc.name,
                        category: doc.category,
                        bytes: doc.bytes,
                    })
                    .collect();
                self.mark_dirty();
                Ok((job_id, documents, summary_type))
            }
        }
    }

    /// Terminal-guarded transition. Unknown ids and records already out of
    /// `Processing` are ignored so late or duplicate callbacks cannot
    /// corrupt a terminal record; the first resolution wins.
    pub(crate) fn apply_resolution(&mut self, job_id: JobId, outcome: JobOutcome) {
        let Some(record) = self.jobs.get_mut(&job_id) else {
            return;
        };
        if record.status != JobStatus::Processing {
            return;
        }
        match outcome {
            JobOutcome::Completed {
                artifact,
                finished_utc,
            } => {
                record.status = JobStatus::Complete;
                record.artifact = Some(artifact);
                record.finished_utc = Some(finished_utc);
            }
            JobOutcome::Failed { reason } => {
                record.status = JobStatus::Error;
                record.failure = Some(reason);
            }
        }
        self.mark_dirty();
    }

    /// Artifact of a `Complete` job, for the download effect. Read-only.
    pub(crate) fn artifact_for(&self, job_id: JobId) -> Option<&Artifact> {
        let record = self.jobs.get(&job_id)?;
        match record.status {
            JobStatus::Complete => record.artifact.as_ref(),
            _ => None,
        }
    }

    pub fn completed_jobs_snapshot(&self) -> Vec<CompletedJobSnapshot> {
        self.jobs
            .iter()
            .filter(|(_, record)| record.status == JobStatus::Complete)
            .map(|(job_id, record)| CompletedJobSnapshot {
                job_id: *job_id,
                summary_type: record.summary_type,
                byte_len: record
                    .artifact
                    .as_ref()
                    .map(|a| a.bytes.len() as u64)
                    .unwrap_or(0),
                finished_utc: record.finished_utc.clone().unwrap_or_default(),
            })
            .collect()
    }

    /// Imports completed jobs from a previous run into the history list.
    /// They stay out of the registry: a registry record may only claim
    /// `Complete` while it holds its artifact.
    pub(crate) fn restore_history(&mut self, snapshots: Vec<CompletedJobSnapshot>) {
        if snapshots.is_empty() {
            return;
        }
        self.history.extend(snapshots);
        self.mark_dirty();
    }

    pub(crate) fn push_chat_user(&mut self, content: String) {
        self.chat.push(ChatEntry {
            role: ChatRole::User,
            content,
        });
        self.mark_dirty();
    }

    pub(crate) fn push_chat_pair(&mut self, user: String, assistant: String) {
        self.chat.push(ChatEntry {
            role: ChatRole::User,
            content: user,
        });
        self.chat.push(ChatEntry {
            role: ChatRole::Assistant,
            content: assistant,
        });
        self.mark_dirty();
    }

    pub(crate) fn clear_chat(&mut self) {
        if !self.chat.is_empty() {
            self.chat.clear();
            self.mark_dirty();
        }
    }

    pub(crate) fn edit_code(&mut self, text: String) {
        if self.editor.buffer != text {
            self.editor.buffer = text;
            self.mark_dirty();
        }
    }

    /// Appends the current buffer as a new version and jumps to it, even
    /// when the cursor was parked on an older version.
    pub(crate) fn save_code(&mut self) {
        self.editor.versions.push(self.editor.buffer.clone());
        self.editor.cursor = self.editor.versions.len() - 1;
        self.mark_dirty();
    }

    pub(crate) fn code_version_back(&mut self) {
        if self.editor.cursor > 0 {
            self.editor.cursor -= 1;
            self.editor.buffer = self.editor.versions[self.editor.cursor].clone();
            self.mark_dirty();
        }
    }

    pub(crate) fn code_version_forward(&mut self) {
        if self.editor.cursor + 1 < self.editor.versions.len() {
            self.editor.cursor += 1;
            self.editor.buffer = self.editor.versions[self.editor.cursor].clone();
            self.mark_dirty();
        }
    }
}

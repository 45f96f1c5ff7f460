use crate::state::{Artifact, CompletedJobSnapshot, DocumentCategory, DocumentInput, SummaryType};

/// Terminal outcome delivered for a dispatched job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The service returned a summary payload.
    Completed {
        artifact: Artifact,
        finished_utc: String,
    },
    /// The request failed; the reason is shown in the status row.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted credentials from the login form.
    LoginSubmitted { username: String, password: String },
    /// Credential check finished (delivered by the engine bridge).
    AuthCompleted {
        authenticated: bool,
        identity: Option<String>,
    },
    /// User clicked sign-out.
    LogoutClicked,
    /// User attached one or more files to the intake list.
    FilesAdded(Vec<DocumentInput>),
    /// User relabeled a document in the intake list.
    DocumentCategoryChanged {
        index: usize,
        category: DocumentCategory,
    },
    /// User removed a document from the intake list.
    DocumentRemoved { index: usize },
    /// User picked (or unset) the summary type for the next submission.
    SummaryTypeSelected(Option<SummaryType>),
    /// User clicked Generate Summary.
    GenerateClicked,
    /// A dispatched job resolved (delivered by the engine bridge).
    JobResolved {
        job_id: crate::JobId,
        outcome: JobOutcome,
    },
    /// User clicked Download on a completed job.
    DownloadRequested { job_id: crate::JobId },
    /// Restore completed-job history from persisted state.
    RestoreHistory(Vec<CompletedJobSnapshot>),
    /// User typed a chat message.
    ChatMessageSent(String),
    /// User clicked one of the example prompts.
    ChatPromptClicked(usize),
    /// User cleared the chat transcript.
    ChatCleared,
    /// User edited the code buffer.
    CodeEdited(String),
    /// User clicked Save Code.
    CodeSaved,
    /// User stepped to the previous saved code version.
    CodeVersionBack,
    /// User stepped to the next saved code version.
    CodeVersionForward,
    /// Fallback for placeholder wiring.
    NoOp,
}

//! DocDesk core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{DocumentPayload, Effect};
pub use msg::{JobOutcome, Msg};
pub use state::{
    AppState, Artifact, CompletedJobSnapshot, DocumentCategory, DocumentInput, JobId, JobStatus,
    SummaryType, ValidationError,
};
pub use update::{update, EXAMPLE_PROMPTS};
pub use view_model::{
    AppViewModel, ChatLineView, ChatRole, DocumentRowView, EditorView, HistoryRowView, JobRowView,
};

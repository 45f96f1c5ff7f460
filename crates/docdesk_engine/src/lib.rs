//! DocDesk engine: network IO and effect execution.
mod auth;
mod engine;
mod filename;
mod persist;
mod submit;
mod types;

pub use auth::{AuthSettings, CredentialCheck, HttpCredentialCheck};
pub use engine::{EngineConfig, EngineHandle};
pub use filename::artifact_filename;
pub use persist::{ensure_output_dir, ArtifactWriter, PersistError};
pub use submit::{ReqwestSubmitter, SubmitSettings, Submitter};
pub use types::{
    DocumentPart, EngineEvent, FailureKind, JobId, SubmitError, SummaryArtifact, SummaryRequest,
};

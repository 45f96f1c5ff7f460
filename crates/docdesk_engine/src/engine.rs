use std::sync::{mpsc, Arc};
use std::thread;

use desk_logging::desk_warn;

use crate::auth::{AuthSettings, CredentialCheck, HttpCredentialCheck};
use crate::submit::{ReqwestSubmitter, SubmitSettings, Submitter};
use crate::{EngineEvent, JobId, SummaryRequest};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub submit: SubmitSettings,
    pub auth: AuthSettings,
}

enum EngineCommand {
    Submit { job_id: JobId, request: SummaryRequest },
    Authenticate { username: String, password: String },
}

/// Handle to the engine thread. Commands are fire-and-forget; every one
/// is answered by exactly one event on the receiver returned from `new`.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let submitter = Arc::new(ReqwestSubmitter::new(config.submit));
        let checker = Arc::new(HttpCredentialCheck::new(config.auth));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let submitter = submitter.clone();
                let checker = checker.clone();
                let event_tx = event_tx.clone();
                // Each command runs as its own task, so jobs resolve
                // independently and may finish out of order.
                runtime.spawn(async move {
                    handle_command(submitter.as_ref(), checker.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn submit(&self, job_id: JobId, request: SummaryRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { job_id, request });
    }

    pub fn authenticate(&self, username: impl Into<String>, password: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Authenticate {
            username: username.into(),
            password: password.into(),
        });
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    checker: &dyn CredentialCheck,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit { job_id, request } => {
            let result = submitter.submit(job_id, request).await.map_err(|err| {
                desk_warn!("Job {} failed: {} ({})", job_id, err.kind, err.message);
                err.kind
            });
            let _ = event_tx.send(EngineEvent::JobCompleted { job_id, result });
        }
        EngineCommand::Authenticate { username, password } => {
            let authenticated = checker.check(&username, &password).await;
            let identity = authenticated.then_some(username);
            let _ = event_tx.send(EngineEvent::AuthCompleted {
                authenticated,
                identity,
            });
        }
    }
}

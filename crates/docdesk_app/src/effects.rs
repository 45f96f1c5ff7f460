use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use chrono::Utc;
use desk_logging::{desk_info, desk_warn};
use docdesk_core::{Artifact, Effect, JobOutcome, Msg};
use docdesk_engine::{
    ArtifactWriter, DocumentPart, EngineConfig, EngineEvent, EngineHandle, SummaryRequest,
};

use crate::Input;

/// Bridges core effects onto the engine and engine events back onto the
/// main loop as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    writer: ArtifactWriter,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, output_dir: PathBuf, input_tx: mpsc::Sender<Input>) -> Self {
        let (engine, event_rx) = EngineHandle::new(config);
        spawn_event_loop(event_rx, input_tx);
        Self {
            engine,
            writer: ArtifactWriter::new(output_dir),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::Authenticate { username, password } => {
                self.engine.authenticate(username, password);
            }
            Effect::SubmitSummary {
                job_id,
                documents,
                summary_type,
            } => {
                let documents = documents
                    .into_iter()
                    .map(|doc| DocumentPart {
                        name: doc.name,
                        category: doc.category.label().to_string(),
                        bytes: doc.bytes,
                    })
                    .collect();
                let request = SummaryRequest {
                    documents,
                    summary_type: summary_type.label().to_string(),
                };
                self.engine.submit(job_id, request);
            }
            Effect::SaveArtifact {
                job_id,
                filename,
                bytes,
            } => match self.writer.write(&filename, &bytes) {
                Ok(path) => println!("Saved summary for job {job_id} to {}", path.display()),
                Err(err) => {
                    desk_warn!("Could not save artifact for job {}: {}", job_id, err);
                    println!("Could not save summary for job {job_id}: {err}");
                }
            },
        }
    }
}

/// Forwards engine events to the main loop until either side hangs up.
fn spawn_event_loop(event_rx: mpsc::Receiver<EngineEvent>, input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                EngineEvent::JobCompleted { job_id, result } => {
                    let outcome = match result {
                        Ok(artifact) => {
                            desk_info!(
                                "Job {} completed with {} bytes",
                                job_id,
                                artifact.bytes.len()
                            );
                            JobOutcome::Completed {
                                artifact: Artifact {
                                    bytes: artifact.bytes,
                                    filename: artifact.filename,
                                },
                                finished_utc: Utc::now().to_rfc3339(),
                            }
                        }
                        Err(kind) => JobOutcome::Failed {
                            reason: kind.to_string(),
                        },
                    };
                    Msg::JobResolved { job_id, outcome }
                }
                EngineEvent::AuthCompleted {
                    authenticated,
                    identity,
                } => Msg::AuthCompleted {
                    authenticated,
                    identity,
                },
            };
            if input_tx.send(Input::Msg(msg)).is_err() {
                return;
            }
        }
    });
}

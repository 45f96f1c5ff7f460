use docdesk_core::{
    update, AppState, Artifact, DocumentInput, Effect, JobId, JobOutcome, JobStatus, Msg,
    SummaryType,
};

fn init_logging() {
    desk_logging::initialize_for_tests();
}

fn artifact(bytes: &[u8]) -> Artifact {
    Artifact {
        bytes: bytes.to_vec(),
        filename: "summary_1.pdf".to_string(),
    }
}

fn completed(bytes: &[u8]) -> JobOutcome {
    JobOutcome::Completed {
        artifact: artifact(bytes),
        finished_utc: "2024-01-01T00:00:00Z".to_string(),
    }
}

/// Attaches one document, picks a summary type, and clicks Generate.
fn submit_one(state: AppState, name: &str) -> (AppState, Vec<Effect>, JobId) {
    let (state, _) = update(
        state,
        Msg::FilesAdded(vec![DocumentInput {
            name: name.to_string(),
            bytes: b"doc-bytes".to_vec(),
        }]),
    );
    let (state, _) = update(
        state,
        Msg::SummaryTypeSelected(Some(SummaryType::Executive)),
    );
    let (state, effects) = update(state, Msg::GenerateClicked);
    let job_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SubmitSummary { job_id, .. } => Some(*job_id),
            _ => None,
        })
        .expect("submit effect");
    (state, effects, job_id)
}

#[test]
fn job_ids_are_distinct_and_ascending() {
    init_logging();
    let state = AppState::new();
    let (state, _, first) = submit_one(state, "a.txt");
    let (state, _, second) = submit_one(state, "b.txt");
    let (state, _, third) = submit_one(state, "c.txt");

    assert!(first < second && second < third);
    let ids: Vec<_> = state.view().jobs.iter().map(|j| j.job_id).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn success_resolution_attaches_artifact() {
    init_logging();
    let (state, _, job_id) = submit_one(AppState::new(), "report.txt");
    assert_eq!(state.view().jobs[0].status, JobStatus::Processing);
    assert_eq!(state.view().jobs[0].artifact_len, None);

    let (mut state, effects) = update(
        state,
        Msg::JobResolved {
            job_id,
            outcome: completed(b"PDFPAYLOAD"),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let row = state.view().jobs[0].clone();
    assert_eq!(row.status, JobStatus::Complete);
    assert_eq!(row.artifact_len, Some(10));
    assert_eq!(row.failure, None);
}

#[test]
fn failure_resolution_records_reason_without_artifact() {
    init_logging();
    let (state, _, job_id) = submit_one(AppState::new(), "report.txt");

    let (state, _) = update(
        state,
        Msg::JobResolved {
            job_id,
            outcome: JobOutcome::Failed {
                reason: "http status 500".to_string(),
            },
        },
    );

    let row = state.view().jobs[0].clone();
    assert_eq!(row.status, JobStatus::Error);
    assert_eq!(row.artifact_len, None);
    assert_eq!(row.failure.as_deref(), Some("http status 500"));
}

#[test]
fn resolution_for_unknown_id_is_ignored() {
    init_logging();
    let (state, _, job_id) = submit_one(AppState::new(), "report.txt");

    let (mut state, effects) = update(
        state,
        Msg::JobResolved {
            job_id: job_id + 99,
            outcome: completed(b"stray"),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view().jobs[0].status, JobStatus::Processing);
}

#[test]
fn first_resolution_wins_over_late_duplicates() {
    init_logging();
    let (state, _, job_id) = submit_one(AppState::new(), "report.txt");

    let (mut state, _) = update(
        state,
        Msg::JobResolved {
            job_id,
            outcome: completed(b"first"),
        },
    );
    assert!(state.consume_dirty());
    let before = state.view();

    // Duplicate success with a different payload, then a conflicting failure.
    let (state, _) = update(
        state,
        Msg::JobResolved {
            job_id,
            outcome: completed(b"second-longer-payload"),
        },
    );
    let (mut state, _) = update(
        state,
        Msg::JobResolved {
            job_id,
            outcome: JobOutcome::Failed {
                reason: "late failure".to_string(),
            },
        },
    );

    assert!(!state.consume_dirty());
    let after = state.view();
    assert_eq!(after.jobs, before.jobs);
    assert_eq!(after.jobs[0].artifact_len, Some(5));
}

#[test]
fn out_of_order_resolution_keeps_creation_order() {
    init_logging();
    let (state, _, job_a) = submit_one(AppState::new(), "a.txt");
    let (state, _, job_b) = submit_one(state, "b.txt");

    // B resolves before A.
    let (state, _) = update(
        state,
        Msg::JobResolved {
            job_id: job_b,
            outcome: completed(b"B"),
        },
    );
    let (state, _) = update(
        state,
        Msg::JobResolved {
            job_id: job_a,
            outcome: JobOutcome::Failed {
                reason: "timeout".to_string(),
            },
        },
    );

    let view = state.view();
    assert_eq!(view.jobs[0].job_id, job_a);
    assert_eq!(view.jobs[0].status, JobStatus::Error);
    assert_eq!(view.jobs[1].job_id, job_b);
    assert_eq!(view.jobs[1].status, JobStatus::Complete);
}

#[test]
fn artifact_present_iff_complete() {
    init_logging();
    let (state, _, job_a) = submit_one(AppState::new(), "a.txt");
    let (state, _, job_b) = submit_one(state, "b.txt");
    let (state, _, _job_c) = submit_one(state, "c.txt");

    let (state, _) = update(
        state,
        Msg::JobResolved {
            job_id: job_a,
            outcome: completed(b"A"),
        },
    );
    let (state, _) = update(
        state,
        Msg::JobResolved {
            job_id: job_b,
            outcome: JobOutcome::Failed {
                reason: "network error".to_string(),
            },
        },
    );

    for row in state.view().jobs {
        assert_eq!(row.artifact_len.is_some(), row.status == JobStatus::Complete);
    }
}

#[test]
fn download_emits_effect_without_mutating_the_record() {
    init_logging();
    let (state, _, job_id) = submit_one(AppState::new(), "report.txt");
    let (mut state, _) = update(
        state,
        Msg::JobResolved {
            job_id,
            outcome: completed(b"PAYLOAD"),
        },
    );
    assert!(state.consume_dirty());
    let before = state.view();

    let (mut state, effects) = update(state, Msg::DownloadRequested { job_id });
    assert_eq!(
        effects,
        vec![Effect::SaveArtifact {
            job_id,
            filename: "summary_1.pdf".to_string(),
            bytes: b"PAYLOAD".to_vec(),
        }]
    );
    assert!(!state.consume_dirty());
    assert_eq!(state.view(), before);
}

#[test]
fn download_on_processing_or_failed_job_is_ignored() {
    init_logging();
    let (state, _, job_a) = submit_one(AppState::new(), "a.txt");
    let (state, effects) = update(state, Msg::DownloadRequested { job_id: job_a });
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::JobResolved {
            job_id: job_a,
            outcome: JobOutcome::Failed {
                reason: "http status 404".to_string(),
            },
        },
    );
    let (_, effects) = update(state, Msg::DownloadRequested { job_id: job_a });
    assert!(effects.is_empty());
}

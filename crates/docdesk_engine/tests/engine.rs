use std::time::Duration;

use docdesk_engine::{
    AuthSettings, DocumentPart, EngineConfig, EngineEvent, EngineHandle, FailureKind,
    SubmitSettings, SummaryRequest,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EVENT_WAIT: Duration = Duration::from_secs(10);

fn request(name: &str) -> SummaryRequest {
    SummaryRequest {
        documents: vec![DocumentPart {
            name: name.to_string(),
            category: "Report".to_string(),
            bytes: b"doc".to_vec(),
        }],
        summary_type: "Technical".to_string(),
    }
}

fn config_for(server: &MockServer) -> EngineConfig {
    EngineConfig {
        submit: SubmitSettings {
            endpoint: format!("{}/generate_summary", server.uri()),
            ..SubmitSettings::default()
        },
        auth: AuthSettings {
            endpoint: format!("{}/login", server.uri()),
            ..AuthSettings::default()
        },
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_delivers_one_completion_event_per_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_summary"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"%PDF".to_vec(), "application/pdf"))
        .mount(&server)
        .await;

    let (engine, events) = EngineHandle::new(config_for(&server));
    engine.submit(1, request("a.docx"));
    engine.submit(2, request("b.docx"));

    let mut completed = Vec::new();
    for _ in 0..2 {
        match events.recv_timeout(EVENT_WAIT).expect("engine event") {
            EngineEvent::JobCompleted { job_id, result } => {
                assert_eq!(result.expect("success").bytes, b"%PDF");
                completed.push(job_id);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    completed.sort_unstable();
    assert_eq!(completed, vec![1, 2]);
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_failure_kind_for_rejected_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate_summary"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (engine, events) = EngineHandle::new(config_for(&server));
    engine.submit(7, request("a.docx"));

    match events.recv_timeout(EVENT_WAIT).expect("engine event") {
        EngineEvent::JobCompleted { job_id, result } => {
            assert_eq!(job_id, 7);
            assert_eq!(result.unwrap_err(), FailureKind::HttpStatus(503));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_authenticates_against_the_identity_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (engine, events) = EngineHandle::new(config_for(&server));
    engine.authenticate("alice", "hunter2");

    match events.recv_timeout(EVENT_WAIT).expect("engine event") {
        EngineEvent::AuthCompleted {
            authenticated,
            identity,
        } => {
            assert!(authenticated);
            assert_eq!(identity.as_deref(), Some("alice"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_rejected_credentials_as_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (engine, events) = EngineHandle::new(config_for(&server));
    engine.authenticate("alice", "wrong");

    match events.recv_timeout(EVENT_WAIT).expect("engine event") {
        EngineEvent::AuthCompleted {
            authenticated,
            identity,
        } => {
            assert!(!authenticated);
            assert_eq!(identity, None);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

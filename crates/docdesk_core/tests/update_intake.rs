use docdesk_core::{
    update, AppState, DocumentCategory, DocumentInput, Effect, Msg, SummaryType, ValidationError,
};

fn init_logging() {
    desk_logging::initialize_for_tests();
}

fn doc(name: &str) -> DocumentInput {
    DocumentInput {
        name: name.to_string(),
        bytes: format!("contents of {name}").into_bytes(),
    }
}

#[test]
fn attached_files_default_to_unknown_category() {
    init_logging();
    let (mut state, effects) = update(
        AppState::new(),
        Msg::FilesAdded(vec![doc("q1.xlsx"), doc("deck.pptx")]),
    );

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.documents.len(), 2);
    assert!(view
        .documents
        .iter()
        .all(|row| row.category == DocumentCategory::Unknown));
}

#[test]
fn category_can_be_reassigned_before_submission() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FilesAdded(vec![doc("q1.xlsx")]));
    let (state, _) = update(
        state,
        Msg::DocumentCategoryChanged {
            index: 0,
            category: DocumentCategory::Spreadsheet,
        },
    );

    assert_eq!(
        state.view().documents[0].category,
        DocumentCategory::Spreadsheet
    );

    // Out-of-range index is ignored.
    let (mut state, _) = update(
        state,
        Msg::DocumentCategoryChanged {
            index: 5,
            category: DocumentCategory::Report,
        },
    );
    state.consume_dirty();
    assert_eq!(state.view().documents.len(), 1);
}

#[test]
fn document_removal_shrinks_the_intake_list() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FilesAdded(vec![doc("a.txt"), doc("b.txt")]),
    );
    let (state, _) = update(state, Msg::DocumentRemoved { index: 0 });

    let view = state.view();
    assert_eq!(view.documents.len(), 1);
    assert_eq!(view.documents[0].name, "b.txt");
}

#[test]
fn generate_with_no_documents_reports_validation_error() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::SummaryTypeSelected(Some(SummaryType::Technical)),
    );
    let (state, effects) = update(state, Msg::GenerateClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.validation, Some(ValidationError::NoDocuments));
    assert_eq!(view.job_count, 0);
}

#[test]
fn generate_with_no_summary_type_reports_validation_error() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FilesAdded(vec![doc("a.txt")]));
    let (state, effects) = update(state, Msg::GenerateClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.validation, Some(ValidationError::NoSummaryType));
    assert_eq!(view.job_count, 0);
}

#[test]
fn accepted_submission_bundles_documents_and_clears_intake() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FilesAdded(vec![doc("report.docx"), doc("figures.xlsx")]),
    );
    let (state, _) = update(
        state,
        Msg::DocumentCategoryChanged {
            index: 0,
            category: DocumentCategory::Report,
        },
    );
    let (state, _) = update(
        state,
        Msg::SummaryTypeSelected(Some(SummaryType::Executive)),
    );
    let (state, effects) = update(state, Msg::GenerateClicked);

    assert_eq!(effects.len(), 1);
    let Effect::SubmitSummary {
        job_id,
        documents,
        summary_type,
    } = &effects[0]
    else {
        panic!("expected submit effect, got {effects:?}");
    };
    assert_eq!(*job_id, 1);
    assert_eq!(*summary_type, SummaryType::Executive);
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].name, "report.docx");
    assert_eq!(documents[0].category, DocumentCategory::Report);
    assert_eq!(documents[1].category, DocumentCategory::Unknown);

    let view = state.view();
    assert!(view.documents.is_empty());
    assert_eq!(view.validation, None);
    assert_eq!(view.job_count, 1);
}

#[test]
fn validation_error_clears_on_next_accepted_submission() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::SummaryTypeSelected(Some(SummaryType::Financial)),
    );
    let (state, _) = update(state, Msg::GenerateClicked);
    assert_eq!(
        state.view().validation,
        Some(ValidationError::NoDocuments)
    );

    let (state, _) = update(state, Msg::FilesAdded(vec![doc("a.txt")]));
    let (state, effects) = update(state, Msg::GenerateClicked);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().validation, None);
}

#[test]
fn documents_attached_after_dispatch_stay_out_of_the_inflight_job() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FilesAdded(vec![doc("first.txt")]));
    let (state, _) = update(
        state,
        Msg::SummaryTypeSelected(Some(SummaryType::Executive)),
    );
    let (state, first_effects) = update(state, Msg::GenerateClicked);

    // New documents arrive while job 1 is still in flight.
    let (state, _) = update(state, Msg::FilesAdded(vec![doc("late.txt")]));
    let (_, second_effects) = update(state, Msg::GenerateClicked);

    let docs_of = |effects: &[Effect]| match &effects[0] {
        Effect::SubmitSummary { documents, .. } => {
            documents.iter().map(|d| d.name.clone()).collect::<Vec<_>>()
        }
        other => panic!("expected submit effect, got {other:?}"),
    };
    assert_eq!(docs_of(&first_effects), vec!["first.txt"]);
    assert_eq!(docs_of(&second_effects), vec!["late.txt"]);
}

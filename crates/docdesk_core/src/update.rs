use crate::{AppState, Effect, Msg};

/// Example prompts offered by the empty chat pane, in display order.
pub const EXAMPLE_PROMPTS: [&str; 4] = [
    "Write some code for me",
    "How to optimize React performance?",
    "Can you explain this code to me?",
    "Convert this code from one language to another",
];

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoginSubmitted { username, password } => {
            vec![Effect::Authenticate { username, password }]
        }
        Msg::AuthCompleted {
            authenticated,
            identity,
        } => {
            state.apply_auth(authenticated, identity);
            Vec::new()
        }
        Msg::LogoutClicked => {
            state.end_session();
            Vec::new()
        }
        Msg::FilesAdded(inputs) => {
            state.add_documents(inputs);
            Vec::new()
        }
        Msg::DocumentCategoryChanged { index, category } => {
            state.set_document_category(index, category);
            Vec::new()
        }
        Msg::DocumentRemoved { index } => {
            state.remove_document(index);
            Vec::new()
        }
        Msg::SummaryTypeSelected(summary_type) => {
            state.set_summary_type(summary_type);
            Vec::new()
        }
        Msg::GenerateClicked => match state.begin_submission() {
            Ok((job_id, documents, summary_type)) => vec![Effect::SubmitSummary {
                job_id,
                documents,
                summary_type,
            }],
            // Rejection is reported inline on the view; no job, no effect.
            Err(_) => Vec::new(),
        },
        Msg::JobResolved { job_id, outcome } => {
            state.apply_resolution(job_id, outcome);
            Vec::new()
        }
        Msg::DownloadRequested { job_id } => {
            // Retrieval must not mutate the record, so the dirty flag stays
            // untouched here.
            match state.artifact_for(job_id) {
                Some(artifact) => vec![Effect::SaveArtifact {
                    job_id,
                    filename: artifact.filename.clone(),
                    bytes: artifact.bytes.clone(),
                }],
                None => Vec::new(),
            }
        }
        Msg::RestoreHistory(snapshots) => {
            state.restore_history(snapshots);
            Vec::new()
        }
        Msg::ChatMessageSent(raw) => {
            let content = raw.trim();
            if !content.is_empty() {
                state.push_chat_user(content.to_string());
            }
            Vec::new()
        }
        Msg::ChatPromptClicked(index) => {
            if let Some(prompt) = EXAMPLE_PROMPTS.get(index) {
                state.push_chat_pair(prompt.to_string(), canned_reply(prompt).to_string());
            }
            Vec::new()
        }
        Msg::ChatCleared => {
            state.clear_chat();
            Vec::new()
        }
        Msg::CodeEdited(text) => {
            state.edit_code(text);
            Vec::new()
        }
        Msg::CodeSaved => {
            state.save_code();
            Vec::new()
        }
        Msg::CodeVersionBack => {
            state.code_version_back();
            Vec::new()
        }
        Msg::CodeVersionForward => {
            state.code_version_forward();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn canned_reply(prompt: &str) -> &'static str {
    match prompt {
        "Write some code for me" => {
            "Certainly! I'd be happy to help you write some code. Could you tell me more \
             about what you'd like to create? What programming language are you using, and \
             what should the code do?"
        }
        "How to optimize React performance?" => {
            "Great question! I'd be glad to discuss React performance optimization. To get \
             started, could you tell me about any specific performance issues you're \
             experiencing, or are you looking for general optimization tips?"
        }
        "Can you explain this code to me?" => {
            "Of course! I'd be happy to explain code for you. You can either paste the code \
             you want explained in the chat here, or write it in the code editor on the \
             right. Once you've done that, I'll do my best to break it down and explain how \
             it works."
        }
        "Convert this code from one language to another" => {
            "Certainly! I can help you convert code between programming languages. To get \
             started, could you tell me what language the original code is in, and what \
             language you'd like to convert it to? Then, you can either paste the code here \
             or write it in the code editor on the right."
        }
        _ => "Hello! How can I assist you with your request?",
    }
}

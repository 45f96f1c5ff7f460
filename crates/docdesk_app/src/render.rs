use docdesk_core::{AppViewModel, ChatRole, JobRowView, JobStatus};

/// Formats the whole view as console lines. Pure, so the layout is
/// unit-testable without a terminal.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    match &view.identity {
        Some(identity) if view.authenticated => {
            lines.push(format!("Session: signed in as {identity}"));
        }
        _ => lines.push("Session: signed out".to_string()),
    }

    if let Some(validation) = view.validation {
        lines.push(format!("Cannot generate: {validation}"));
    }

    if view.documents.is_empty() {
        lines.push("Documents: (none attached)".to_string());
    } else {
        lines.push(format!("Documents ({}):", view.documents.len()));
        for (position, doc) in view.documents.iter().enumerate() {
            lines.push(format!(
                "  {}. {} [{}] ({} B)",
                position + 1,
                doc.name,
                doc.category.label(),
                format_with_commas(doc.byte_len)
            ));
        }
    }

    match view.summary_type {
        Some(summary_type) => lines.push(format!("Summary type: {}", summary_type.label())),
        None => lines.push("Summary type: (not selected)".to_string()),
    }

    if !view.jobs.is_empty() {
        lines.push(format!("Summary requests ({}):", view.job_count));
        for job in &view.jobs {
            lines.push(format_job_row(job));
        }
    }

    if !view.history.is_empty() {
        lines.push("Previous summaries:".to_string());
        for row in &view.history {
            lines.push(format!(
                "  [#{}] {} — {} B — {}",
                row.job_id,
                row.summary_type.label(),
                format_with_commas(row.byte_len),
                row.finished_utc
            ));
        }
    }

    if !view.chat.is_empty() {
        lines.push("Chat:".to_string());
        for entry in &view.chat {
            let speaker = match entry.role {
                ChatRole::User => "you",
                ChatRole::Assistant => "assistant",
            };
            lines.push(format!("  {speaker}> {}", entry.content));
        }
    }

    let editor = &view.editor;
    let marker = if editor.at_latest {
        "current working code"
    } else {
        "old version"
    };
    lines.push(format!(
        "Code editor: version {} of {} ({marker})",
        editor.version_index + 1,
        editor.version_count
    ));

    lines
}

fn format_job_row(job: &JobRowView) -> String {
    match job.status {
        JobStatus::Processing => format!(
            "  [#{}] {} — processing...",
            job.job_id,
            job.summary_type.label()
        ),
        JobStatus::Complete => format!(
            "  [#{}] {} — ready ({} B) — `download {}`",
            job.job_id,
            job.summary_type.label(),
            format_with_commas(job.artifact_len.unwrap_or(0)),
            job.job_id
        ),
        JobStatus::Error => format!(
            "  [#{}] {} — ERROR: {}",
            job.job_id,
            job.summary_type.label(),
            job.failure.as_deref().unwrap_or("unknown failure")
        ),
    }
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

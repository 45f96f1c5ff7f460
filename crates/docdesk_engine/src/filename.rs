use crate::JobId;

/// Download filename for a completed job: `summary_{id}.{ext}`, with the
/// extension picked from the response content type. An earlier service
/// variant returned plain text, hence the `.txt` branch.
pub fn artifact_filename(job_id: JobId, content_type: Option<&str>) -> String {
    let ext = match content_type.map(normalize) {
        Some(ct) if ct == "application/pdf" => "pdf",
        Some(ct) if ct.starts_with("text/") => "txt",
        _ => "bin",
    };
    format!("summary_{job_id}.{ext}")
}

fn normalize(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase()
}

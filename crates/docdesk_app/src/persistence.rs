//! Completed-summary history, persisted as RON next to the artifacts.

use std::io::ErrorKind;
use std::path::Path;

use desk_logging::desk_warn;
use docdesk_core::{CompletedJobSnapshot, JobId, SummaryType};
use docdesk_engine::ArtifactWriter;
use serde::{Deserialize, Serialize};

const HISTORY_FILENAME: &str = ".docdesk_history.ron";

#[derive(Debug, Serialize, Deserialize)]
struct PersistedJob {
    job_id: JobId,
    summary_type: String,
    byte_len: u64,
    finished_utc: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedHistory {
    completed: Vec<PersistedJob>,
}

/// Loads the saved history, returning an empty list when the file is
/// missing or unreadable. A bad history file must never block startup.
pub fn load_history(dir: &Path) -> Vec<CompletedJobSnapshot> {
    let path = dir.join(HISTORY_FILENAME);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            desk_warn!("Could not read history at {:?}: {}", path, err);
            return Vec::new();
        }
    };
    let history: PersistedHistory = match ron::from_str(&raw) {
        Ok(history) => history,
        Err(err) => {
            desk_warn!("Could not parse history at {:?}: {}", path, err);
            return Vec::new();
        }
    };

    history
        .completed
        .into_iter()
        .filter_map(|job| {
            let Some(summary_type) = SummaryType::from_label(&job.summary_type) else {
                desk_warn!(
                    "Skipping history entry {} with unknown summary type {:?}",
                    job.job_id,
                    job.summary_type
                );
                return None;
            };
            Some(CompletedJobSnapshot {
                job_id: job.job_id,
                summary_type,
                byte_len: job.byte_len,
                finished_utc: job.finished_utc,
            })
        })
        .collect()
}

/// Writes the history file atomically. Failures are logged and dropped;
/// the in-memory session keeps going either way.
pub fn save_history(dir: &Path, completed: &[CompletedJobSnapshot]) {
    let history = PersistedHistory {
        completed: completed
            .iter()
            .map(|snapshot| PersistedJob {
                job_id: snapshot.job_id,
                summary_type: snapshot.summary_type.label().to_string(),
                byte_len: snapshot.byte_len,
                finished_utc: snapshot.finished_utc.clone(),
            })
            .collect(),
    };

    let raw = match ron::ser::to_string_pretty(&history, ron::ser::PrettyConfig::default()) {
        Ok(raw) => raw,
        Err(err) => {
            desk_warn!("Could not serialize history: {}", err);
            return;
        }
    };
    let writer = ArtifactWriter::new(dir.to_path_buf());
    if let Err(err) = writer.write(HISTORY_FILENAME, raw.as_bytes()) {
        desk_warn!("Could not save history to {:?}: {}", dir, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(job_id: JobId) -> CompletedJobSnapshot {
        CompletedJobSnapshot {
            job_id,
            summary_type: SummaryType::Technical,
            byte_len: 2048,
            finished_utc: "2026-08-30T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn history_survives_a_save_and_load() {
        let temp = tempfile::TempDir::new().unwrap();
        let saved = vec![snapshot(1), snapshot(2)];

        save_history(temp.path(), &saved);
        assert_eq!(load_history(temp.path()), saved);
    }

    #[test]
    fn missing_file_means_an_empty_history() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(load_history(temp.path()).is_empty());
    }

    #[test]
    fn corrupt_file_means_an_empty_history() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join(HISTORY_FILENAME), "not ron at all {{{").unwrap();
        assert!(load_history(temp.path()).is_empty());
    }

    #[test]
    fn entries_with_unknown_summary_types_are_skipped() {
        let temp = tempfile::TempDir::new().unwrap();
        let raw = r#"(
    completed: [
        (job_id: 1, summary_type: "Technical", byte_len: 10, finished_utc: "t1"),
        (job_id: 2, summary_type: "Haiku", byte_len: 20, finished_utc: "t2"),
    ],
)"#;
        std::fs::write(temp.path().join(HISTORY_FILENAME), raw).unwrap();

        let loaded = load_history(temp.path());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].job_id, 1);
    }
}

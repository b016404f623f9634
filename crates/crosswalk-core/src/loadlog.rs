use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::error::CrosswalkError;
use crate::models::LoadLogEntry;

const LOG_FILE: &str = "activity.jsonl";

/// Append-only JSONL sink for load/search outcomes. This is the "external
/// log sink" the flows report to; nothing in the lookup path reads it back.
#[derive(Debug, Clone)]
pub(crate) struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    #[must_use]
    pub(crate) fn new(root: &Path) -> Self {
        Self {
            path: root.join(LOG_FILE),
        }
    }

    pub(crate) fn log_status(&self, operation: &str, source: &str, latency_ms: u128) {
        self.try_log(&entry(operation, "ok", source, latency_ms, None, None));
    }

    pub(crate) fn log_error(
        &self,
        operation: &str,
        source: &str,
        latency_ms: u128,
        err: &CrosswalkError,
    ) {
        self.try_log(&entry(
            operation,
            "error",
            source,
            latency_ms,
            Some(err.code().to_string()),
            Some(err.to_string()),
        ));
    }

    // Best-effort: a failed append must never fail the operation it records.
    fn try_log(&self, entry: &LoadLogEntry) {
        if let Ok(mut serialized) = serde_json::to_string(entry) {
            serialized.push('\n');
            let _ = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .and_then(|mut file| file.write_all(serialized.as_bytes()));
        }
    }

    #[must_use]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

fn entry(
    operation: &str,
    status: &str,
    source: &str,
    latency_ms: u128,
    error_code: Option<String>,
    error_message: Option<String>,
) -> LoadLogEntry {
    LoadLogEntry {
        request_id: Uuid::new_v4().to_string(),
        operation: operation.to_string(),
        status: status.to_string(),
        latency_ms,
        created_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        error_code,
        error_message,
    }
}

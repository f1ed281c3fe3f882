//! Saves accepted submissions as JSON files
//!
//! Each payload is wrapped in an envelope with an id, timestamp and the
//! application version, then written atomically to
//! `<submissions_dir>/<id>.json`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::{Submission, SubmissionSink};
use crate::error::{OnboardError, OnboardResult};
use crate::storage::write_json_atomic;

/// Stored form of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEnvelope {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub app_version: String,
    pub payload: Submission,
}

impl SubmissionEnvelope {
    pub fn new(payload: Submission) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            payload,
        }
    }
}

/// Writes one JSON file per submission
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SubmissionSink for JsonFileSink {
    fn submit(&self, submission: &Submission) -> OnboardResult<()> {
        let envelope = SubmissionEnvelope::new(submission.clone());
        let path = self.dir.join(format!("{}.json", envelope.id));

        write_json_atomic(&path, &envelope)
            .map_err(|e| OnboardError::Submission(e.to_string()))?;

        info!(
            id = %envelope.id,
            company = %submission.step1.company_name,
            path = %path.display(),
            "submission saved"
        );
        Ok(())
    }
}

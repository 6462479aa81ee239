//! Submission persistence.
//!
//! Storage is a swappable capability injected at the boundary; the engine
//! never calls it. A failed save is logged and masked with a fallback id so
//! results still reach the caller.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::v1::DiagnosticSubmission;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait SubmissionStore {
    /// Persist a submission, returning an opaque identifier.
    fn save(&self, submission: &DiagnosticSubmission) -> Result<String, StoreError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSubmission {
    id: String,
    #[serde(flatten)]
    submission: DiagnosticSubmission,
}

/// Appends submissions to a JSON array file, creating it on first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_existing(&self) -> Result<Vec<StoredSubmission>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl SubmissionStore for JsonFileStore {
    fn save(&self, submission: &DiagnosticSubmission) -> Result<String, StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
            }
        }

        let mut existing = self.load_existing()?;
        let id = format!(
            "sub_{}_{:04}",
            Utc::now().timestamp_millis(),
            existing.len()
        );
        existing.push(StoredSubmission {
            id: id.clone(),
            submission: submission.clone(),
        });

        let body = serde_json::to_string_pretty(&existing)?;
        fs::write(&self.path, body).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(id)
    }
}

/// Discards submissions. Stands in when persistence is deliberately disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl SubmissionStore for NullStore {
    fn save(&self, _submission: &DiagnosticSubmission) -> Result<String, StoreError> {
        Ok("sub_disabled".to_string())
    }
}

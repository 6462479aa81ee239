use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::schema::v1::DiagnosticSubmission;
use crate::store::{JsonFileStore, SubmissionStore};

/// Fallback identifier when persistence is unavailable. Storage failure must
/// never block returning results.
const UNSAVED_ID: &str = "unsaved";

pub struct Stage4Store;

impl Stage4Store {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Store {
    fn name(&self) -> &'static str {
        "stage4_store"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(store_path) = &ctx.store_path else {
            info!("store_disabled");
            return Ok(());
        };
        let Some(lead) = &ctx.lead else {
            info!("store_skipped_no_lead");
            return Ok(());
        };

        let submission = DiagnosticSubmission {
            lead: lead.clone(),
            inputs: ctx.inputs.clone().context("inputs missing")?,
            results: ctx.results.clone().context("diagnostic results missing")?,
            submitted_at: Utc::now(),
        };

        let store = JsonFileStore::new(store_path.clone());
        let id = match store.save(&submission) {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, path = %store_path.display(), "submission_save_failed");
                UNSAVED_ID.to_string()
            }
        };
        info!(id = %id, "submission_stored");
        ctx.submission_id = Some(id);
        Ok(())
    }
}

use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::schema::v1::DiagnosticReportV1;

pub fn build_report(ctx: &Ctx) -> Result<DiagnosticReportV1> {
    let results = ctx.results.clone().context("diagnostic results missing")?;
    Ok(DiagnosticReportV1::new(
        env!("CARGO_PKG_VERSION"),
        ctx.lead.clone(),
        results,
    ))
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

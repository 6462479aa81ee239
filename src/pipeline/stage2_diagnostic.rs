use anyhow::{Context, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::engine;
use crate::pipeline::Stage;

pub struct Stage2Diagnostic;

impl Stage2Diagnostic {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Diagnostic {
    fn name(&self) -> &'static str {
        "stage2_diagnostic"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let inputs = ctx.inputs.as_ref().context("inputs missing")?;
        let results = engine::run_diagnostic(inputs, &ctx.benchmarks);
        info!(
            capacity = results.scores.capacity_score,
            economics = results.scores.unit_economics_score,
            constraint = results.scores.growth_constraint_index,
            bottlenecks = results.bottlenecks.len(),
            "diagnostic_ready"
        );
        ctx.results = Some(results);
        Ok(())
    }
}

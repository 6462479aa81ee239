use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{html_writer, json_writer};
use crate::pipeline::Stage;

pub struct Stage3Output;

impl Stage3Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Output {
    fn name(&self) -> &'static str {
        "stage3_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, ctx)?;
            info!(path = %ctx.output.json_path.display(), "report_json_written");
        }
        if ctx.write_html {
            html_writer::write_html(&ctx.output.html_path, ctx)?;
            info!(path = %ctx.output.html_path.display(), "executive_brief_written");
        }
        Ok(())
    }
}

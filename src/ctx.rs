use std::path::PathBuf;

use crate::benchmarks::BenchmarkTable;
use crate::schema::v1::{DiagnosticResults, FormInputs, LeadInfo};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub html_path: PathBuf,
}

/// Per-invocation state threaded through the pipeline stages.
#[derive(Debug)]
pub struct Ctx {
    pub inputs_path: PathBuf,
    pub lead_path: Option<PathBuf>,
    pub store_path: Option<PathBuf>,
    pub write_json: bool,
    pub write_html: bool,
    pub benchmarks: BenchmarkTable,
    pub inputs: Option<FormInputs>,
    pub lead: Option<LeadInfo>,
    pub results: Option<DiagnosticResults>,
    pub submission_id: Option<String>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(inputs_path: PathBuf, out_dir: PathBuf) -> Self {
        let json_path = out_dir.join("diagnostic.json");
        let html_path = out_dir.join("executive_brief.html");
        Self {
            inputs_path,
            lead_path: None,
            store_path: None,
            write_json: false,
            write_html: false,
            benchmarks: BenchmarkTable::default_v1(),
            inputs: None,
            lead: None,
            results: None,
            submission_id: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                html_path,
            },
        }
    }
}

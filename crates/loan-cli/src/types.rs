use std::path::PathBuf;

use loan_transform::PipelineReport;

#[derive(Debug)]
pub struct BuildResult {
    pub input: PathBuf,
    /// `None` for a dry run.
    pub output: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub report: PipelineReport,
}

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::services::estimation_types::EstimationReport;

#[derive(Error, Debug)]
pub enum ReportFileError {
    #[error("failed to write report file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize report yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the report as JSON for `.json` paths and as YAML otherwise.
pub fn write_report_file(path: &str, report: &EstimationReport) -> Result<(), ReportFileError> {
    let contents = serialize_report(path, report)?;
    std::fs::write(path, contents)?;
    Ok(())
}

fn serialize_report(path: &str, report: &EstimationReport) -> Result<String, ReportFileError> {
    let is_json = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_yaml::to_string(report)?)
    }
}

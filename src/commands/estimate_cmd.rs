use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_estimation_report;
use crate::domain::estimate::EstimateSeries;
use crate::services::estimate_list::EstimateListError;
use crate::services::estimation::{estimate, EstimationRequest, EstimationServiceError};
use crate::services::report_file::{write_report_file, ReportFileError};
use crate::services::tasks_yaml::{load_tasks_from_yaml_file, TasksYamlError};

#[derive(Error, Debug)]
pub enum EstimateCommandError {
    #[error(transparent)]
    EstimateList(#[from] EstimateListError),
    #[error(transparent)]
    TasksYaml(#[from] TasksYamlError),
    #[error(transparent)]
    Estimation(#[from] EstimationServiceError),
    #[error(transparent)]
    ReportFile(#[from] ReportFileError),
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
    /// clap enforces this for the binary; direct callers can still omit lists.
    #[error("either an input file or optimistic, most likely and pessimistic lists are required")]
    MissingInput,
}

pub fn estimate_command(cmd: Commands) -> Result<(), EstimateCommandError> {
    if let Commands::Estimate {
        optimistic,
        most_likely,
        pessimistic,
        input,
        z_score,
        start_date,
        report,
    } = cmd
    {
        let mut request = match input {
            Some(path) => request_from_tasks_file(&path)?,
            None => match (optimistic, most_likely, pessimistic) {
                (Some(o), Some(m), Some(p)) => EstimationRequest {
                    series: EstimateSeries::from_lists(&o, &m, &p)?,
                    data_source: "command line".to_string(),
                    ..EstimationRequest::default()
                },
                _ => return Err(EstimateCommandError::MissingInput),
            },
        };
        request.z_score = z_score;
        request.start_date = start_date.as_deref().map(parse_start_date).transpose()?;
        debug!(
            data_source = %request.data_source,
            tasks = request.series.len(),
            "running estimation"
        );

        let estimation = estimate(&request)?;
        if let Some(path) = &report {
            write_report_file(path, &estimation)?;
            info!(path = %path, "wrote estimation report");
        }

        println!("{}", format_estimation_report(&estimation));
        if let Some(path) = report {
            println!("Estimation report written to {path}");
        }
    }
    Ok(())
}

fn request_from_tasks_file(path: &str) -> Result<EstimationRequest, EstimateCommandError> {
    let project = load_tasks_from_yaml_file(path)?;
    Ok(EstimationRequest {
        series: project.series(),
        names: project.task_names(),
        project: project.name,
        data_source: data_source_name(path),
        ..EstimationRequest::default()
    })
}

fn parse_start_date(value: &str) -> Result<NaiveDate, EstimateCommandError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| EstimateCommandError::InvalidStartDate(value.to_string()))
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

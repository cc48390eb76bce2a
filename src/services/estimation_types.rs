use serde::Serialize;

use crate::domain::estimate::Interval;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CompletionDates {
    pub expected: String,
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TaskReport {
    pub task: usize,
    pub name: Option<String>,
    pub mean: f64,
    pub std_dev: f64,
    pub interval: Option<Interval>,
    pub completion: Option<CompletionDates>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TotalReport {
    pub mean: f64,
    pub std_dev: f64,
    pub interval: Option<Interval>,
    pub completion: Option<CompletionDates>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EstimationReport {
    pub project: Option<String>,
    pub data_source: String,
    pub z_score: Option<f64>,
    pub start_date: Option<String>,
    pub tasks: Vec<TaskReport>,
    pub total: TotalReport,
}

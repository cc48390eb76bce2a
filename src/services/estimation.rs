use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::domain::calendar::completion_date;
use crate::domain::estimate::{EstimateSeries, Interval};
use crate::services::estimation_types::{
    CompletionDates, EstimationReport, TaskReport, TotalReport,
};
use crate::services::pert::{interval, mean_multiple, std_multiple, EstimationError};

#[derive(Error, Debug, PartialEq)]
pub enum EstimationServiceError {
    #[error(transparent)]
    Estimation(#[from] EstimationError),
    #[error("z-score must be a non-negative number, got {0}")]
    InvalidZScore(f64),
    #[error("completion date is out of range for {0} days")]
    DateOutOfRange(f64),
}

/// Everything one estimation run needs. `names` may be shorter than the
/// series; missing entries are treated as unnamed tasks.
#[derive(Debug, Clone, Default)]
pub struct EstimationRequest {
    pub series: EstimateSeries,
    pub names: Vec<Option<String>>,
    pub project: Option<String>,
    pub data_source: String,
    pub z_score: Option<f64>,
    pub start_date: Option<NaiveDate>,
}

pub fn estimate(request: &EstimationRequest) -> Result<EstimationReport, EstimationServiceError> {
    if let Some(z_score) = request.z_score {
        if !z_score.is_finite() || z_score < 0.0 {
            return Err(EstimationServiceError::InvalidZScore(z_score));
        }
    }

    let series = &request.series;
    let means = mean_multiple(&series.optimistic, &series.most_likely, &series.pessimistic)?;
    let std_devs = std_multiple(&series.optimistic, &series.pessimistic)?;
    debug!(
        tasks = means.per_task.len(),
        total_mean = means.total,
        total_std_dev = std_devs.total,
        "estimated tasks"
    );

    let mut tasks = Vec::with_capacity(means.per_task.len());
    for (index, (&mean, &std_dev)) in means.per_task.iter().zip(&std_devs.per_task).enumerate() {
        let task_interval = request.z_score.map(|z| interval(mean, std_dev, z));
        tasks.push(TaskReport {
            task: index + 1,
            name: request.names.get(index).cloned().flatten(),
            mean,
            std_dev,
            interval: task_interval,
            completion: completion_for(request.start_date, mean, task_interval)?,
        });
    }

    let total_interval = request
        .z_score
        .map(|z| interval(means.total, std_devs.total, z));
    let total = TotalReport {
        mean: means.total,
        std_dev: std_devs.total,
        interval: total_interval,
        completion: completion_for(request.start_date, means.total, total_interval)?,
    };

    Ok(EstimationReport {
        project: request.project.clone(),
        data_source: request.data_source.clone(),
        z_score: request.z_score,
        start_date: request.start_date.map(format_date),
        tasks,
        total,
    })
}

fn completion_for(
    start_date: Option<NaiveDate>,
    mean: f64,
    bounds: Option<Interval>,
) -> Result<Option<CompletionDates>, EstimationServiceError> {
    let Some(start_date) = start_date else {
        return Ok(None);
    };

    let expected = project_date(start_date, mean)?;
    let (earliest, latest) = match bounds {
        Some(bounds) => (
            Some(project_date(start_date, bounds.min)?),
            Some(project_date(start_date, bounds.max)?),
        ),
        None => (None, None),
    };

    Ok(Some(CompletionDates {
        expected,
        earliest,
        latest,
    }))
}

fn project_date(start_date: NaiveDate, days: f64) -> Result<String, EstimationServiceError> {
    completion_date(start_date, days)
        .map(format_date)
        .ok_or(EstimationServiceError::DateOutOfRange(days))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pert::OrderingConstraint;
    use crate::test_support::{assert_close, build_series, on_date, sample_series};

    fn request_for(series: EstimateSeries) -> EstimationRequest {
        EstimationRequest {
            series,
            data_source: "flags".to_string(),
            ..EstimationRequest::default()
        }
    }

    #[test]
    fn estimate_reports_tasks_and_totals() {
        let report = estimate(&request_for(sample_series())).unwrap();

        assert_eq!(report.tasks.len(), 6);
        assert_eq!(report.tasks[0].task, 1);
        assert_close(report.tasks[0].mean, 20.0 / 6.0);
        assert_close(report.tasks[0].std_dev, 1.0);
        assert_close(report.tasks[5].mean, 2300.0 / 6.0);
        assert_close(report.tasks[5].std_dev, 150.0);
        assert_close(report.total.mean, 2815.9 / 6.0);
        assert_close(report.total.std_dev, 153.3171921);
        assert_eq!(report.total.interval, None);
        assert_eq!(report.total.completion, None);
        assert_eq!(report.data_source, "flags");
        assert_eq!(report.start_date, None);
    }

    #[test]
    fn estimate_adds_intervals_for_z_score() {
        let mut request = request_for(build_series(&[(1.0, 2.0, 7.0), (2.0, 3.0, 10.0)]));
        request.z_score = Some(2.0);

        let report = estimate(&request).unwrap();

        // Task 1: mean 16/6, std 1 => lower bound 0.667
        let first = report.tasks[0].interval.unwrap();
        assert_close(first.min, 16.0 / 6.0 - 2.0);
        assert_close(first.max, 16.0 / 6.0 + 2.0);
        // Task 2: mean 4, std 8/6 => lower bound 1.333
        let second = report.tasks[1].interval.unwrap();
        assert_close(second.min, 4.0 - 16.0 / 6.0);

        let total = report.total.interval.unwrap();
        let total_std = (1.0_f64 + (8.0_f64 / 6.0).powi(2)).sqrt();
        assert_close(total.max, report.total.mean + 2.0 * total_std);
        assert_eq!(report.z_score, Some(2.0));
    }

    #[test]
    fn estimate_projects_completion_dates() {
        let mut request = request_for(build_series(&[(2.0, 3.0, 10.0)]));
        request.z_score = Some(1.0);
        request.start_date = Some(on_date(2026, 2, 16)); // Monday

        let report = estimate(&request).unwrap();

        // mean 4 => Thursday, interval [2.667, 5.333] => Wednesday .. next Monday
        let completion = report.total.completion.unwrap();
        assert_eq!(completion.expected, "2026-02-19");
        assert_eq!(completion.earliest.as_deref(), Some("2026-02-18"));
        assert_eq!(completion.latest.as_deref(), Some("2026-02-23"));
        assert_eq!(report.start_date.as_deref(), Some("2026-02-16"));
        assert_eq!(
            report.tasks[0].completion.as_ref().map(|c| c.expected.as_str()),
            Some("2026-02-19")
        );
    }

    #[test]
    fn estimate_uses_task_names_when_available() {
        let mut request = request_for(build_series(&[(1.0, 2.0, 3.0), (1.0, 2.0, 3.0)]));
        request.names = vec![Some("Design".to_string())];

        let report = estimate(&request).unwrap();
        assert_eq!(report.tasks[0].name.as_deref(), Some("Design"));
        assert_eq!(report.tasks[1].name, None);
    }

    #[test]
    fn estimate_propagates_ordering_errors() {
        let request = request_for(build_series(&[(1.0, 2.0, 3.0), (3.0, 2.0, 5.0)]));

        let error = estimate(&request).unwrap_err();
        assert_eq!(
            error,
            EstimationServiceError::Estimation(EstimationError::Validation {
                constraint: OrderingConstraint::MeanOrdering,
                index: Some(1),
            })
        );
    }

    #[test]
    fn estimate_propagates_shape_errors() {
        let mut series = sample_series();
        series.most_likely.pop();

        let error = estimate(&request_for(series)).unwrap_err();
        assert!(matches!(
            error,
            EstimationServiceError::Estimation(EstimationError::Shape { .. })
        ));
        assert_eq!(error.to_string(), "input sequences must have equal length");
    }

    #[test]
    fn estimate_rejects_negative_z_score() {
        let mut request = request_for(sample_series());
        request.z_score = Some(-1.0);

        let error = estimate(&request).unwrap_err();
        assert_eq!(error, EstimationServiceError::InvalidZScore(-1.0));
    }

    #[test]
    fn estimate_rejects_non_finite_z_score() {
        for z_score in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut request = request_for(sample_series());
            request.z_score = Some(z_score);

            let error = estimate(&request).unwrap_err();
            assert!(
                matches!(error, EstimationServiceError::InvalidZScore(z) if z.is_nan() || z == z_score),
                "z-score {z_score} was accepted"
            );
        }
    }

    #[test]
    fn estimate_rejects_dates_beyond_the_calendar() {
        let mut request = request_for(build_series(&[(1.0e12, 2.0e12, 3.0e12)]));
        request.start_date = Some(on_date(2026, 2, 16));

        let error = estimate(&request).unwrap_err();
        assert_eq!(error, EstimationServiceError::DateOutOfRange(2.0e12));
    }
}

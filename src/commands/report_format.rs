use crate::domain::estimate::Interval;
use crate::services::estimation_types::{EstimationReport, TaskReport};

pub fn format_estimation_report(report: &EstimationReport) -> String {
    let mut lines = Vec::new();
    for task in &report.tasks {
        push_task_lines(&mut lines, task, report.z_score);
    }

    let total = &report.total;
    lines.push(format!("Total tasks - mean of expected time: {:.2}", total.mean));
    lines.push(format!("Total task - std of expected time: {:.2}", total.std_dev));
    if let (Some(z), Some(interval)) = (report.z_score, total.interval) {
        lines.push(format!(
            "Total tasks - interval (z={z}): {}",
            format_interval(interval)
        ));
    }
    if let Some(completion) = &total.completion {
        lines.push(format!(
            "Total tasks - expected completion: {}",
            completion.expected
        ));
        if let (Some(earliest), Some(latest)) = (&completion.earliest, &completion.latest) {
            lines.push(format!(
                "Total tasks - completion window: {earliest} - {latest}"
            ));
        }
    }

    lines.join("\n")
}

fn push_task_lines(lines: &mut Vec<String>, task: &TaskReport, z_score: Option<f64>) {
    let number = task.task;
    lines.push(format!(
        "Task {number} - mean of expected time: {:.2}",
        task.mean
    ));
    lines.push(format!(
        "Task {number} - std of expected time: {:.2}",
        task.std_dev
    ));
    if let (Some(z), Some(interval)) = (z_score, task.interval) {
        lines.push(format!(
            "Task {number} - interval (z={z}): {}",
            format_interval(interval)
        ));
    }
    if let Some(completion) = &task.completion {
        lines.push(format!(
            "Task {number} - expected completion: {}",
            completion.expected
        ));
    }
}

fn format_interval(interval: Interval) -> String {
    format!("{:.2} - {:.2}", interval.min, interval.max)
}

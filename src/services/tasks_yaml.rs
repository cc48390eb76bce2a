use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::estimate::ThreePointEstimate;
use crate::domain::project::{Project, Task};

#[derive(Error, Debug)]
pub enum TasksYamlError {
    #[error("failed to read tasks yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse tasks yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("tasks yaml contains no tasks")]
    Empty,
    #[error("task {task} has a non-finite {field} estimate")]
    InvalidNumber { task: usize, field: &'static str },
}

#[derive(Deserialize)]
struct ProjectRecord {
    name: Option<String>,
    tasks: Vec<TaskRecord>,
}

#[derive(Deserialize)]
struct TaskRecord {
    name: Option<String>,
    optimistic: f64,
    most_likely: f64,
    pessimistic: f64,
}

pub fn load_tasks_from_yaml_file(path: &str) -> Result<Project, TasksYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_tasks_from_yaml_str(&contents)
}

/// Orderings are not checked here so that the estimators can report the
/// offending task.
pub fn deserialize_tasks_from_yaml_str(input: &str) -> Result<Project, TasksYamlError> {
    let record: ProjectRecord = serde_yaml::from_str(input)?;
    if record.tasks.is_empty() {
        return Err(TasksYamlError::Empty);
    }

    let tasks = record
        .tasks
        .into_iter()
        .enumerate()
        .map(|(index, task)| task_from_record(index + 1, task))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Project {
        name: record.name,
        tasks,
    })
}

fn task_from_record(number: usize, record: TaskRecord) -> Result<Task, TasksYamlError> {
    let fields = [
        ("optimistic", record.optimistic),
        ("most likely", record.most_likely),
        ("pessimistic", record.pessimistic),
    ];
    if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(TasksYamlError::InvalidNumber {
            task: number,
            field: *field,
        });
    }

    Ok(Task {
        name: record.name.filter(|name| !name.trim().is_empty()),
        estimate: ThreePointEstimate {
            optimistic: record.optimistic,
            most_likely: record.most_likely,
            pessimistic: record.pessimistic,
        },
    })
}

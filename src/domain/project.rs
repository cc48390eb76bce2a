use crate::domain::estimate::{EstimateSeries, ThreePointEstimate};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub name: Option<String>,
    pub estimate: ThreePointEstimate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: Option<String>,
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn series(&self) -> EstimateSeries {
        let estimates: Vec<ThreePointEstimate> =
            self.tasks.iter().map(|task| task.estimate).collect();
        EstimateSeries::from_estimates(&estimates)
    }

    pub fn task_names(&self) -> Vec<Option<String>> {
        self.tasks.iter().map(|task| task.name.clone()).collect()
    }
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreePointEstimate {
    pub optimistic: f64,
    pub most_likely: f64,
    pub pessimistic: f64,
}

/// Optimistic, most likely and pessimistic durations of several tasks.
/// Index `i` of each vector belongs to the same task.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EstimateSeries {
    pub optimistic: Vec<f64>,
    pub most_likely: Vec<f64>,
    pub pessimistic: Vec<f64>,
}

impl EstimateSeries {
    pub fn from_estimates(estimates: &[ThreePointEstimate]) -> Self {
        let mut series = Self::default();
        for estimate in estimates {
            series.optimistic.push(estimate.optimistic);
            series.most_likely.push(estimate.most_likely);
            series.pessimistic.push(estimate.pessimistic);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.optimistic.len()
    }
}

/// Per-task results of a batch estimation and their aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEstimate {
    pub per_task: Vec<f64>,
    pub total: f64,
}

/// Bounds of the expected duration for a given z-score.
/// `min` never drops below zero.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

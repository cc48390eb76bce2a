use chrono::NaiveDate;

use crate::domain::estimate::EstimateSeries;

pub const FLOAT_DELTA: f64 = 0.000001;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < FLOAT_DELTA,
        "expected {expected}, got {actual}"
    );
}

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sample_optimistic() -> Vec<f64> {
    vec![1.0, 3.0, 2.0, 5.0, 10.0, 100.0]
}

pub fn sample_most_likely() -> Vec<f64> {
    vec![3.0, 5.0, 3.0, 5.5, 50.0, 300.0]
}

pub fn sample_pessimistic() -> Vec<f64> {
    vec![7.0, 12.0, 4.0, 5.9, 200.0, 1000.0]
}

pub fn sample_series() -> EstimateSeries {
    EstimateSeries {
        optimistic: sample_optimistic(),
        most_likely: sample_most_likely(),
        pessimistic: sample_pessimistic(),
    }
}

pub fn build_series(tasks: &[(f64, f64, f64)]) -> EstimateSeries {
    EstimateSeries {
        optimistic: tasks.iter().map(|task| task.0).collect(),
        most_likely: tasks.iter().map(|task| task.1).collect(),
        pessimistic: tasks.iter().map(|task| task.2).collect(),
    }
}

//! PERT three-point estimation.
//!
//! - `mean`: μ = (o + 4m + p) / 6, requires o < m < p.
//! - `std_dev`: σ = (p - o) / 6, requires o < p.
//! - `interval`: μ ± σz, lower bound clamped at zero.
//!
//! Batch variants walk the tasks in index order and stop at the first
//! invalid one, so the reported error is always the lowest failing index.

use std::fmt;

use thiserror::Error;

use crate::domain::estimate::{BatchEstimate, Interval};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingConstraint {
    /// o < m < p
    MeanOrdering,
    /// o < p
    StdOrdering,
}

impl fmt::Display for OrderingConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingConstraint::MeanOrdering => write!(f, "o < m < p"),
            OrderingConstraint::StdOrdering => write!(f, "o < p"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationError {
    #[error("input sequences must have equal length")]
    Shape { expected: usize, found: usize },
    #[error("ordering constraint {constraint} violated{}", task_suffix(.index))]
    Validation {
        constraint: OrderingConstraint,
        index: Option<usize>,
    },
}

fn task_suffix(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!(" (task {})", index + 1),
        None => String::new(),
    }
}

impl EstimationError {
    fn at_index(self, index: usize) -> Self {
        match self {
            EstimationError::Validation { constraint, .. } => EstimationError::Validation {
                constraint,
                index: Some(index),
            },
            other => other,
        }
    }
}

pub fn mean(optimistic: f64, most_likely: f64, pessimistic: f64) -> Result<f64, EstimationError> {
    // Negated comparisons so that NaN fails validation too.
    if !(optimistic < most_likely && most_likely < pessimistic) {
        return Err(EstimationError::Validation {
            constraint: OrderingConstraint::MeanOrdering,
            index: None,
        });
    }
    Ok((optimistic + 4.0 * most_likely + pessimistic) / 6.0)
}

pub fn std_dev(optimistic: f64, pessimistic: f64) -> Result<f64, EstimationError> {
    if !(optimistic < pessimistic) {
        return Err(EstimationError::Validation {
            constraint: OrderingConstraint::StdOrdering,
            index: None,
        });
    }
    Ok((pessimistic - optimistic) / 6.0)
}

pub fn interval(mean: f64, std_dev: f64, z_score: f64) -> Interval {
    let spread = std_dev * z_score;
    let min = mean - spread;
    Interval {
        min: if min < 0.0 { 0.0 } else { min },
        max: mean + spread,
    }
}

/// Means of every task and their sum.
pub fn mean_multiple(
    optimistic: &[f64],
    most_likely: &[f64],
    pessimistic: &[f64],
) -> Result<BatchEstimate, EstimationError> {
    ensure_same_length(optimistic.len(), most_likely.len())?;
    ensure_same_length(optimistic.len(), pessimistic.len())?;

    let mut per_task = Vec::with_capacity(optimistic.len());
    let mut total = 0.0;
    for (index, ((&o, &m), &p)) in optimistic
        .iter()
        .zip(most_likely)
        .zip(pessimistic)
        .enumerate()
    {
        let value = mean(o, m, p).map_err(|e| e.at_index(index))?;
        per_task.push(value);
        total += value;
    }

    Ok(BatchEstimate { per_task, total })
}

/// Standard deviations of every task. The total assumes independent tasks,
/// so it is the square root of the summed variances.
pub fn std_multiple(
    optimistic: &[f64],
    pessimistic: &[f64],
) -> Result<BatchEstimate, EstimationError> {
    ensure_same_length(optimistic.len(), pessimistic.len())?;

    let mut per_task = Vec::with_capacity(optimistic.len());
    let mut total_variance = 0.0;
    for (index, (&o, &p)) in optimistic.iter().zip(pessimistic).enumerate() {
        let value = std_dev(o, p).map_err(|e| e.at_index(index))?;
        per_task.push(value);
        total_variance += value * value;
    }

    Ok(BatchEstimate {
        per_task,
        total: total_variance.sqrt(),
    })
}

fn ensure_same_length(expected: usize, found: usize) -> Result<(), EstimationError> {
    if expected != found {
        return Err(EstimationError::Shape { expected, found });
    }
    Ok(())
}

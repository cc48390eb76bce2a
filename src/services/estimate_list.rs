use thiserror::Error;

use crate::domain::estimate::EstimateSeries;

#[derive(Error, Debug, PartialEq)]
pub enum EstimateListError {
    #[error("estimate list is empty")]
    Empty,
    #[error("invalid number at position {position}: '{value}'")]
    InvalidNumber { position: usize, value: String },
    #[error("invalid {label} estimates: {source}")]
    Field {
        label: &'static str,
        #[source]
        source: Box<EstimateListError>,
    },
}

/// Parses a comma-separated list such as `1,3.5, 7` into durations.
pub fn parse_estimate_list(raw: &str) -> Result<Vec<f64>, EstimateListError> {
    if raw.trim().is_empty() {
        return Err(EstimateListError::Empty);
    }

    raw.split(',')
        .enumerate()
        .map(|(index, item)| {
            let item = item.trim();
            item.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| EstimateListError::InvalidNumber {
                    position: index + 1,
                    value: item.to_string(),
                })
        })
        .collect()
}

impl EstimateSeries {
    /// Lengths are left unchecked here; the estimators report mismatches.
    pub fn from_lists(
        optimistic: &str,
        most_likely: &str,
        pessimistic: &str,
    ) -> Result<Self, EstimateListError> {
        Ok(Self {
            optimistic: parse_field("optimistic", optimistic)?,
            most_likely: parse_field("most likely", most_likely)?,
            pessimistic: parse_field("pessimistic", pessimistic)?,
        })
    }
}

fn parse_field(label: &'static str, raw: &str) -> Result<Vec<f64>, EstimateListError> {
    parse_estimate_list(raw).map_err(|source| EstimateListError::Field {
        label,
        source: Box::new(source),
    })
}

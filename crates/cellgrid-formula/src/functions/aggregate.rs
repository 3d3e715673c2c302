//! Range aggregates
//!
//! Each takes the numeric values collected from a range. An empty slice
//! yields `0` for every function.

/// SUM - total of all values
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// AVERAGE - arithmetic mean
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// MAX - largest value
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// MIN - smallest value
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// COUNT - number of values
pub fn count(values: &[f64]) -> f64 {
    values.len() as f64
}

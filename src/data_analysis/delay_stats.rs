// src/data_analysis/delay_stats.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// Summary statistics for one delay series, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1). Zero for a single sample.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl DelayStats {
    /// Annotation lines drawn in each subplot's stats box.
    pub fn annotation_lines(&self) -> Vec<String> {
        vec![
            format!("μ = {:.3} μs", self.mean),
            format!("σ = {:.3} μs", self.std_dev),
        ]
    }
}

/// Computes mean, sample standard deviation and extrema.
/// Returns None for an empty slice, or if a value is NaN.
pub fn compute_delay_stats(delays_us: &[f64]) -> Option<DelayStats> {
    if delays_us.is_empty() {
        return None;
    }

    let values = Array1::from(delays_us.to_vec());
    let mean = values.mean()?;
    // ndarray panics when ddof >= n.
    let std_dev = if values.len() > 1 { values.std(1.0) } else { 0.0 };
    let min = *values.min().ok()?;
    let max = *values.max().ok()?;

    Some(DelayStats {
        count: values.len(),
        mean,
        std_dev,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_stats() {
        assert_eq!(compute_delay_stats(&[]), None);
    }

    #[test]
    fn test_single_value() {
        let stats = compute_delay_stats(&[42.5]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 42.5);
        assert_eq!(stats.max, 42.5);
    }

    #[test]
    fn test_constant_series_is_exact() {
        let stats = compute_delay_stats(&[100.0, 100.0, 100.0]).unwrap();
        assert_eq!(stats.mean, 100.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_sample_standard_deviation() {
        // Sample variance of 2,4,4,4,5,5,7,9 is 32/7.
        let stats = compute_delay_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
    }

    #[test]
    fn test_std_dev_ignores_order() {
        let forward = [120.25, 98.5, 101.0, 250.75, 99.125, 100.0, 97.5];
        let mut reversed = forward;
        reversed.reverse();
        let mut sorted = forward;
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let a = compute_delay_stats(&forward).unwrap().std_dev;
        let b = compute_delay_stats(&reversed).unwrap().std_dev;
        let c = compute_delay_stats(&sorted).unwrap().std_dev;
        assert!((a - b).abs() < 1e-9);
        assert!((a - c).abs() < 1e-9);
    }

    #[test]
    fn test_nan_has_no_stats() {
        assert_eq!(compute_delay_stats(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn test_annotation_lines_three_decimals() {
        let stats = compute_delay_stats(&[100.0, 101.0]).unwrap();
        assert_eq!(
            stats.annotation_lines(),
            vec!["μ = 100.500 μs".to_string(), "σ = 0.707 μs".to_string()]
        );
    }
}

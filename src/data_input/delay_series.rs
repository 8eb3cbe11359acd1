// src/data_input/delay_series.rs

/// One condition's measurements, in file row order.
/// `measurements[i]` and `delays_us[i]` always come from the same CSV row.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DelaySeries {
    pub measurements: Vec<i64>, // Measurement index (sequence number).
    pub delays_us: Vec<f64>,    // One-way delay in microseconds.
}

impl DelaySeries {
    pub fn push(&mut self, measurement: i64, delay_us: f64) {
        self.measurements.push(measurement);
        self.delays_us.push(delay_us);
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// (measurement, delay) pairs as plot coordinates.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.measurements
            .iter()
            .zip(self.delays_us.iter())
            .map(|(&m, &d)| (m as f64, d))
            .collect()
    }

    /// Smallest and largest measurement index, or None when empty.
    pub fn measurement_span(&self) -> Option<(i64, i64)> {
        let min = self.measurements.iter().min()?;
        let max = self.measurements.iter().max()?;
        Some((*min, *max))
    }
}

impl FromIterator<(i64, f64)> for DelaySeries {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        let mut series = DelaySeries::default();
        for (measurement, delay_us) in iter {
            series.push(measurement, delay_us);
        }
        series
    }
}

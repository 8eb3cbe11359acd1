// src/data_input/delay_parser.rs

use csv::{ReaderBuilder, StringRecord};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::{HEADER_MEASUREMENT, HEADER_ONE_WAY_DELAY_US};
use crate::data_input::delay_series::DelaySeries;

/// Parses a one-way delay CSV file into a `DelaySeries`.
///
/// The file must have a header row containing `measurement` and
/// `one_way_delay_us`; other columns are ignored. Any row that cannot be
/// read, whose values do not parse, or whose delay is NaN or infinite aborts
/// the whole parse, there is no row skipping.
pub fn parse_delay_csv(input_file_path: &Path) -> Result<DelaySeries, Box<dyn Error>> {
    let source = input_file_path.display().to_string();
    let file = File::open(input_file_path).map_err(|e| format!("Failed to open '{source}': {e}"))?;
    parse_delay_reader(BufReader::new(file), &source)
}

/// Same as `parse_delay_csv` but over any reader. `source` names the input in
/// error messages.
pub fn parse_delay_reader<R: Read>(reader: R, source: &str) -> Result<DelaySeries, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_record = reader
        .headers()
        .map_err(|e| format!("{source}: failed to read header row: {e}"))?
        .clone();
    let measurement_idx = find_column(&header_record, HEADER_MEASUREMENT, source)?;
    let delay_idx = find_column(&header_record, HEADER_ONE_WAY_DELAY_US, source)?;

    let mut series = DelaySeries::default();
    for (row_index, result) in reader.records().enumerate() {
        // Header is line 1, so data row 0 sits on line 2.
        let line = row_index + 2;
        let record =
            result.map_err(|e| format!("{source}: failed to read line {line}: {e}"))?;

        let measurement_str = record.get(measurement_idx).unwrap_or("");
        let measurement = measurement_str.parse::<i64>().map_err(|_| {
            format!("{source}: line {line}: invalid '{HEADER_MEASUREMENT}' value '{measurement_str}'")
        })?;

        let delay_str = record.get(delay_idx).unwrap_or("");
        let delay_us = delay_str.parse::<f64>().map_err(|_| {
            format!("{source}: line {line}: invalid '{HEADER_ONE_WAY_DELAY_US}' value '{delay_str}'")
        })?;
        if !delay_us.is_finite() {
            return Err(format!(
                "{source}: line {line}: non-finite '{HEADER_ONE_WAY_DELAY_US}' value '{delay_str}'"
            )
            .into());
        }

        series.push(measurement, delay_us);
    }

    Ok(series)
}

fn find_column(header_record: &StringRecord, name: &str, source: &str) -> Result<usize, Box<dyn Error>> {
    header_record
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| format!("{source}: missing required column '{name}'").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_rows() {
        let csv = "measurement,one_way_delay_us\n1,100.5\n2,101.25\n3,99.0\n";
        let series = parse_delay_reader(csv.as_bytes(), "inline").unwrap();
        assert_eq!(series.measurements, vec![1, 2, 3]);
        assert_eq!(series.delays_us, vec![100.5, 101.25, 99.0]);
    }

    #[test]
    fn test_parse_reordered_and_extra_columns() {
        let csv = "host, one_way_delay_us , measurement\nA, 12.0, 7\nB, 13.5, 8\n";
        let series = parse_delay_reader(csv.as_bytes(), "inline").unwrap();
        assert_eq!(series.measurements, vec![7, 8]);
        assert_eq!(series.delays_us, vec![12.0, 13.5]);
    }

    #[test]
    fn test_header_only_is_empty_series() {
        let series = parse_delay_reader("measurement,one_way_delay_us\n".as_bytes(), "inline").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "measurement,delay\n1,100.0\n";
        let err = parse_delay_reader(csv.as_bytes(), "loss1.csv").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("loss1.csv"), "{msg}");
        assert!(msg.contains("one_way_delay_us"), "{msg}");
    }

    #[test]
    fn test_non_numeric_delay_is_error() {
        let csv = "measurement,one_way_delay_us\n1,100.0\n2,abc\n";
        let err = parse_delay_reader(csv.as_bytes(), "normal.csv").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 3"), "{msg}");
        assert!(msg.contains("abc"), "{msg}");
    }

    #[test]
    fn test_fractional_measurement_is_error() {
        let csv = "measurement,one_way_delay_us\n1.5,100.0\n";
        assert!(parse_delay_reader(csv.as_bytes(), "inline").is_err());
    }

    #[test]
    fn test_short_row_is_error() {
        let csv = "measurement,one_way_delay_us\n1,100.0\n2\n";
        assert!(parse_delay_reader(csv.as_bytes(), "inline").is_err());
    }

    #[test]
    fn test_infinite_delay_is_error() {
        for value in ["inf", "-inf", "1e999"] {
            let csv = format!("measurement,one_way_delay_us\n1,100.0\n2,{value}\n");
            let err = parse_delay_reader(csv.as_bytes(), "loss2.csv").unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("line 3"), "{msg}");
            assert!(msg.contains("non-finite"), "{msg}");
        }
    }

    #[test]
    fn test_nan_delay_is_error() {
        let csv = "measurement,one_way_delay_us\n1,NaN\n";
        let msg = parse_delay_reader(csv.as_bytes(), "inline").unwrap_err().to_string();
        assert!(msg.contains("non-finite"), "{msg}");
    }

    #[test]
    fn test_open_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("delayjitter.csv");
        let msg = parse_delay_csv(&path).unwrap_err().to_string();
        assert!(msg.contains("delayjitter.csv"), "{msg}");
    }
}

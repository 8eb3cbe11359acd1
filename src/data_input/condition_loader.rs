// src/data_input/condition_loader.rs

use std::error::Error;
use std::fs;

use crate::conditions::Condition;
use crate::data_analysis::delay_stats::{compute_delay_stats, DelayStats};
use crate::data_input::delay_parser::parse_delay_csv;
use crate::data_input::delay_series::DelaySeries;
use crate::report_context::ReportConfig;

/// A condition whose measurement file was found and parsed.
#[derive(Debug, Clone)]
pub struct ConditionSeries {
    pub condition: Condition,
    pub series: DelaySeries,
    /// None when the file had no data rows.
    pub stats: Option<DelayStats>,
}

/// Result of loading every configured condition.
#[derive(Debug, Clone, Default)]
pub struct LoadedConditions {
    /// Loaded entries, in configuration order.
    pub available: Vec<ConditionSeries>,
    /// Conditions whose file does not exist.
    pub missing: Vec<Condition>,
}

impl LoadedConditions {
    pub fn get(&self, file_name: &str) -> Option<&ConditionSeries> {
        self.available
            .iter()
            .find(|entry| entry.condition.file_name == file_name)
    }

    pub fn is_missing(&self, file_name: &str) -> bool {
        self.missing.iter().any(|c| c.file_name == file_name)
    }
}

/// Loads each configured condition from the input directory.
///
/// Absent files are not an error: they are reported on stderr and listed in
/// `LoadedConditions::missing`. Anything present under a condition's file
/// name that cannot be opened or parsed aborts the whole load.
pub fn load_conditions(config: &ReportConfig) -> Result<LoadedConditions, Box<dyn Error>> {
    let mut loaded = LoadedConditions::default();

    for condition in &config.conditions {
        let path = config.input_path(condition);
        // Only a path with nothing at it counts as missing; a directory or a
        // dangling symlink under a condition's name fails in the parser.
        if fs::symlink_metadata(&path).is_err() {
            eprintln!(
                "  Warning: '{}' not found, skipping condition '{}'.",
                path.display(),
                condition.label
            );
            loaded.missing.push(*condition);
            continue;
        }

        let series = parse_delay_csv(&path)?;
        let stats = compute_delay_stats(&series.delays_us);
        match &stats {
            Some(s) => println!(
                "  Loaded '{}': {} rows, mean {:.3} us, std dev {:.3} us, range [{:.3}, {:.3}] us.",
                path.display(),
                s.count,
                s.mean,
                s.std_dev,
                s.min,
                s.max
            ),
            None => println!(
                "  Loaded '{}': {} rows, no statistics available.",
                path.display(),
                series.len()
            ),
        }

        loaded.available.push(ConditionSeries {
            condition: *condition,
            series,
            stats,
        });
    }

    Ok(loaded)
}

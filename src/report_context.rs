// src/report_context.rs

use std::path::{Path, PathBuf};

use crate::conditions::{Condition, DEFAULT_CONDITIONS};
use crate::constants::{COMBINED_FILE_NAME, MEASUREMENTS_DIR, PLOTS_DIR, SUBPLOTS_FILE_NAME};

/// Everything a report run needs to know about where to read, where to write
/// and which conditions to draw. Passed explicitly through the pipeline.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding the per-condition CSV files.
    pub input_dir: PathBuf,

    /// Directory the PNG charts are written to (created if absent).
    pub output_dir: PathBuf,

    /// Ordered condition table.
    pub conditions: Vec<Condition>,
}

impl ReportConfig {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, conditions: Vec<Condition>) -> Self {
        Self {
            input_dir,
            output_dir,
            conditions,
        }
    }

    pub fn input_path(&self, condition: &Condition) -> PathBuf {
        self.input_dir.join(condition.file_name)
    }

    pub fn subplots_path(&self) -> PathBuf {
        self.output_dir.join(SUBPLOTS_FILE_NAME)
    }

    pub fn combined_path(&self) -> PathBuf {
        self.output_dir.join(COMBINED_FILE_NAME)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(
            Path::new(MEASUREMENTS_DIR).to_path_buf(),
            Path::new(PLOTS_DIR).to_path_buf(),
            DEFAULT_CONDITIONS.to_vec(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = ReportConfig::default();
        assert_eq!(
            config.input_path(&DEFAULT_CONDITIONS[0]),
            Path::new("mediciones").join("normal.csv")
        );
        assert_eq!(
            config.subplots_path(),
            Path::new("plots").join("one_way_delay_subplots.png")
        );
        assert_eq!(
            config.combined_path(),
            Path::new("plots").join("one_way_delay_combined.png")
        );
        assert_eq!(config.conditions.len(), 5);
    }
}

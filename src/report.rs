// src/report.rs

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use crate::conditions::Condition;
use crate::data_input::condition_loader::load_conditions;
use crate::plot_functions::plot_delay_combined::plot_delay_combined;
use crate::plot_functions::plot_delay_subplots::plot_delay_subplots;
use crate::report_context::ReportConfig;

/// What a report run produced.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub written: Vec<PathBuf>,
    /// Conditions drawn as placeholders because their file was absent.
    pub missing: Vec<Condition>,
}

/// Runs the whole report: output directory, loading, both charts.
/// The output directory is created before anything is read so that a
/// permission problem fails the run before any work is done.
pub fn run_report(config: &ReportConfig) -> Result<ReportOutcome, Box<dyn Error>> {
    fs::create_dir_all(&config.output_dir).map_err(|e| {
        format!(
            "Failed to create output directory '{}': {e}",
            config.output_dir.display()
        )
    })?;

    println!("\n--- Loading Measurements ---");
    let loaded = load_conditions(config)?;
    println!(
        "  {} of {} conditions loaded.",
        loaded.available.len(),
        config.conditions.len()
    );

    println!("\n--- Generating Subplot Grid ---");
    let subplots = plot_delay_subplots(&loaded, config)?;

    println!("\n--- Generating Combined Plot ---");
    let combined = plot_delay_combined(&loaded, config)?;

    Ok(ReportOutcome {
        written: vec![subplots, combined],
        missing: loaded.missing,
    })
}

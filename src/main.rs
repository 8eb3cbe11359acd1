// src/main.rs

use std::error::Error;

use delay_csv_render::crate_version;
use delay_csv_render::report::run_report;
use delay_csv_render::report_context::ReportConfig;

fn main() -> Result<(), Box<dyn Error>> {
    println!("delay_csv_render v{}", crate_version());

    let config = ReportConfig::default();
    println!(
        "Reading measurements from '{}', writing charts to '{}'.",
        config.input_dir.display(),
        config.output_dir.display()
    );

    let outcome = run_report(&config)?;

    if !outcome.missing.is_empty() {
        let names: Vec<&str> = outcome.missing.iter().map(|c| c.file_name).collect();
        println!(
            "\nWarning: {} condition(s) had no measurement file: {}",
            names.len(),
            names.join(", ")
        );
    }

    println!("\nCharts generated successfully!");
    Ok(())
}

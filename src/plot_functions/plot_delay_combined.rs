// src/plot_functions/plot_delay_combined.rs

use std::error::Error;
use std::path::PathBuf;

use crate::constants::{
    AXIS_LABEL_DELAY_US, AXIS_LABEL_MEASUREMENT, COLOR_ACCENT, COMBINED_HEIGHT,
    COMBINED_SERIES_OPACITY, COMBINED_WIDTH, LINE_WIDTH_PLOT,
};
use crate::data_input::condition_loader::LoadedConditions;
use crate::plot_framework::{
    calculate_index_range, calculate_range, draw_single_plot, PanelConfig, PlotSeries,
};
use crate::report_context::ReportConfig;

pub const COMBINED_TITLE_LINES: [&str; 2] = [
    "One-Way Delay Comparison",
    "All Network Conditions",
];

/// Overlay of every loaded condition with a legend.
/// Conditions without data points are left out; if none remain the panel has
/// no series and degenerate ranges.
pub fn build_combined_panel(loaded: &LoadedConditions) -> PanelConfig {
    let mut series = Vec::new();
    let mut index_min = f64::INFINITY;
    let mut index_max = f64::NEG_INFINITY;
    let mut delay_min = f64::INFINITY;
    let mut delay_max = f64::NEG_INFINITY;

    for entry in &loaded.available {
        let (Some(stats), Some((first, last))) = (entry.stats, entry.series.measurement_span())
        else {
            continue;
        };
        index_min = index_min.min(first as f64);
        index_max = index_max.max(last as f64);
        delay_min = delay_min.min(stats.min);
        delay_max = delay_max.max(stats.max);

        series.push(PlotSeries {
            data: entry.series.points(),
            label: entry.condition.label.to_string(),
            color: entry.condition.color,
            opacity: COMBINED_SERIES_OPACITY,
            stroke_width: LINE_WIDTH_PLOT,
        });
    }

    let (x_range, y_range) = if series.is_empty() {
        (0.0..0.0, 0.0..0.0)
    } else {
        let (x_min, x_max) = calculate_index_range(index_min, index_max);
        let (y_min, y_max) = calculate_range(delay_min, delay_max);
        (x_min..x_max, y_min..y_max)
    };

    PanelConfig {
        title: String::new(),
        title_color: COLOR_ACCENT,
        x_range,
        y_range,
        series,
        x_label: AXIS_LABEL_MEASUREMENT.to_string(),
        y_label: AXIS_LABEL_DELAY_US.to_string(),
        reference_line: None,
        annotation: Vec::new(),
        show_legend: true,
    }
}

/// Generates the combined overlay chart and returns the written path.
pub fn plot_delay_combined(
    loaded: &LoadedConditions,
    config: &ReportConfig,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = config.combined_path();
    let panel = build_combined_panel(loaded);

    draw_single_plot(
        &output_file,
        (COMBINED_WIDTH, COMBINED_HEIGHT),
        &COMBINED_TITLE_LINES,
        &panel,
    )?;
    println!("  Saved: {}", output_file.display());
    Ok(output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{Condition, DEFAULT_CONDITIONS};
    use crate::data_analysis::delay_stats::compute_delay_stats;
    use crate::data_input::condition_loader::ConditionSeries;
    use crate::data_input::delay_series::DelaySeries;

    fn entry(condition: Condition, rows: &[(i64, f64)]) -> ConditionSeries {
        let series: DelaySeries = rows.iter().copied().collect();
        let stats = compute_delay_stats(&series.delays_us);
        ConditionSeries {
            condition,
            series,
            stats,
        }
    }

    #[test]
    fn test_combined_overlays_all_loaded() {
        let loaded = LoadedConditions {
            available: vec![
                entry(DEFAULT_CONDITIONS[0], &[(1, 100.0), (2, 101.0)]),
                entry(DEFAULT_CONDITIONS[3], &[(1, 300.0), (2, 150.0), (10, 90.0)]),
            ],
            missing: vec![],
        };

        let panel = build_combined_panel(&loaded);
        assert!(panel.show_legend);
        assert!(panel.reference_line.is_none());
        assert!(panel.annotation.is_empty());

        let labels: Vec<&str> = panel.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Normal (no loss/delay)", "Loss 5%"]);
        assert!(panel.series.iter().all(|s| s.opacity == COMBINED_SERIES_OPACITY));
        assert_eq!(panel.series[1].color, DEFAULT_CONDITIONS[3].color);

        assert_eq!(panel.x_range, 1.0..10.0);
        assert!(panel.y_range.start < 90.0 && panel.y_range.end > 300.0);
        assert!(panel.has_valid_ranges());
    }

    #[test]
    fn test_combined_skips_empty_series() {
        let loaded = LoadedConditions {
            available: vec![
                entry(DEFAULT_CONDITIONS[0], &[]),
                entry(DEFAULT_CONDITIONS[1], &[(5, 50.0)]),
            ],
            missing: vec![],
        };

        let panel = build_combined_panel(&loaded);
        assert_eq!(panel.series.len(), 1);
        assert_eq!(panel.series[0].label, "Loss 1%");
        assert_eq!(panel.x_range, 4.5..5.5);
    }

    #[test]
    fn test_combined_without_data_has_no_series() {
        let panel = build_combined_panel(&LoadedConditions::default());
        assert!(panel.series.is_empty());
        assert!(!panel.has_valid_ranges());
    }
}

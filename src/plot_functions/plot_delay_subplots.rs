// src/plot_functions/plot_delay_subplots.rs

use std::error::Error;
use std::path::PathBuf;

use crate::conditions::Condition;
use crate::constants::{
    AXIS_LABEL_DELAY_US, AXIS_LABEL_MEASUREMENT, COLOR_MEAN_LINE, LINE_WIDTH_MEAN,
    LINE_WIDTH_PLOT, MEAN_LINE_OPACITY, SUBPLOTS_HEIGHT, SUBPLOTS_WIDTH, SUBPLOT_GRID_COLUMNS,
    SUBPLOT_SERIES_OPACITY,
};
use crate::data_input::condition_loader::{ConditionSeries, LoadedConditions};
use crate::plot_framework::{
    calculate_index_range, calculate_range, draw_grid_plot, PanelCell, PanelConfig, PlotSeries,
    ReferenceLine,
};
use crate::report_context::ReportConfig;

pub const SUBPLOTS_TITLE_LINES: [&str; 2] = [
    "One-Way Delay vs Measurement Number",
    "Different Network Conditions",
];

/// Panel for a single condition: the raw series, a dashed mean line and the
/// mean/std dev box. None when the series has no usable data.
pub fn build_condition_panel(entry: &ConditionSeries) -> Option<PanelConfig> {
    let stats = entry.stats?;
    let (first, last) = entry.series.measurement_span()?;
    let (x_min, x_max) = calculate_index_range(first as f64, last as f64);
    let (y_min, y_max) = calculate_range(stats.min, stats.max);
    let condition = &entry.condition;

    Some(PanelConfig {
        title: condition.label.to_string(),
        title_color: condition.color,
        x_range: x_min..x_max,
        y_range: y_min..y_max,
        series: vec![PlotSeries {
            data: entry.series.points(),
            label: String::new(),
            color: condition.color,
            opacity: SUBPLOT_SERIES_OPACITY,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: AXIS_LABEL_MEASUREMENT.to_string(),
        y_label: AXIS_LABEL_DELAY_US.to_string(),
        reference_line: Some(ReferenceLine {
            y: stats.mean,
            color: COLOR_MEAN_LINE,
            opacity: MEAN_LINE_OPACITY,
            stroke_width: LINE_WIDTH_MEAN,
        }),
        annotation: stats.annotation_lines(),
        show_legend: false,
    })
}

/// One cell per configured condition, in configuration order.
pub fn build_subplot_cells(loaded: &LoadedConditions, conditions: &[Condition]) -> Vec<PanelCell> {
    conditions
        .iter()
        .map(|condition| match loaded.get(condition.file_name) {
            Some(entry) => match build_condition_panel(entry) {
                Some(panel) => PanelCell::Chart(panel),
                None => PanelCell::Unavailable {
                    label: condition.label.to_string(),
                    reason: "No data points".to_string(),
                },
            },
            None => PanelCell::Unavailable {
                label: condition.label.to_string(),
                reason: format!("'{}' not found", condition.file_name),
            },
        })
        .collect()
}

/// Generates the per-condition subplot grid and returns the written path.
pub fn plot_delay_subplots(
    loaded: &LoadedConditions,
    config: &ReportConfig,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = config.subplots_path();
    let cells = build_subplot_cells(loaded, &config.conditions);

    draw_grid_plot(
        &output_file,
        (SUBPLOTS_WIDTH, SUBPLOTS_HEIGHT),
        &SUBPLOTS_TITLE_LINES,
        SUBPLOT_GRID_COLUMNS,
        &cells,
    )?;
    println!("  Saved: {}", output_file.display());
    Ok(output_file)
}

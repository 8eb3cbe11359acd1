// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Rectangle, Text};
use plotters::prelude::Cartesian2d;
use plotters::series::LineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    ANNOTATION_BOX_OPACITY, ANNOTATION_OFFSET_RATIO, ANNOTATION_PADDING_PX, COLOR_ACCENT,
    COLOR_AXES_BG, COLOR_FIGURE_BG, COLOR_GRID, FIGURE_TITLE_AREA_PX, FONT_SIZE_ANNOTATION,
    FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE, GRID_OPACITY, LINE_WIDTH_LEGEND,
    MEAN_LINE_DASH_SEGMENTS,
};
use crate::font_config::{
    annotation_style, axis_desc_style, axis_label_style, chart_title_style, legend_style,
    main_title_style, register_bundled_fonts, FONT_TUPLE_MESSAGE,
};

// Text size estimates used to lay out boxes around text.
const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
const LINE_HEIGHT_SPACING: i32 = 6; // Additional spacing between lines

type DelayChart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// X range for measurement indices: exact span, widened only when the span
/// is a single point.
pub fn calculate_index_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    if (max - min).abs() < 1e-9 {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

/// X tick label: measurement indices are whole numbers.
pub fn format_measurement_tick(x: f64) -> String {
    format!("{x:.0}")
}

/// Y tick label for delays in microseconds. Large delays switch to "k"
/// notation so the label area stays narrow.
pub fn format_delay_tick(y: f64) -> String {
    if y.abs() >= 10_000.0 {
        format!("{:.1}k", y / 1000.0)
    } else {
        format!("{y:.1}")
    }
}

/// Estimated pixel size of a block of text lines.
fn estimate_text_size(lines: &[String], font_size: i32) -> (i32, i32) {
    let char_width = (font_size as f32 * CHAR_WIDTH_RATIO) as i32;
    let line_height = font_size + LINE_HEIGHT_SPACING;
    let max_line_length = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    (
        (max_line_length as i32).saturating_mul(char_width),
        (lines.len() as i32).saturating_mul(line_height),
    )
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    label: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = area.dim_in_pixel();
    let lines = vec![format!("{label} Data Unavailable:"), reason.to_string()];
    let (text_width, text_height) = estimate_text_size(&lines, FONT_SIZE_MESSAGE);

    let left = width as i32 / 2 - text_width / 2;
    let top = height as i32 / 2 - text_height / 2;
    let line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&COLOR_ACCENT);
    for (i, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            line.as_str(),
            (left, top + i as i32 * line_height),
            text_style.clone(),
        ))?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    /// Legend text; empty keeps the series out of the legend.
    pub label: String,
    pub color: RGBColor,
    pub opacity: f64,
    pub stroke_width: u32,
}

/// Dashed horizontal line spanning the full x range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub y: f64,
    pub color: RGBColor,
    pub opacity: f64,
    pub stroke_width: u32,
}

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub title: String,
    pub title_color: RGBColor,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub reference_line: Option<ReferenceLine>,
    /// Lines of the boxed note in the top-left corner; empty draws no box.
    pub annotation: Vec<String>,
    pub show_legend: bool,
}

impl PanelConfig {
    /// Both ranges must be finite and non-empty; an infinite span never
    /// finishes tick generation.
    pub fn has_valid_ranges(&self) -> bool {
        let bounds = [
            self.x_range.start,
            self.x_range.end,
            self.y_range.start,
            self.y_range.end,
        ];
        bounds.iter().all(|b| b.is_finite())
            && self.x_range.end > self.x_range.start
            && self.y_range.end > self.y_range.start
    }
}

/// What goes into one cell of a grid figure.
#[derive(Debug, Clone)]
pub enum PanelCell {
    Chart(PanelConfig),
    Unavailable { label: String, reason: String },
}

fn draw_reference_line(
    chart: &mut DelayChart,
    line: &ReferenceLine,
    x_range: &Range<f64>,
) -> Result<(), Box<dyn Error>> {
    // Dash and gap have equal length.
    let segment_length = (x_range.end - x_range.start) / (MEAN_LINE_DASH_SEGMENTS as f64 * 2.0);
    let y = line.y;
    let x0 = x_range.start;
    chart.draw_series((0..MEAN_LINE_DASH_SEGMENTS).map(|i| {
        let x_start = x0 + (i as f64 * 2.0) * segment_length;
        PathElement::new(
            vec![(x_start, y), (x_start + segment_length, y)],
            line.color.mix(line.opacity).stroke_width(line.stroke_width),
        )
    }))?;
    Ok(())
}

fn draw_annotation_box(chart: &DelayChart, lines: &[String]) -> Result<(), Box<dyn Error>> {
    let plot_area = chart.plotting_area().strip_coord_spec();
    let (width, height) = plot_area.dim_in_pixel();
    let (text_width, text_height) = estimate_text_size(lines, FONT_SIZE_ANNOTATION);

    let left = (width as f64 * ANNOTATION_OFFSET_RATIO) as i32;
    let top = (height as f64 * ANNOTATION_OFFSET_RATIO) as i32;
    let corners = [
        (left, top),
        (
            left + text_width + 2 * ANNOTATION_PADDING_PX,
            top + text_height + 2 * ANNOTATION_PADDING_PX,
        ),
    ];

    plot_area.draw(&Rectangle::new(
        corners,
        COLOR_FIGURE_BG.mix(ANNOTATION_BOX_OPACITY).filled(),
    ))?;
    plot_area.draw(&Rectangle::new(corners, COLOR_ACCENT.stroke_width(1)))?;

    let line_height = FONT_SIZE_ANNOTATION + LINE_HEIGHT_SPACING;
    let text_style = annotation_style();
    for (i, line) in lines.iter().enumerate() {
        plot_area.draw(&Text::new(
            line.as_str(),
            (
                left + ANNOTATION_PADDING_PX,
                top + ANNOTATION_PADDING_PX + i as i32 * line_height,
            ),
            text_style.clone(),
        ))?;
    }
    Ok(())
}

/// Draws one panel: themed axes, line series, optional mean line,
/// optional stats box and optional legend.
pub fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel: &PanelConfig,
) -> Result<(), Box<dyn Error>> {
    let mut builder = ChartBuilder::on(area);
    builder.margin(10).x_label_area_size(60).y_label_area_size(80);
    if !panel.title.is_empty() {
        builder.caption(&panel.title, chart_title_style(&panel.title_color));
    }
    let mut chart = builder.build_cartesian_2d(panel.x_range.clone(), panel.y_range.clone())?;

    chart.plotting_area().fill(&COLOR_AXES_BG)?;

    chart
        .configure_mesh()
        .x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .x_labels(10)
        .y_labels(8)
        .x_label_formatter(&|x| format_measurement_tick(*x))
        .y_label_formatter(&|y| format_delay_tick(*y))
        .axis_style(COLOR_ACCENT)
        .bold_line_style(COLOR_GRID.mix(GRID_OPACITY))
        .light_line_style(COLOR_GRID.mix(GRID_OPACITY * 0.5))
        .label_style(axis_label_style())
        .axis_desc_style(axis_desc_style())
        .draw()?;

    let mut legend_series_count = 0;
    for s in &panel.series {
        let color = s.color.mix(s.opacity);
        let drawn = chart.draw_series(LineSeries::new(
            s.data.iter().copied(),
            color.stroke_width(s.stroke_width),
        ))?;
        if panel.show_legend && !s.label.is_empty() {
            drawn.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if let Some(line) = &panel.reference_line {
        draw_reference_line(&mut chart, line, &panel.x_range)?;
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(COLOR_AXES_BG.mix(0.9))
            .border_style(COLOR_ACCENT)
            .label_font(legend_style())
            .draw()?;
    }

    if !panel.annotation.is_empty() {
        draw_annotation_box(&chart, &panel.annotation)?;
    }

    Ok(())
}

/// Fills the figure background, draws the centered title lines and returns the
/// area left below them.
fn prepare_figure<'a>(
    root_area: &DrawingArea<BitMapBackend<'a>, Shift>,
    title_lines: &[&str],
) -> Result<DrawingArea<BitMapBackend<'a>, Shift>, Box<dyn Error>> {
    register_bundled_fonts()?;
    root_area.fill(&COLOR_FIGURE_BG)?;
    let (width, _) = root_area.dim_in_pixel();
    let title_style = main_title_style(&COLOR_ACCENT).pos(Pos::new(HPos::Center, VPos::Top));
    let line_height = FONT_SIZE_MAIN_TITLE + LINE_HEIGHT_SPACING;
    for (i, line) in title_lines.iter().enumerate() {
        root_area.draw(&Text::new(
            *line,
            (width as i32 / 2, 15 + i as i32 * line_height),
            title_style.clone(),
        ))?;
    }
    Ok(root_area.margin(FIGURE_TITLE_AREA_PX, 20, 20, 20))
}

/// Draws a grid figure: cell `i` holds `cells[i]`, filled row by row.
/// Grid cells past the end of `cells` stay empty.
pub fn draw_grid_plot(
    output_path: &Path,
    dimensions: (u32, u32),
    title_lines: &[&str],
    columns: usize,
    cells: &[PanelCell],
) -> Result<(), Box<dyn Error>> {
    let columns = columns.max(1);
    let rows = cells.len().div_ceil(columns).max(1);

    let root_area = BitMapBackend::new(output_path, dimensions).into_drawing_area();
    let body = prepare_figure(&root_area, title_lines)?;
    let sub_plot_areas = body.split_evenly((rows, columns));

    for (area, cell) in sub_plot_areas.iter().zip(cells.iter()) {
        match cell {
            PanelCell::Chart(panel) => {
                let has_data = panel.series.iter().any(|s| !s.data.is_empty());
                if has_data && panel.has_valid_ranges() {
                    draw_panel(area, panel)?;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    draw_unavailable_message(area, &panel.title, reason)?;
                }
            }
            PanelCell::Unavailable { label, reason } => {
                draw_unavailable_message(area, label, reason)?;
            }
        }
    }

    root_area.present()?;
    Ok(())
}

/// Draws a figure holding a single panel.
pub fn draw_single_plot(
    output_path: &Path,
    dimensions: (u32, u32),
    title_lines: &[&str],
    panel: &PanelConfig,
) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, dimensions).into_drawing_area();
    let body = prepare_figure(&root_area, title_lines)?;

    let has_data = panel.series.iter().any(|s| !s.data.is_empty());
    if has_data && panel.has_valid_ranges() {
        draw_panel(&body, panel)?;
    } else if !has_data {
        draw_unavailable_message(&body, "Combined", "No condition has data points")?;
    } else {
        draw_unavailable_message(&body, "Combined", "Invalid ranges")?;
    }

    root_area.present()?;
    Ok(())
}

// src/constants.rs

use plotters::style::RGBColor;

// Input and output locations, relative to the working directory.
pub const MEASUREMENTS_DIR: &str = "mediciones";
pub const PLOTS_DIR: &str = "plots";
pub const SUBPLOTS_FILE_NAME: &str = "one_way_delay_subplots.png";
pub const COMBINED_FILE_NAME: &str = "one_way_delay_combined.png";

// CSV column headers written by the measurement server.
pub const HEADER_MEASUREMENT: &str = "measurement";
pub const HEADER_ONE_WAY_DELAY_US: &str = "one_way_delay_us";

// Axis descriptions shared by both charts.
pub const AXIS_LABEL_MEASUREMENT: &str = "Measurement Number";
pub const AXIS_LABEL_DELAY_US: &str = "One-Way Delay (μs)";

// Plot dimensions (14x12 in and 14x8 in at 150 dpi).
pub const SUBPLOTS_WIDTH: u32 = 2100;
pub const SUBPLOTS_HEIGHT: u32 = 1800;
pub const COMBINED_WIDTH: u32 = 2100;
pub const COMBINED_HEIGHT: u32 = 1200;

// Subplot grid is always two panels wide; rows grow with the condition count.
pub const SUBPLOT_GRID_COLUMNS: usize = 2;

// Space reserved above the panels for the figure title.
pub const FIGURE_TITLE_AREA_PX: u32 = 110;

// --- Theme Colors ---
pub const COLOR_FIGURE_BG: RGBColor = RGBColor(0x1a, 0x1a, 0x2e);
pub const COLOR_AXES_BG: RGBColor = RGBColor(0x16, 0x21, 0x3e);
pub const COLOR_ACCENT: RGBColor = RGBColor(0xe9, 0x45, 0x60);
pub const COLOR_TEXT: RGBColor = RGBColor(0xea, 0xea, 0xea);
pub const COLOR_GRID: RGBColor = RGBColor(0x0f, 0x34, 0x60);
pub const GRID_OPACITY: f64 = 0.6;

// --- Condition Colors ---
pub const COLOR_NORMAL: RGBColor = RGBColor(0x00, 0xd9, 0xff);
pub const COLOR_LOSS_1: RGBColor = RGBColor(0x7d, 0xff, 0x7d);
pub const COLOR_LOSS_2: RGBColor = RGBColor(0xff, 0xcc, 0x00);
pub const COLOR_LOSS_5: RGBColor = RGBColor(0xff, 0x6b, 0x6b);
pub const COLOR_DELAY_JITTER: RGBColor = RGBColor(0xbf, 0x7d, 0xff);

// Series opacity per chart.
pub const SUBPLOT_SERIES_OPACITY: f64 = 0.8;
pub const COMBINED_SERIES_OPACITY: f64 = 0.7;

// Mean reference line.
pub const COLOR_MEAN_LINE: RGBColor = COLOR_ACCENT;
pub const MEAN_LINE_OPACITY: f64 = 0.7;
pub const MEAN_LINE_DASH_SEGMENTS: usize = 60;

// Annotation box.
pub const ANNOTATION_BOX_OPACITY: f64 = 0.8;
pub const ANNOTATION_PADDING_PX: i32 = 8;
pub const ANNOTATION_OFFSET_RATIO: f64 = 0.02;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_MEAN: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 3;

// --- Font Sizes ---
pub const FONT_SIZE_MAIN_TITLE: i32 = 34;
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_AXIS_DESC: i32 = 18;
pub const FONT_SIZE_LEGEND: i32 = 18;
pub const FONT_SIZE_ANNOTATION: i32 = 16;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// src/constants.rs

// src/font_config.rs

// Font styles for plot rendering.
// Every text element of both charts gets its style from here so the two
// images stay visually consistent.

use plotters::style::{register_font, FontStyle, IntoFont, RGBColor, TextStyle};
use std::error::Error;
use std::sync::OnceLock;

use crate::constants::{
    COLOR_TEXT, FONT_SIZE_ANNOTATION, FONT_SIZE_AXIS_DESC, FONT_SIZE_AXIS_LABEL,
    FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE,
};

/// Embedded fonts at compile time, so rendering never depends on the host's
/// installed fonts.
pub static BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");
pub static BUNDLED_BOLD_FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSans-Bold.ttf");

/// Font family name the bundled fonts are registered under
pub const FONT_FAMILY_BUNDLED: &str = "DejaVu Sans";

static FONT_REGISTRATION: OnceLock<Result<(), String>> = OnceLock::new();

/// Registers the bundled regular and bold faces with plotters.
/// Runs once per process; later calls return the first outcome.
pub fn register_bundled_fonts() -> Result<(), Box<dyn Error>> {
    FONT_REGISTRATION
        .get_or_init(|| {
            let faces = [
                (FontStyle::Normal, BUNDLED_FONT_BYTES),
                (FontStyle::Bold, BUNDLED_BOLD_FONT_BYTES),
            ];
            for (style, bytes) in faces {
                register_font(FONT_FAMILY_BUNDLED, style, bytes).map_err(|_| {
                    format!("Bundled font '{FONT_FAMILY_BUNDLED}' ({}) is not a valid font", style.as_str())
                })?;
            }
            Ok(())
        })
        .clone()
        .map_err(Into::into)
}

// Tuple representations for use with plotters' IntoFont trait
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_AXIS_DESC: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_AXIS_DESC);
pub const FONT_TUPLE_LEGEND: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_LEGEND);
pub const FONT_TUPLE_ANNOTATION: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_ANNOTATION);
pub const FONT_TUPLE_MESSAGE: (&str, i32) = (FONT_FAMILY_BUNDLED, FONT_SIZE_MESSAGE);

/// Bold figure title in the given color.
pub fn main_title_style(color: &RGBColor) -> TextStyle<'static> {
    (FONT_FAMILY_BUNDLED, FONT_SIZE_MAIN_TITLE, FontStyle::Bold)
        .into_font()
        .color(color)
}

/// Bold panel caption in the given color.
pub fn chart_title_style(color: &RGBColor) -> TextStyle<'static> {
    (FONT_FAMILY_BUNDLED, FONT_SIZE_CHART_TITLE, FontStyle::Bold)
        .into_font()
        .color(color)
}

pub fn axis_label_style() -> TextStyle<'static> {
    FONT_TUPLE_AXIS_LABEL.into_font().color(&COLOR_TEXT)
}

pub fn axis_desc_style() -> TextStyle<'static> {
    FONT_TUPLE_AXIS_DESC.into_font().color(&COLOR_TEXT)
}

pub fn legend_style() -> TextStyle<'static> {
    FONT_TUPLE_LEGEND.into_font().color(&COLOR_TEXT)
}

pub fn annotation_style() -> TextStyle<'static> {
    FONT_TUPLE_ANNOTATION.into_font().color(&COLOR_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fonts_register() {
        register_bundled_fonts().unwrap();
        // A second call reuses the first registration.
        register_bundled_fonts().unwrap();
    }

    #[test]
    fn test_bold_styles_use_bundled_family() {
        let title = main_title_style(&COLOR_TEXT);
        assert_eq!(title.font.get_name(), FONT_FAMILY_BUNDLED);
        assert_eq!(title.font.get_style().as_str(), "bold");
        assert_eq!(legend_style().font.get_name(), FONT_FAMILY_BUNDLED);
    }
}

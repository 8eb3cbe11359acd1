// src/conditions.rs

//! Network condition table
//!
//! Each simulated network condition maps one measurement file to a display
//! label and a series color. Order matters: it is the panel order of the
//! subplot grid and the draw order of the combined chart.

use plotters::style::RGBColor;

use crate::constants::{COLOR_DELAY_JITTER, COLOR_LOSS_1, COLOR_LOSS_2, COLOR_LOSS_5, COLOR_NORMAL};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    /// File name inside the measurements directory, also used as the key.
    pub file_name: &'static str,
    pub label: &'static str,
    pub color: RGBColor,
}

impl Condition {
    pub const fn new(file_name: &'static str, label: &'static str, color: RGBColor) -> Self {
        Self {
            file_name,
            label,
            color,
        }
    }
}

/// The five conditions collected by the measurement runs.
pub const DEFAULT_CONDITIONS: [Condition; 5] = [
    Condition::new("normal.csv", "Normal (no loss/delay)", COLOR_NORMAL),
    Condition::new("loss1.csv", "Loss 1%", COLOR_LOSS_1),
    Condition::new("loss2.csv", "Loss 2%", COLOR_LOSS_2),
    Condition::new("loss5.csv", "Loss 5%", COLOR_LOSS_5),
    Condition::new("delayjitter.csv", "Delay + Jitter", COLOR_DELAY_JITTER),
];

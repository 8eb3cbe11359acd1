// src/data_input/mod.rs

pub mod condition_loader;
pub mod delay_parser;
pub mod delay_series;

// src/data_input/mod.rs

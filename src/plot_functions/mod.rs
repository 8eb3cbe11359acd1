// src/plot_functions/mod.rs

pub mod plot_delay_combined;
pub mod plot_delay_subplots;

// src/plot_functions/mod.rs

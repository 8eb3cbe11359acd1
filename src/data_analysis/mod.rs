// src/data_analysis/mod.rs

pub mod delay_stats;

// src/data_analysis/mod.rs

// src/lib.rs - Library interface for internal module access

pub mod conditions;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod report;
pub mod report_context;

// Crate version; a VERGEN_GIT_SEMVER set at compile time takes precedence.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}

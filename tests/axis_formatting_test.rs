// tests/axis_formatting_test.rs

use delay_csv_render::data_analysis::delay_stats::compute_delay_stats;
use delay_csv_render::plot_framework::{format_delay_tick, format_measurement_tick};

#[test]
fn test_measurement_ticks_are_integers() {
    assert_eq!(format_measurement_tick(0.0), "0");
    assert_eq!(format_measurement_tick(250.0), "250");
    assert_eq!(format_measurement_tick(1000.4), "1000");
}

#[test]
fn test_delay_ticks_keep_one_decimal() {
    // Flat series get a +/-0.5 us range, so sub-microsecond ticks must stay distinct.
    let ticks = [99.6, 99.8, 100.0, 100.2, 100.4];
    let labels: Vec<String> = ticks.iter().map(|&y| format_delay_tick(y)).collect();
    assert_eq!(labels, ["99.6", "99.8", "100.0", "100.2", "100.4"]);
    assert_eq!(format_delay_tick(9_999.9), "9999.9");
}

#[test]
fn test_large_delay_ticks_use_k_notation() {
    assert_eq!(format_delay_tick(10_000.0), "10.0k");
    assert_eq!(format_delay_tick(52_340.0), "52.3k");
    assert_eq!(format_delay_tick(-15_000.0), "-15.0k");
}

#[test]
fn test_stats_box_text() {
    let stats = compute_delay_stats(&[150.0, 152.0, 154.0, 156.0]).unwrap();
    let lines = stats.annotation_lines();
    assert_eq!(lines[0], "μ = 153.000 μs");
    // Sample std dev of an arithmetic sequence with step 2 and n = 4: sqrt(20/3).
    assert_eq!(lines[1], format!("σ = {:.3} μs", (20.0f64 / 3.0).sqrt()));
    assert_eq!(lines[1], "σ = 2.582 μs");
}

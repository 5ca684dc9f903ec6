// Display formatting shared by the report views

pub fn bytes_to_kb(bytes: f64) -> u64 {
    (bytes.max(0.0) / 1024.0).floor() as u64
}

pub fn score_to_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn format_seconds(ms: f64) -> String {
    format!("{:.1} s", ms / 1000.0)
}

pub fn format_millis(ms: f64) -> String {
    format!("{} ms", ms.round() as i64)
}

// CLS percentiles are reported multiplied by 100
pub fn format_layout_shift(percentile: f64) -> String {
    format!("{:.2}", percentile / 100.0)
}

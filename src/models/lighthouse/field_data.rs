use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Percentile {
    #[serde(default)]
    pub percentile: Option<f64>,
}

// loadingExperience.metrics, only the three Core Web Vitals are read
#[derive(Debug, Deserialize, Default)]
pub struct FieldMetrics {
    #[serde(rename = "LARGEST_CONTENTFUL_PAINT_MS")]
    pub largest_contentful_paint_ms: Option<Percentile>,
    #[serde(rename = "FIRST_INPUT_DELAY_MS")]
    pub first_input_delay_ms: Option<Percentile>,
    #[serde(rename = "CUMULATIVE_LAYOUT_SHIFT_SCORE")]
    pub cumulative_layout_shift_score: Option<Percentile>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LoadingExperience {
    #[serde(default)]
    pub metrics: Option<FieldMetrics>,
}

/// Real-user 75th percentile values reported for the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldData {
    pub largest_contentful_paint_ms: Option<f64>,
    pub first_input_delay_ms: Option<f64>,
    pub cumulative_layout_shift_score: Option<f64>,
}

impl FieldData {
    pub fn from_loading_experience(experience: LoadingExperience) -> Option<Self> {
        let metrics = experience.metrics?;
        let value = |p: Option<Percentile>| p.and_then(|p| p.percentile);
        Some(FieldData {
            largest_contentful_paint_ms: value(metrics.largest_contentful_paint_ms),
            first_input_delay_ms: value(metrics.first_input_delay_ms),
            cumulative_layout_shift_score: value(metrics.cumulative_layout_shift_score),
        })
    }
}

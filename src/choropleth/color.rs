//! Layer palettes and score-to-color selection.

use crate::types::MetricLayer;

/// Every ramp has seven steps, light to dark.
pub const RAMP_STEPS: usize = 7;

/// Fill for boundary features that resolve to no province.
pub const NEUTRAL_FILL: &str = "#e5e7eb";
/// Stroke for unresolved features.
pub const NEUTRAL_STROKE: &str = "#9ca3af";

const GDP: [&str; RAMP_STEPS] =
    ["#fee5d9", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#99000d"];
const POPULATION: [&str; RAMP_STEPS] =
    ["#edf8fb", "#ccecf3", "#99d8c9", "#66c2a4", "#41ae76", "#238b45", "#005824"];
const EDUCATION: [&str; RAMP_STEPS] =
    ["#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5"];
const HEALTHCARE: [&str; RAMP_STEPS] =
    ["#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45"];
const INVESTMENT: [&str; RAMP_STEPS] =
    ["#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801"];
const INFRASTRUCTURE: [&str; RAMP_STEPS] =
    ["#f7fcfd", "#e5f5f9", "#ccece6", "#99d8c9", "#66c2a4", "#41ae76", "#238b45"];

/// The fixed 7-entry ramp for a layer.
pub fn palette(layer: MetricLayer) -> &'static [&'static str; RAMP_STEPS] {
    match layer {
        MetricLayer::Gdp => &GDP,
        MetricLayer::Population => &POPULATION,
        MetricLayer::Education => &EDUCATION,
        MetricLayer::Healthcare => &HEALTHCARE,
        MetricLayer::Investment => &INVESTMENT,
        MetricLayer::Infrastructure => &INFRASTRUCTURE,
    }
}

/// Ramp position for a normalized score. Scores outside [0, 100] are
/// clamped; a non-finite score lands on the lightest step.
pub fn color_index(score: f64) -> usize {
    if !score.is_finite() {
        return 0;
    }
    let score = score.clamp(0.0, 100.0);
    ((score / 100.0 * RAMP_STEPS as f64).floor() as usize).min(RAMP_STEPS - 1)
}

/// Fill color for a normalized score under the layer's ramp.
pub fn color_for_score(score: f64, layer: MetricLayer) -> &'static str {
    palette(layer)[color_index(score)]
}

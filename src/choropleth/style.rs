use super::color::{NEUTRAL_FILL, NEUTRAL_STROKE, color_for_score};
use crate::types::MetricLayer;

/// Resolved visual style for one boundary feature.
///
/// Selection and hover emphasis only touch stroke and opacity; the fill
/// color is decided by the score alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_weight: f64,
    pub fill_opacity: f64,
}

/// Style for a resolved feature at the given normalized score.
pub fn feature_style(score: f64, layer: MetricLayer, selected: bool, hovered: bool) -> FeatureStyle {
    let emphasized = selected || hovered;
    FeatureStyle {
        fill: color_for_score(score, layer),
        stroke: if selected {
            "#2563eb"
        } else if hovered {
            "#3b82f6"
        } else {
            "#ffffff"
        },
        stroke_weight: if emphasized { 3.0 } else { 1.0 },
        fill_opacity: if emphasized { 0.9 } else { 0.7 },
    }
}

/// Neutral style for features that resolve to no province. These are
/// excluded from color scaling entirely.
pub fn unknown_style() -> FeatureStyle {
    FeatureStyle {
        fill: NEUTRAL_FILL,
        stroke: NEUTRAL_STROKE,
        stroke_weight: 1.0,
        fill_opacity: 0.5,
    }
}

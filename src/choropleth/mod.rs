//! Metric-to-color mapping for the province choropleth.

mod color;
mod style;
mod value;

pub use color::{NEUTRAL_FILL, NEUTRAL_STROKE, RAMP_STEPS, color_for_score, color_index, palette};
pub use style::{FeatureStyle, feature_style, unknown_style};
pub use value::{layer_max, layer_value, score};

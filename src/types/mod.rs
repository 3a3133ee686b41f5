mod layer;
mod province;

pub use layer::{MetricLayer, Visualization};
pub use province::Province;

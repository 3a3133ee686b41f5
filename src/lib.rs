#![doc = "camstat public API"]
mod atlas;
mod boundary;
mod choropleth;
mod coords;
mod dataset;
mod export;
pub mod format;
mod i18n;
mod io;
mod resolver;
mod types;
mod view;

#[doc(inline)]
pub use atlas::{Atlas, AtlasSummary, CoverageReport};

#[doc(inline)]
pub use boundary::{BoundaryFeature, BoundaryManifest, BoundarySet};

#[doc(inline)]
pub use choropleth::{
    FeatureStyle, color_for_score, color_index, layer_max, layer_value, palette, score,
};

#[doc(inline)]
pub use dataset::{read_provinces, read_provinces_csv, read_provinces_json};

#[doc(inline)]
pub use export::{export_filename, export_rows, write_csv};

#[doc(inline)]
pub use i18n::{Language, Translations};

#[doc(inline)]
pub use resolver::NameIndex;

#[doc(inline)]
pub use types::{MetricLayer, Province, Visualization};

#[doc(inline)]
pub use view::{ViewState, filter_provinces};

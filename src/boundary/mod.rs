//! The static province boundary dataset: named polygon features plus the
//! versioned asset contract that pins it.

mod geojson;
mod manifest;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geo::{Coord, CoordsIter, MultiPolygon, Rect};

pub use manifest::BoundaryManifest;

/// One administrative boundary: a polygon and the name property the
/// resolver joins on. The name is the only attribute this crate consumes.
#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    pub name: String,
    pub geometry: MultiPolygon<f64>,
}

/// The full boundary dataset, one feature per province.
#[derive(Debug, Clone, Default)]
pub struct BoundarySet {
    features: Vec<BoundaryFeature>,
}

impl BoundarySet {
    pub fn new(features: Vec<BoundaryFeature>) -> Self {
        Self { features }
    }

    /// Parse a GeoJSON FeatureCollection. Features without a usable name
    /// property are skipped; Polygon and MultiPolygon geometries are
    /// accepted, everything else is ignored.
    pub fn from_geojson_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self { features: geojson::parse_features(bytes)? })
    }

    pub fn read_from_geojson(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("[boundary] failed to read {}", path.display()))?;
        Self::from_geojson_bytes(&bytes)
    }

    pub fn features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Lon/lat bounding box over every feature; `None` when there is
    /// nothing to draw.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mut min = Coord { x: f64::INFINITY, y: f64::INFINITY };
        let mut max = Coord { x: f64::NEG_INFINITY, y: f64::NEG_INFINITY };
        let mut seen = false;

        for feature in &self.features {
            for coord in feature.geometry.coords_iter() {
                min.x = min.x.min(coord.x);
                min.y = min.y.min(coord.y);
                max.x = max.x.max(coord.x);
                max.y = max.y.max(coord.y);
                seen = true;
            }
        }

        seen.then(|| Rect::new(min, max))
    }
}

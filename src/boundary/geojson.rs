//! Hand-rolled GeoJSON FeatureCollection parsing; only the geometry and
//! the feature-name property are consumed.

use anyhow::{Context, Result, anyhow};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use super::BoundaryFeature;

pub(super) fn parse_features(bytes: &[u8]) -> Result<Vec<BoundaryFeature>> {
    let value: Value =
        serde_json::from_slice(bytes).context("[boundary] failed to parse GeoJSON bytes")?;
    let mut features = Vec::new();

    let Some(entries) = value["features"].as_array() else {
        return Ok(features);
    };

    for entry in entries {
        let Some(name) = feature_name(entry) else {
            continue; // unnamed features cannot be resolved, skip them
        };

        let geometry = &entry["geometry"];
        let multipolygon = match geometry["type"].as_str() {
            Some("Polygon") => {
                let coords = geometry["coordinates"]
                    .as_array()
                    .ok_or_else(|| anyhow!("[boundary] Polygon without coordinates"))?;
                MultiPolygon(vec![parse_polygon_coords(coords)?])
            }
            Some("MultiPolygon") => {
                let coords = geometry["coordinates"]
                    .as_array()
                    .ok_or_else(|| anyhow!("[boundary] MultiPolygon without coordinates"))?;
                parse_multipolygon_coords(coords)?
            }
            _ => continue, // points, lines, null geometries
        };

        features.push(BoundaryFeature { name, geometry: multipolygon });
    }

    Ok(features)
}

/// The `name` property, falling back to `NAME_1` (the GADM field name).
fn feature_name(feature: &Value) -> Option<String> {
    let props = feature.get("properties")?;
    props
        .get("name")
        .or_else(|| props.get("NAME_1"))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Standard GeoJSON MultiPolygon coordinates: [polygon][ring][position].
fn parse_multipolygon_coords(coords: &[Value]) -> Result<MultiPolygon<f64>> {
    let mut polygons = Vec::with_capacity(coords.len());
    for polygon_coords in coords {
        let rings = polygon_coords
            .as_array()
            .ok_or_else(|| anyhow!("[boundary] invalid MultiPolygon element"))?;
        polygons.push(parse_polygon_coords(rings)?);
    }
    Ok(MultiPolygon(polygons))
}

/// Standard GeoJSON Polygon coordinates: first ring exterior, rest holes.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let exterior = rings
        .first()
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("[boundary] polygon missing exterior ring"))?;
    let exterior = parse_ring_coords(exterior)?;

    let mut interiors = Vec::new();
    for ring in &rings[1..] {
        let ring = ring
            .as_array()
            .ok_or_else(|| anyhow!("[boundary] invalid interior ring"))?;
        interiors.push(parse_ring_coords(ring)?);
    }

    Ok(Polygon::new(exterior, interiors))
}

fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for pair in coords {
        if let Some(pair) = pair.as_array() {
            if pair.len() >= 2 {
                let x = pair[0]
                    .as_f64()
                    .ok_or_else(|| anyhow!("[boundary] coordinate x must be a number"))?;
                let y = pair[1]
                    .as_f64()
                    .ok_or_else(|| anyhow!("[boundary] coordinate y must be a number"))?;
                points.push(Coord { x, y });
            }
        }
    }

    // Close the ring if the source left it open.
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}

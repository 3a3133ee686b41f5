//! SVG rendering of the province choropleth.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use geo::{Centroid, Coord, CoordsIter, LineString, MultiPolygon};

use crate::atlas::Atlas;
use crate::choropleth::{self, RAMP_STEPS, palette};
use crate::i18n::{Language, Translations};
use crate::types::Visualization;
use crate::view::ViewState;

/// Projection function: lon/lat -> SVG coords (x,y)
type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

struct SvgWriter {
    writer: BufWriter<File>,
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl SvgWriter {
    fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[to_svg] Failed to create {}", path.display()))?;
        Ok(Self { writer: BufWriter::new(file) })
    }

    fn write_header(&mut self, width: f64, height: f64) -> Result<()> {
        writeln!(self, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
        writeln!(
            self,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##
        )?;
        writeln!(self, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
        Ok(())
    }

    fn write_styles(&mut self) -> Result<()> {
        writeln!(
            self,
            r##"<defs>
<style>
    .prov {{ vector-effect: non-scaling-stroke; }}
    .label {{ font: 10px sans-serif; fill: #111827; text-anchor: middle; }}
    .mark {{ stroke: #1e40af; stroke-width: 1; }}
</style>
</defs>"##
        )?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<()> {
        writeln!(self, "</svg>")?;
        Ok(())
    }
}

impl Atlas {
    /// Small wrapper with defaults.
    pub fn to_svg(
        &self,
        path: &Path,
        view: &ViewState,
        lang: Language,
        i18n: &Translations,
    ) -> Result<()> {
        self.to_svg_with_size(path, view, lang, i18n, 1200, 10)
    }

    /// Draw every boundary feature filled by the active layer's color
    /// scale, with optional labels, cluster markers, and a legend.
    pub fn to_svg_with_size(
        &self,
        path: &Path,
        view: &ViewState,
        lang: Language,
        i18n: &Translations,
        width: i32,
        margin: i32,
    ) -> Result<()> {
        let bounds = self
            .boundaries()
            .bounds()
            .ok_or_else(|| anyhow!("[to_svg] Could not determine bounds; nothing to draw."))?;

        let margin = margin as f64;
        let width = width as f64;
        let scale = (width - 2.0 * margin) / bounds.width();
        let height = bounds.height() * scale + 2.0 * margin;

        // lon/lat -> SVG coords (Y down)
        let project = move |coord: &Coord<f64>| -> (f64, f64) {
            let x = margin + (coord.x - bounds.min().x) * scale;
            let y = margin + (bounds.max().y - coord.y) * scale;
            (x, y)
        };

        let mut writer = SvgWriter::new(path)?;
        writer.write_header(width, height)?;
        writer.write_styles()?;

        for feature in self.boundaries().features() {
            let style = self.style_for(&feature.name, view);
            // Heatmap mode raises the fill weight across the board.
            let fill_opacity = match view.visualization {
                Visualization::Heatmap => style.fill_opacity.max(0.85),
                _ => style.fill_opacity,
            };
            let tooltip = self
                .tooltip_for(&feature.name, view, lang, i18n)
                .unwrap_or_else(|| format!("{} — {}", feature.name, i18n.get("noData", lang)));

            writeln!(
                writer,
                r#"<path class="prov" fill-rule="evenodd" style="fill:{};stroke:{};stroke-width:{};fill-opacity:{}" d="{}"><title>{}</title></path>"#,
                style.fill,
                style.stroke,
                style.stroke_weight,
                fill_opacity,
                multipolygon_to_path(&feature.geometry, &project),
                escape_text(&tooltip),
            )?;
        }

        if view.show_labels {
            self.draw_labels(&mut writer, lang, &project)?;
        }

        if view.visualization == Visualization::Cluster {
            self.draw_cluster_markers(&mut writer, view, &project)?;
        }

        draw_legend(&mut writer, view, lang, i18n, height, margin)?;

        writer.write_footer()?;
        writer.flush()?;
        Ok(())
    }

    /// Province names at feature centroids, localized.
    fn draw_labels(
        &self,
        writer: &mut SvgWriter,
        lang: Language,
        project: &Projection,
    ) -> Result<()> {
        for feature in self.boundaries().features() {
            let Some(center) = feature.geometry.centroid() else {
                continue;
            };
            let name = match self.resolve(&feature.name) {
                Some(province) => province.display_name(lang),
                None => feature.name.as_str(),
            };
            let (x, y) = project(&Coord { x: center.x(), y: center.y() });
            writeln!(
                writer,
                r#"<text class="label" x="{x:.1}" y="{y:.1}">{}</text>"#,
                escape_text(name),
            )?;
        }
        Ok(())
    }

    /// Value-scaled circles at province centers (cluster mode).
    fn draw_cluster_markers(
        &self,
        writer: &mut SvgWriter,
        view: &ViewState,
        project: &Projection,
    ) -> Result<()> {
        let max = choropleth::layer_max(self.provinces(), view.layer);
        for province in self.provinces() {
            let Some((lat, lon)) = province.coordinates else {
                continue;
            };
            let value = choropleth::layer_value(province, view.layer);
            let score = choropleth::score(value, max);
            let radius = 4.0 + score * 0.16;
            let (x, y) = project(&Coord { x: lon, y: lat });
            writeln!(
                writer,
                r#"<circle class="mark" cx="{x:.1}" cy="{y:.1}" r="{radius:.1}" style="fill:{};fill-opacity:0.4"/>"#,
                choropleth::color_for_score(score, view.layer),
            )?;
        }
        Ok(())
    }
}

/// Swatch row for the active layer's ramp, light to dark.
fn draw_legend(
    writer: &mut SvgWriter,
    view: &ViewState,
    lang: Language,
    i18n: &Translations,
    height: f64,
    margin: f64,
) -> Result<()> {
    let swatch = 18.0;
    let y = height - margin - 12.0;
    for (i, color) in palette(view.layer).iter().enumerate() {
        let x = margin + i as f64 * (swatch + 2.0);
        writeln!(
            writer,
            r#"<rect x="{x:.1}" y="{y:.1}" width="{swatch}" height="10" style="fill:{color};stroke:#9ca3af;stroke-width:0.5"/>"#
        )?;
    }
    let label_x = margin + RAMP_STEPS as f64 * (swatch + 2.0) + 6.0;
    writeln!(
        writer,
        r#"<text class="label" x="{label_x:.1}" y="{:.1}" text-anchor="start">{}</text>"#,
        y + 9.0,
        escape_text(i18n.get(view.layer.label_key(), lang)),
    )?;
    Ok(())
}

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &Projection) -> String {
    let mut out = String::new();
    for polygon in &shape.0 {
        ring_to_path(polygon.exterior(), project, &mut out);
        for interior in polygon.interiors() {
            ring_to_path(interior, project, &mut out);
        }
    }
    out
}

/// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
fn ring_to_path(ring: &LineString<f64>, project: &Projection, out: &mut String) {
    let mut coords = ring.coords_iter().map(|coord| project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryFeature, BoundarySet};
    use crate::types::Province;
    use geo::Polygon;

    fn make_atlas() -> Atlas {
        let province = Province {
            id: "p-a".into(),
            code: "08".into(),
            name_km: "កណ្តាល".into(),
            name_en: "Kandal".into(),
            capital: "Ta Khmau".into(),
            capital_km: None,
            area_km2: 3179.0,
            population: 1_195_547,
            gdp: None,
            education_index: None,
            healthcare_index: None,
            investment_amount: None,
            infrastructure_score: None,
            coordinates: Some((11.2333, 105.1167)),
        };
        let ring = LineString(vec![
            Coord { x: 104.8, y: 11.0 },
            Coord { x: 105.4, y: 11.0 },
            Coord { x: 105.4, y: 11.5 },
            Coord { x: 104.8, y: 11.5 },
            Coord { x: 104.8, y: 11.0 },
        ]);
        let feature = BoundaryFeature {
            name: "KANDAL".into(),
            geometry: MultiPolygon(vec![Polygon::new(ring, vec![])]),
        };
        Atlas::new(vec![province], BoundarySet::new(vec![feature]))
    }

    #[test]
    fn renders_a_well_formed_svg_with_a_filled_feature() {
        let atlas = make_atlas();
        let view = ViewState::default();
        let i18n = Translations::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");

        atlas.to_svg(&path, &view, Language::En, &i18n).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // Sole province holds the layer max -> darkest population step.
        assert!(svg.contains(palette(crate::types::MetricLayer::Population)[6]));
        assert!(svg.contains("<title>Kandal — Population: 1,195,547</title>"));
        assert!(svg.contains(r#"<text class="label""#));
    }

    #[test]
    fn cluster_mode_draws_markers() {
        let atlas = make_atlas();
        let mut view = ViewState::default();
        view.set_visualization(Visualization::Cluster);
        let i18n = Translations::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");

        atlas.to_svg(&path, &view, Language::En, &i18n).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains(r#"<circle class="mark""#));
    }

    #[test]
    fn empty_boundaries_refuse_to_render() {
        let atlas = Atlas::new(Vec::new(), BoundarySet::default());
        let view = ViewState::default();
        let i18n = Translations::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        assert!(atlas.to_svg(&path, &view, Language::En, &i18n).is_err());
    }

    #[test]
    fn ring_path_is_closed() {
        let ring = LineString(vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 0.0 },
        ]);
        let identity = |c: &Coord<f64>| (c.x, c.y);
        let mut out = String::new();
        ring_to_path(&ring, &identity, &mut out);
        assert!(out.starts_with(" M0.000,0.000"));
        assert!(out.ends_with('Z'));
    }
}

//! Binds the province collection, the name index, and the boundary
//! dataset into one read-only surface the renderer and CLI work against.

use crate::boundary::BoundarySet;
use crate::choropleth::{self, FeatureStyle};
use crate::format;
use crate::i18n::{Language, Translations};
use crate::resolver::NameIndex;
use crate::types::{MetricLayer, Province};
use crate::view::{self, ViewState};

pub struct Atlas {
    provinces: Vec<Province>,
    index: NameIndex,
    boundaries: BoundarySet,
}

/// Totals shown in the overall-statistics panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasSummary {
    pub provinces: usize,
    pub population: u64,
    pub area_km2: f64,
    /// Mean of defined densities; `None` when no province has one.
    pub avg_density: Option<f64>,
}

/// Which boundary features resolved to a province and which did not.
#[derive(Debug, Clone, Default)]
pub struct CoverageReport {
    pub matched: usize,
    pub unmatched: Vec<String>,
}

impl Atlas {
    /// The index is built once here; replacing the collection means
    /// constructing a new `Atlas`, so it can never go stale.
    pub fn new(provinces: Vec<Province>, boundaries: BoundarySet) -> Self {
        let index = NameIndex::build(&provinces);
        Self { provinces, index, boundaries }
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn boundaries(&self) -> &BoundarySet {
        &self.boundaries
    }

    pub fn resolve(&self, feature_name: &str) -> Option<&Province> {
        self.index.resolve(feature_name).map(|i| &self.provinces[i])
    }

    /// Fill and stroke for one boundary feature under the active view.
    /// Unresolved features get the neutral style and stay out of the
    /// color scale.
    pub fn style_for(&self, feature_name: &str, view: &ViewState) -> FeatureStyle {
        let Some(province) = self.resolve(feature_name) else {
            return choropleth::unknown_style();
        };

        let value = choropleth::layer_value(province, view.layer);
        let max = choropleth::layer_max(&self.provinces, view.layer);
        let score = choropleth::score(value, max);

        choropleth::feature_style(
            score,
            view.layer,
            view.is_selected(&province.id),
            view.is_hovered(&province.id),
        )
    }

    /// Tooltip for one boundary feature: localized province name plus the
    /// formatted layer value. `None` for unresolved features.
    pub fn tooltip_for(
        &self,
        feature_name: &str,
        view: &ViewState,
        lang: Language,
        i18n: &Translations,
    ) -> Option<String> {
        let province = self.resolve(feature_name)?;
        let value = choropleth::layer_value(province, view.layer);
        let label = i18n.get(view.layer.label_key(), lang);
        Some(format!(
            "{} — {}",
            province.display_name(lang),
            format::layer_value_label(label, value, view.layer),
        ))
    }

    /// Resolve every boundary feature once and report the misses.
    pub fn coverage(&self) -> CoverageReport {
        let mut report = CoverageReport::default();
        for feature in self.boundaries.features() {
            if self.index.resolve(&feature.name).is_some() {
                report.matched += 1;
            } else {
                report.unmatched.push(feature.name.clone());
            }
        }
        report
    }

    pub fn summary(&self) -> AtlasSummary {
        let densities: Vec<f64> = self.provinces.iter().filter_map(|p| p.density()).collect();
        AtlasSummary {
            provinces: self.provinces.len(),
            population: self.provinces.iter().map(|p| p.population).sum(),
            area_km2: self.provinces.iter().map(|p| p.area_km2).sum(),
            avg_density: (!densities.is_empty())
                .then(|| densities.iter().sum::<f64>() / densities.len() as f64),
        }
    }

    pub fn search(&self, query: &str) -> Vec<&Province> {
        view::filter_provinces(&self.provinces, query)
    }
}

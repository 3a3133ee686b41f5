//! Ephemeral view state for the map surface.
//!
//! Created with defaults when a view mounts, mutated synchronously by
//! user-interaction callbacks, discarded when the view unmounts. Nothing
//! here performs I/O.

use crate::types::{MetricLayer, Province, Visualization};

#[derive(Debug, Clone)]
pub struct ViewState {
    pub selected: Option<String>, // province id
    pub hovered: Option<String>,  // province id
    pub layer: MetricLayer,
    pub visualization: Visualization,
    pub year: i32,
    pub show_labels: bool,
    pub search: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected: None,
            hovered: None,
            layer: MetricLayer::Population,
            visualization: Visualization::Standard,
            year: 2024,
            show_labels: true,
            search: String::new(),
        }
    }
}

impl ViewState {
    pub fn select(&mut self, province_id: Option<String>) {
        self.selected = province_id;
    }

    pub fn hover(&mut self, province_id: Option<String>) {
        self.hovered = province_id;
    }

    pub fn set_layer(&mut self, layer: MetricLayer) {
        self.layer = layer;
    }

    pub fn set_visualization(&mut self, visualization: Visualization) {
        self.visualization = visualization;
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
    }

    pub fn is_selected(&self, province_id: &str) -> bool {
        self.selected.as_deref() == Some(province_id)
    }

    pub fn is_hovered(&self, province_id: &str) -> bool {
        self.hovered.as_deref() == Some(province_id)
    }
}

/// Provinces matching a free-text query on English name, Khmer name, or
/// capital. An empty query matches everything.
pub fn filter_provinces<'a>(provinces: &'a [Province], query: &str) -> Vec<&'a Province> {
    let query = query.trim();
    if query.is_empty() {
        return provinces.iter().collect();
    }
    let needle = query.to_lowercase();
    provinces
        .iter()
        .filter(|p| {
            p.name_en.to_lowercase().contains(&needle)
                || p.name_km.contains(query)
                || p.capital.to_lowercase().contains(&needle)
        })
        .collect()
}

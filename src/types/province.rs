use serde::{Deserialize, Serialize};

/// A province record as supplied by the external store, read-only to this
/// crate. Enrichment fields are present only for some records; consumers
/// substitute a value when they are absent (see `choropleth::layer_value`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Province {
    pub id: String,
    pub code: String,
    pub name_km: String,
    pub name_en: String,
    pub capital: String,
    #[serde(default)]
    pub capital_km: Option<String>,
    pub area_km2: f64,
    pub population: u64,

    // Optional enrichment fields.
    #[serde(default)]
    pub gdp: Option<f64>,
    #[serde(default)]
    pub education_index: Option<f64>,
    #[serde(default)]
    pub healthcare_index: Option<f64>,
    #[serde(default)]
    pub investment_amount: Option<f64>,
    #[serde(default)]
    pub infrastructure_score: Option<f64>,

    /// (lat, lon) center used for marker/cluster rendering.
    #[serde(default)]
    pub coordinates: Option<(f64, f64)>,
}

impl Province {
    /// People per km². Undefined when the area is zero or negative.
    pub fn density(&self) -> Option<f64> {
        if self.area_km2 > 0.0 {
            Some(self.population as f64 / self.area_km2)
        } else {
            None
        }
    }

    /// Display name for the given language; Chinese falls back to English
    /// since the store does not carry Chinese province names.
    pub fn display_name(&self, lang: crate::i18n::Language) -> &str {
        match lang {
            crate::i18n::Language::Km => &self.name_km,
            _ => &self.name_en,
        }
    }

    pub fn display_capital(&self, lang: crate::i18n::Language) -> &str {
        match lang {
            crate::i18n::Language::Km => self.capital_km.as_deref().unwrap_or(&self.capital),
            _ => &self.capital,
        }
    }
}

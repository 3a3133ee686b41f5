use serde::{Deserialize, Serialize};

/// A selectable metric dimension driving map coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricLayer {
    Gdp,
    Population,
    Education,      // index in percent
    Healthcare,     // index in percent
    Investment,     // USD
    Infrastructure, // unitless score
}

impl MetricLayer {
    pub fn to_str(&self) -> &'static str {
        match self {
            MetricLayer::Gdp => "gdp",
            MetricLayer::Population => "population",
            MetricLayer::Education => "education",
            MetricLayer::Healthcare => "healthcare",
            MetricLayer::Investment => "investment",
            MetricLayer::Infrastructure => "infrastructure",
        }
    }

    pub fn order() -> [MetricLayer; 6] {
        [
            MetricLayer::Gdp,
            MetricLayer::Population,
            MetricLayer::Education,
            MetricLayer::Healthcare,
            MetricLayer::Investment,
            MetricLayer::Infrastructure,
        ]
    }

    /// Message id of the short layer label in the translation table.
    pub fn label_key(&self) -> &'static str {
        match self {
            MetricLayer::Gdp => "gdp",
            MetricLayer::Population => "population",
            MetricLayer::Education => "educationIndex",
            MetricLayer::Healthcare => "healthcareIndex",
            MetricLayer::Investment => "investment",
            MetricLayer::Infrastructure => "infrastructure",
        }
    }

    /// English column header used in CSV exports.
    pub fn column_label(&self) -> &'static str {
        match self {
            MetricLayer::Gdp => "GDP",
            MetricLayer::Population => "Population",
            MetricLayer::Education => "Education Index",
            MetricLayer::Healthcare => "Healthcare Index",
            MetricLayer::Investment => "Investment",
            MetricLayer::Infrastructure => "Infrastructure Score",
        }
    }
}

/// How province values are drawn on the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visualization {
    Standard, // choropleth fill only
    Heatmap,  // choropleth with raised fill opacity
    Cluster,  // value-scaled circles at province centers
}

impl Visualization {
    pub fn to_str(&self) -> &'static str {
        match self {
            Visualization::Standard => "standard",
            Visualization::Heatmap => "heatmap",
            Visualization::Cluster => "cluster",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_names_are_stable() {
        let names: Vec<&str> = MetricLayer::order().iter().map(|l| l.to_str()).collect();
        assert_eq!(
            names,
            vec!["gdp", "population", "education", "healthcare", "investment", "infrastructure"]
        );
    }

    #[test]
    fn layer_round_trips_through_serde() {
        for layer in MetricLayer::order() {
            let json = serde_json::to_string(&layer).unwrap();
            assert_eq!(json, format!("\"{}\"", layer.to_str()));
            let back: MetricLayer = serde_json::from_str(&json).unwrap();
            assert_eq!(back, layer);
        }
    }
}

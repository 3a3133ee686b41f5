use std::hash::BuildHasher;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::types::{MetricLayer, Province};

/// Metric value for a province under the given layer.
///
/// Precedence per layer: the stored field wins; otherwise a substitute is
/// derived from population (gdp, investment) or synthesized from a seeded
/// range (education, healthcare, infrastructure). Substitution is a
/// display concern only; nothing is written back to the record.
pub fn layer_value(province: &Province, layer: MetricLayer) -> f64 {
    match layer {
        MetricLayer::Gdp => province
            .gdp
            .unwrap_or(province.population as f64 * 2000.0),
        MetricLayer::Population => province.population as f64,
        MetricLayer::Education => province
            .education_index
            .unwrap_or_else(|| placeholder(province, layer, 60.0, 90.0)),
        MetricLayer::Healthcare => province
            .healthcare_index
            .unwrap_or_else(|| placeholder(province, layer, 50.0, 90.0)),
        MetricLayer::Investment => province
            .investment_amount
            .unwrap_or(province.population as f64 * 100.0),
        MetricLayer::Infrastructure => province
            .infrastructure_score
            .unwrap_or_else(|| placeholder(province, layer, 55.0, 90.0)),
    }
}

/// Maximum layer value across the collection; 0 for an empty collection.
pub fn layer_max(provinces: &[Province], layer: MetricLayer) -> f64 {
    provinces
        .iter()
        .map(|p| layer_value(p, layer))
        .fold(0.0, f64::max)
}

/// Normalize a value against the collection maximum to [0, 100].
/// A non-positive maximum (empty collection, all-zero values) scores 0
/// rather than dividing by zero.
pub fn score(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Synthesized value in `[lo, hi)`, stable for a given province + layer.
///
/// The seed is a fixed-key hash of the province id and the layer name, so
/// repeated calls return the same number and re-renders do not flicker.
fn placeholder(province: &Province, layer: MetricLayer, lo: f64, hi: f64) -> f64 {
    let mut rng = StdRng::seed_from_u64(placeholder_seed(&province.id, layer));
    rng.random_range(lo..hi)
}

fn placeholder_seed(province_id: &str, layer: MetricLayer) -> u64 {
    // Fixed keys: the value must not change between runs.
    let state = ahash::RandomState::with_seeds(
        0x1005_0001,
        0x2009_0002,
        0x3001_0003,
        0x4002_0004,
    );
    state.hash_one((province_id, layer.to_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_province(id: &str, population: u64) -> Province {
        Province {
            id: id.into(),
            code: id.into(),
            name_km: String::new(),
            name_en: id.into(),
            capital: String::new(),
            capital_km: None,
            area_km2: 1000.0,
            population,
            gdp: None,
            education_index: None,
            healthcare_index: None,
            investment_amount: None,
            infrastructure_score: None,
            coordinates: None,
        }
    }

    #[test]
    fn stored_fields_take_precedence() {
        let mut p = make_province("p-01", 500_000);
        p.gdp = Some(1.5e9);
        p.education_index = Some(72.5);
        assert_eq!(layer_value(&p, MetricLayer::Gdp), 1.5e9);
        assert_eq!(layer_value(&p, MetricLayer::Education), 72.5);
    }

    #[test]
    fn population_derived_substitutes() {
        let p = make_province("p-01", 500_000);
        assert_eq!(layer_value(&p, MetricLayer::Gdp), 500_000.0 * 2000.0);
        assert_eq!(layer_value(&p, MetricLayer::Investment), 500_000.0 * 100.0);
        assert_eq!(layer_value(&p, MetricLayer::Population), 500_000.0);
    }

    #[test]
    fn synthesized_values_stay_in_range() {
        let p = make_province("p-01", 500_000);
        let edu = layer_value(&p, MetricLayer::Education);
        let health = layer_value(&p, MetricLayer::Healthcare);
        let infra = layer_value(&p, MetricLayer::Infrastructure);
        assert!((60.0..90.0).contains(&edu), "education {edu}");
        assert!((50.0..90.0).contains(&health), "healthcare {health}");
        assert!((55.0..90.0).contains(&infra), "infrastructure {infra}");
    }

    #[test]
    fn synthesized_values_are_deterministic_per_province_and_layer() {
        let p = make_province("p-01", 500_000);
        assert_eq!(
            layer_value(&p, MetricLayer::Education),
            layer_value(&p, MetricLayer::Education),
        );
        // Different layers and different provinces draw different values.
        let q = make_province("p-02", 500_000);
        assert_ne!(
            layer_value(&p, MetricLayer::Education),
            layer_value(&q, MetricLayer::Education),
        );
        assert_ne!(
            layer_value(&p, MetricLayer::Education),
            layer_value(&p, MetricLayer::Healthcare),
        );
    }

    #[test]
    fn score_is_bounded_and_hits_100_at_the_max() {
        let provinces = vec![make_province("a", 2_000_000), make_province("b", 500_000)];
        let max = layer_max(&provinces, MetricLayer::Population);
        assert_eq!(score(layer_value(&provinces[0], MetricLayer::Population), max), 100.0);
        assert_eq!(score(layer_value(&provinces[1], MetricLayer::Population), max), 25.0);
        for p in &provinces {
            let s = score(layer_value(p, MetricLayer::Population), max);
            assert!((0.0..=100.0).contains(&s));
        }
    }

    #[test]
    fn zero_max_guards_against_division_by_zero() {
        assert_eq!(score(0.0, 0.0), 0.0);
        assert_eq!(layer_max(&[], MetricLayer::Gdp), 0.0);
        assert_eq!(score(123.0, layer_max(&[], MetricLayer::Gdp)), 0.0);
    }
}

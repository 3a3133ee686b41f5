//! Binds boundary-feature names to province records.
//!
//! Each province is indexed twice: by its upper-cased English name and by
//! its Khmer name verbatim. Khmer script is caseless, so a single
//! upper-cased lookup serves both paths. No diacritic or whitespace
//! normalization is performed; the boundary asset is required to carry
//! names that match exactly (checked by `Atlas::coverage`).

use ahash::AHashMap;

use crate::types::Province;

/// Lookup from boundary-feature name to a position in the province slice
/// the index was built from. Rebuild whenever the collection is replaced.
#[derive(Debug, Default)]
pub struct NameIndex {
    map: AHashMap<String, usize>,
}

impl NameIndex {
    /// Index every province under two keys. At most `2 * provinces.len()`
    /// entries; an empty input yields an index that always misses.
    pub fn build(provinces: &[Province]) -> Self {
        let mut map = AHashMap::with_capacity(provinces.len() * 2);
        for (i, province) in provinces.iter().enumerate() {
            map.insert(province.name_en.to_uppercase(), i);
            map.insert(province.name_km.clone(), i);
        }
        Self { map }
    }

    /// Resolve a feature name to a province position, or `None` for an
    /// unknown feature.
    pub fn resolve(&self, feature_name: &str) -> Option<usize> {
        self.map.get(&feature_name.to_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

//! Built-in (lat, lon) centers for the 25 provinces, used to backfill
//! records that ship without coordinates. Keyed by English name,
//! case-insensitively.

pub(crate) const PROVINCE_COORDINATES: &[(&str, (f64, f64))] = &[
    ("Phnom Penh", (11.5564, 104.9282)),
    ("Siem Reap", (13.3671, 103.8448)),
    ("Battambang", (13.0957, 103.2022)),
    ("Kandal", (11.2333, 105.1167)),
    ("Kampong Cham", (12.0000, 105.4500)),
    ("Kampong Chhnang", (12.2500, 104.6667)),
    ("Kampong Speu", (11.4500, 104.5167)),
    ("Kampong Thom", (12.7167, 104.8833)),
    ("Kampot", (10.6167, 104.1833)),
    ("Banteay Meanchey", (13.7500, 102.9833)),
    ("Kep", (10.4833, 104.3167)),
    ("Koh Kong", (11.6167, 103.5333)),
    ("Kratie", (12.4833, 106.0167)),
    ("Mondulkiri", (12.4500, 107.2000)),
    ("Oddar Meanchey", (14.1667, 103.9167)),
    ("Pailin", (12.8500, 102.6167)),
    ("Preah Vihear", (13.8000, 104.9833)),
    ("Prey Veng", (11.4833, 105.3167)),
    ("Pursat", (12.5333, 103.9167)),
    ("Ratanakiri", (13.7333, 107.0000)),
    ("Sihanoukville", (10.6333, 103.5000)),
    ("Stung Treng", (13.5167, 106.0167)),
    ("Svay Rieng", (11.0833, 105.8000)),
    ("Takeo", (10.9833, 104.7833)),
    ("Preah Sihanouk", (10.6333, 103.5000)),
];

pub(crate) fn builtin_coordinates(name_en: &str) -> Option<(f64, f64)> {
    PROVINCE_COORDINATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(name_en))
        .map(|&(_, coords)| coords)
}

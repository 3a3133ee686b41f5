//! CSV export of the currently visible province set.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::choropleth::layer_value;
use crate::format::metric_cell;
use crate::i18n::Language;
use crate::io;
use crate::types::{MetricLayer, Province};

/// `cambodia_<layer>_<year>.csv`
pub fn export_filename(layer: MetricLayer, year: i32) -> String {
    format!("cambodia_{}_{year}.csv", layer.to_str())
}

/// Header and one row per province, column order
/// `Province, Capital, <LayerLabel>, Year`. The metric value follows the
/// same substitution rules as the map coloring.
pub fn export_rows(
    provinces: &[&Province],
    layer: MetricLayer,
    year: i32,
    lang: Language,
) -> (Vec<String>, Vec<Vec<String>>) {
    let header = vec![
        "Province".to_string(),
        "Capital".to_string(),
        layer.column_label().to_string(),
        "Year".to_string(),
    ];

    let rows = provinces
        .iter()
        .map(|p| {
            vec![
                p.display_name(lang).to_string(),
                p.capital.clone(),
                metric_cell(layer_value(p, layer)),
                year.to_string(),
            ]
        })
        .collect();

    (header, rows)
}

/// Write the export atomically. Fields containing commas, quotes, or
/// newlines are quoted.
pub fn write_csv(
    provinces: &[&Province],
    layer: MetricLayer,
    year: i32,
    lang: Language,
    path: &Path,
    force: bool,
) -> Result<()> {
    let (header, rows) = export_rows(provinces, layer, year, lang);

    let mut pending = io::open_for_write(path, force)?;
    writeln!(pending, "{}", encode_line(&header))?;
    for row in &rows {
        writeln!(pending, "{}", encode_line(row))?;
    }
    io::finalize_write(pending)
}

fn encode_line(fields: &[String]) -> String {
    fields.iter().map(|f| encode_field(f)).collect::<Vec<_>>().join(",")
}

fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_province(name_en: &str, capital: &str, population: u64) -> Province {
        Province {
            id: name_en.to_lowercase(),
            code: "00".into(),
            name_km: format!("{name_en} (km)"),
            name_en: name_en.into(),
            capital: capital.into(),
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
    fn filename_follows_the_pattern() {
        assert_eq!(export_filename(MetricLayer::Gdp, 2024), "cambodia_gdp_2024.csv");
        assert_eq!(
            export_filename(MetricLayer::Infrastructure, 2021),
            "cambodia_infrastructure_2021.csv"
        );
    }

    #[test]
    fn gdp_export_has_header_plus_one_row_per_province() {
        let provinces = vec![
            make_province("Kandal", "Ta Khmau", 1_195_547),
            make_province("Takeo", "Doun Kaev", 843_931),
            make_province("Kampot", "Kampot", 593_829),
        ];
        let refs: Vec<&Province> = provinces.iter().collect();
        let (header, rows) = export_rows(&refs, MetricLayer::Gdp, 2024, Language::En);

        assert_eq!(header, vec!["Province", "Capital", "GDP", "Year"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            vec!["Kandal", "Ta Khmau", &(1_195_547.0 * 2000.0).to_string(), "2024"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );
        assert!(rows.iter().all(|r| r[3] == "2024"));
    }

    #[test]
    fn csv_file_has_exactly_header_plus_rows() {
        let provinces = vec![
            make_province("Kandal", "Ta Khmau", 1_195_547),
            make_province("Takeo", "Doun Kaev", 843_931),
            make_province("Kampot", "Kampot", 593_829),
        ];
        let refs: Vec<&Province> = provinces.iter().collect();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(export_filename(MetricLayer::Gdp, 2024));
        write_csv(&refs, MetricLayer::Gdp, 2024, Language::En, &path, false).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Province,Capital,GDP,Year");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let provinces = vec![make_province("Somewhere", "Capital, The", 1000)];
        let refs: Vec<&Province> = provinces.iter().collect();
        let (_, rows) = export_rows(&refs, MetricLayer::Population, 2024, Language::En);
        assert_eq!(encode_line(&rows[0]), "Somewhere,\"Capital, The\",1000,2024");
    }

    #[test]
    fn khmer_export_uses_khmer_names() {
        let provinces = vec![make_province("Kandal", "Ta Khmau", 1000)];
        let refs: Vec<&Province> = provinces.iter().collect();
        let (_, rows) = export_rows(&refs, MetricLayer::Population, 2024, Language::Km);
        assert_eq!(rows[0][0], "Kandal (km)");
    }

    #[test]
    fn refusing_to_overwrite_without_force() {
        let provinces = vec![make_province("Kandal", "Ta Khmau", 1000)];
        let refs: Vec<&Province> = provinces.iter().collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&refs, MetricLayer::Gdp, 2024, Language::En, &path, false).unwrap();
        assert!(write_csv(&refs, MetricLayer::Gdp, 2024, Language::En, &path, false).is_err());
        assert!(write_csv(&refs, MetricLayer::Gdp, 2024, Language::En, &path, true).is_ok());
    }
}

//! Province table ingest. The external store serves provinces ordered by
//! English name; both readers reproduce that ordering and backfill
//! missing map coordinates from the built-in table.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result, bail};
use polars::{
    frame::DataFrame,
    io::SerReader,
    prelude::{CsvReader, DataType},
};

use crate::coords;
use crate::types::Province;

/// Read a province table, dispatching on the file extension
/// (`.csv` via polars, anything else as JSON).
pub fn read_provinces(path: &Path) -> Result<Vec<Province>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_provinces_csv(path),
        _ => read_provinces_json(path),
    }
}

/// Read a JSON array of province records.
pub fn read_provinces_json(path: &Path) -> Result<Vec<Province>> {
    let bytes = fs::read(path)
        .with_context(|| format!("[dataset] failed to read {}", path.display()))?;
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Vec::new()); // empty store response, not an error
    }
    let provinces: Vec<Province> = serde_json::from_slice(&bytes)
        .with_context(|| format!("[dataset] failed to parse {}", path.display()))?;
    Ok(finish_load(provinces))
}

/// Read a province table from CSV into records.
pub fn read_provinces_csv(path: &Path) -> Result<Vec<Province>> {
    let file = File::open(path)
        .with_context(|| format!("[dataset] failed to open {}", path.display()))?;
    let df = CsvReader::new(file)
        .finish()
        .with_context(|| format!("[dataset] failed to parse {}", path.display()))?;
    provinces_from_dataframe(&df)
}

fn provinces_from_dataframe(df: &DataFrame) -> Result<Vec<Province>> {
    let ids = text_column(df, "id")?;
    let codes = text_column(df, "code")?;
    let names_km = text_column(df, "name_km")?;
    let names_en = text_column(df, "name_en")?;
    let capitals = text_column(df, "capital")?;
    let capitals_km = optional_text_column(df, "capital_km")?;
    let areas = numeric_column(df, "area_km2")?;
    let populations = numeric_column(df, "population")?;

    let gdp = optional_numeric_column(df, "gdp")?;
    let education = optional_numeric_column(df, "education_index")?;
    let healthcare = optional_numeric_column(df, "healthcare_index")?;
    let investment = optional_numeric_column(df, "investment_amount")?;
    let infrastructure = optional_numeric_column(df, "infrastructure_score")?;
    let lat = optional_numeric_column(df, "lat")?;
    let lon = optional_numeric_column(df, "lng")?;

    let mut provinces = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let name_en = names_en[i].clone();
        if name_en.is_empty() {
            bail!("[dataset] row {i} has no name_en");
        }
        let population = match populations[i] {
            Some(v) if v >= 0.0 => v.round() as u64,
            _ => 0,
        };
        let coordinates = match (pick(&lat, i), pick(&lon, i)) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        };
        provinces.push(Province {
            id: ids[i].clone(),
            code: codes[i].clone(),
            name_km: names_km[i].clone(),
            name_en,
            capital: capitals[i].clone(),
            capital_km: capitals_km.as_ref().map(|c| c[i].clone()).filter(|c| !c.is_empty()),
            area_km2: areas[i].unwrap_or(0.0),
            population,
            gdp: pick(&gdp, i),
            education_index: pick(&education, i),
            healthcare_index: pick(&healthcare, i),
            investment_amount: pick(&investment, i),
            infrastructure_score: pick(&infrastructure, i),
            coordinates,
        });
    }

    Ok(finish_load(provinces))
}

/// ORDER BY name_en, plus coordinate backfill from the built-in table.
fn finish_load(mut provinces: Vec<Province>) -> Vec<Province> {
    for province in &mut provinces {
        if province.coordinates.is_none() {
            province.coordinates = coords::builtin_coordinates(&province.name_en);
        }
    }
    provinces.sort_by(|a, b| a.name_en.cmp(&b.name_en));
    provinces
}

fn pick(column: &Option<Vec<Option<f64>>>, i: usize) -> Option<f64> {
    column.as_ref().and_then(|values| values[i])
}

/// A required column read as text; numeric id/code columns are cast.
fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df
        .column(name)
        .with_context(|| format!("[dataset] missing column {name:?}"))?;
    let column = if column.dtype() != &DataType::String {
        column.cast(&DataType::String)?
    } else {
        column.clone()
    };
    let values = column
        .str()
        .with_context(|| format!("[dataset] column {name:?} is not text"))?;
    Ok(values
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect())
}

fn optional_text_column(df: &DataFrame, name: &str) -> Result<Option<Vec<String>>> {
    if df.column(name).is_err() {
        return Ok(None);
    }
    text_column(df, name).map(Some)
}

/// A required numeric column, cast to f64; nulls stay `None`.
fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("[dataset] missing column {name:?}"))?;
    let column = if column.dtype() != &DataType::Float64 {
        column.cast(&DataType::Float64)?
    } else {
        column.clone()
    };
    let values = column
        .f64()
        .with_context(|| format!("[dataset] column {name:?} is not numeric"))?;
    Ok(values.into_iter().collect())
}

fn optional_numeric_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<f64>>>> {
    if df.column(name).is_err() {
        return Ok(None);
    }
    numeric_column(df, name).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn json_load_sorts_by_english_name_and_backfills_coordinates() {
        let file = write_temp(
            r#"[
                {"id": "p-21", "code": "21", "name_km": "តាកែវ", "name_en": "Takeo",
                 "capital": "Doun Kaev", "area_km2": 3563.0, "population": 843931},
                {"id": "p-08", "code": "08", "name_km": "កណ្តាល", "name_en": "Kandal",
                 "capital": "Ta Khmau", "area_km2": 3179.0, "population": 1195547}
            ]"#,
            ".json",
        );
        let provinces = read_provinces(file.path()).unwrap();
        assert_eq!(provinces.len(), 2);
        assert_eq!(provinces[0].name_en, "Kandal");
        assert_eq!(provinces[1].name_en, "Takeo");
        // Both are in the built-in coordinate table.
        assert_eq!(provinces[1].coordinates, Some((10.9833, 104.7833)));
    }

    #[test]
    fn empty_json_file_yields_an_empty_collection() {
        let file = write_temp("  \n", ".json");
        assert!(read_provinces_json(file.path()).unwrap().is_empty());
    }

    #[test]
    fn csv_load_reads_required_and_optional_columns() {
        let file = write_temp(
            "id,code,name_km,name_en,capital,area_km2,population,gdp\n\
             p-12,12,ភ្នំពេញ,Phnom Penh,Phnom Penh,679.0,2281951,9500000000\n\
             p-21,21,តាកែវ,Takeo,Doun Kaev,3563.0,843931,\n",
            ".csv",
        );
        let provinces = read_provinces(file.path()).unwrap();
        assert_eq!(provinces.len(), 2);
        assert_eq!(provinces[0].name_en, "Phnom Penh");
        assert_eq!(provinces[0].gdp, Some(9.5e9));
        assert_eq!(provinces[1].gdp, None);
        assert_eq!(provinces[1].population, 843931);
    }

    #[test]
    fn csv_without_an_optional_column_still_loads() {
        let file = write_temp(
            "id,code,name_km,name_en,capital,area_km2,population\n\
             p-09,09,កោះកុង,Koh Kong,Khemarak Phoumin,11160.0,123618\n",
            ".csv",
        );
        let provinces = read_provinces_csv(file.path()).unwrap();
        assert_eq!(provinces[0].education_index, None);
        assert_eq!(provinces[0].coordinates, Some((11.6167, 103.5333)));
    }

    #[test]
    fn csv_missing_a_required_column_fails_with_context() {
        let file = write_temp("id,code,name_km,name_en\np-01,01,x,X\n", ".csv");
        let err = read_provinces_csv(file.path()).unwrap_err();
        assert!(err.to_string().contains("missing column"));
    }
}

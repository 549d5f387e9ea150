//! Loading of the crop, rainfall and temperature tables.

use crate::config::DataConfig;
use crate::error::{AgriError, Result};
use crate::vocabulary::Vocabulary;
use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

pub const STATE: &str = "state";
pub const YEAR: &str = "year";
pub const CROP_TYPE: &str = "crop type";
pub const PRODUCTION: &str = "production volume";
pub const RAINFALL: &str = "rainfall mm";
pub const TEMPERATURE: &str = "avg temperature";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Crop,
    Rainfall,
    Temperature,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Crop, Table::Rainfall, Table::Temperature];

    pub fn label(&self) -> &'static str {
        match self {
            Table::Crop => "Crop",
            Table::Rainfall => "Rainfall",
            Table::Temperature => "Temperature",
        }
    }

    /// Columns (after normalization) the analyzers read from this table.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Table::Crop => &[STATE, YEAR, CROP_TYPE, PRODUCTION],
            Table::Rainfall => &[STATE, YEAR, RAINFALL],
            Table::Temperature => &[STATE, YEAR, TEMPERATURE],
        }
    }
}

/// The three tables plus the vocabulary derived from them.
///
/// Built once per process and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AgriDataset {
    crop: DataFrame,
    rainfall: DataFrame,
    temperature: DataFrame,
    vocabulary: Vocabulary,
}

impl AgriDataset {
    /// Read the three CSV files named by `config`.
    pub fn load(config: &DataConfig) -> Result<Self> {
        info!("Loading agri-climate tables from {}", config.data_dir.display());
        let crop = read_csv(Table::Crop, &config.crop_path())?;
        let rainfall = read_csv(Table::Rainfall, &config.rainfall_path())?;
        let temperature = read_csv(Table::Temperature, &config.temperature_path())?;
        Self::from_frames(crop, rainfall, temperature)
    }

    /// Assemble a dataset from frames already in memory.
    ///
    /// Column names are normalized, required columns checked, and the
    /// state/crop vocabulary derived.
    pub fn from_frames(crop: DataFrame, rainfall: DataFrame, temperature: DataFrame) -> Result<Self> {
        let crop = prepare(Table::Crop, crop)?;
        let rainfall = prepare(Table::Rainfall, rainfall)?;
        let temperature = prepare(Table::Temperature, temperature)?;

        let mut states = distinct_strings(&crop, STATE)?;
        states.extend(distinct_strings(&rainfall, STATE)?);
        states.extend(distinct_strings(&temperature, STATE)?);
        let crops = distinct_strings(&crop, CROP_TYPE)?;

        let vocabulary = Vocabulary::new(states, crops);
        info!(
            "Vocabulary ready: {} states, {} crops",
            vocabulary.states().len(),
            vocabulary.crops().len()
        );

        Ok(Self {
            crop,
            rainfall,
            temperature,
            vocabulary,
        })
    }

    pub fn table(&self, table: Table) -> &DataFrame {
        match table {
            Table::Crop => &self.crop,
            Table::Rainfall => &self.rainfall,
            Table::Temperature => &self.temperature,
        }
    }

    pub fn crop(&self) -> &DataFrame {
        &self.crop
    }

    pub fn rainfall(&self) -> &DataFrame {
        &self.rainfall
    }

    pub fn temperature(&self) -> &DataFrame {
        &self.temperature
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn record_count(&self, table: Table) -> usize {
        self.table(table).height()
    }

    /// Smallest and largest year across all three tables.
    pub fn year_span(&self) -> Result<Option<(i64, i64)>> {
        let mut span: Option<(i64, i64)> = None;
        for table in Table::ALL {
            let years = self.table(table).column(YEAR)?.cast(&DataType::Int64)?;
            let years = years.i64()?;
            if let (Some(lo), Some(hi)) = (years.min(), years.max()) {
                span = Some(match span {
                    Some((min, max)) => (min.min(lo), max.max(hi)),
                    None => (lo, hi),
                });
            }
        }
        Ok(span)
    }
}

/// Lowercase, underscores to spaces: `Crop_Type` -> `crop type`.
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase().replace('_', " ")
}

fn read_csv(table: Table, path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(AgriError::MissingFile(path.display().to_string()));
    }

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|e| AgriError::Load {
            table: table.label().to_string(),
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    info!(
        "Loaded {} table: {} rows, {} columns",
        table.label(),
        df.height(),
        df.width()
    );
    Ok(df)
}

fn prepare(table: Table, mut df: DataFrame) -> Result<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name))
        .collect();
    df.set_column_names(names.as_slice())?;
    debug!("{} columns: {:?}", table.label(), names);

    for column in table.required_columns() {
        if !names.iter().any(|name| name == column) {
            return Err(AgriError::MissingColumn {
                table: table.label().to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(df)
}

fn distinct_strings(df: &DataFrame, column: &str) -> Result<BTreeSet<String>> {
    let values = df.column(column)?.cast(&DataType::String)?;
    let distinct = values
        .str()?
        .into_iter()
        .flatten()
        .map(|value| value.to_string())
        .collect();
    Ok(distinct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames() -> (DataFrame, DataFrame, DataFrame) {
        let crop = df![
            "State" => ["Punjab", "Karnataka"],
            "Year" => [2020, 2021],
            "Crop_Type" => ["Wheat", "Rice"],
            "Production_Volume" => [10.0, 20.0],
        ]
        .unwrap();
        let rainfall = df![
            "State" => ["Kerala"],
            "Year" => [2016],
            "Rainfall_MM" => [3000.0],
        ]
        .unwrap();
        let temperature = df![
            "STATE" => ["Punjab"],
            "YEAR" => [2024],
            "Avg_Temperature" => [24.5],
        ]
        .unwrap();
        (crop, rainfall, temperature)
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("Crop_Type"), "crop type");
        assert_eq!(normalize_column_name("Rainfall_MM"), "rainfall mm");
        assert_eq!(normalize_column_name("state"), "state");
    }

    #[test]
    fn test_from_frames_normalizes_and_builds_vocabulary() {
        let (crop, rainfall, temperature) = frames();
        let dataset = AgriDataset::from_frames(crop, rainfall, temperature).unwrap();

        assert!(dataset.crop().column(CROP_TYPE).is_ok());
        assert!(dataset.rainfall().column(RAINFALL).is_ok());
        assert!(dataset.temperature().column(TEMPERATURE).is_ok());

        assert_eq!(dataset.vocabulary().states(), &["Karnataka", "Kerala", "Punjab"]);
        assert_eq!(dataset.vocabulary().crops(), &["Rice", "Wheat"]);
        assert_eq!(dataset.record_count(Table::Crop), 2);
    }

    #[test]
    fn test_year_span_covers_all_tables() {
        let (crop, rainfall, temperature) = frames();
        let dataset = AgriDataset::from_frames(crop, rainfall, temperature).unwrap();
        assert_eq!(dataset.year_span().unwrap(), Some((2016, 2024)));
    }

    #[test]
    fn test_missing_required_column_is_reported() {
        let (crop, _, temperature) = frames();
        let rainfall = df![
            "State" => ["Kerala"],
            "Year" => [2016],
        ]
        .unwrap();

        match AgriDataset::from_frames(crop, rainfall, temperature) {
            Err(AgriError::MissingColumn { table, column }) => {
                assert_eq!(table, "Rainfall");
                assert_eq!(column, RAINFALL);
            }
            other => panic!("expected MissingColumn, got {:?}", other.map(|_| ())),
        }
    }
}

//! Per-domain analyzers.
//!
//! Each analyzer filters the relevant table(s) by the extracted states (and
//! years, when any were extracted), averages the measurement column and
//! renders a Markdown answer. Missing data never fails: it becomes a
//! "No ... data available" line.

use crate::dataset::{AgriDataset, CROP_TYPE, PRODUCTION, RAINFALL, STATE, TEMPERATURE, YEAR};
use crate::error::Result;
use crate::vocabulary::Extraction;
use itertools::Itertools;
use polars::prelude::*;
use std::cmp::Ordering;

pub const SPECIFY_STATES_TO_COMPARE: &str = "Please specify states to compare.";
pub const SPECIFY_STATES_TO_ANALYZE: &str = "Please specify states to analyze.";
pub const SPECIFY_TWO_STATES: &str = "Please specify at least 2 states for comparison.";

/// Number of crops listed when no crop was named.
pub const TOP_CROPS: usize = 3;

pub fn compare_rainfall(dataset: &AgriDataset, extraction: &Extraction) -> Result<String> {
    if extraction.states.is_empty() {
        return Ok(SPECIFY_STATES_TO_COMPARE.to_string());
    }

    let rainfall = dataset.rainfall();
    let mut result = String::from("## 🌧️ Rainfall Comparison\n\n");
    for state in &extraction.states {
        let rows = scoped(rainfall, state_is(state), &extraction.years)?;
        match column_mean(&rows, RAINFALL)? {
            Some(avg) => {
                result.push_str(&format!("**{}**: Average rainfall = {:.2} mm\n\n", state, avg))
            }
            None => result.push_str(&format!("**{}**: No rainfall data available\n\n", state)),
        }
    }

    result.push_str(&format!(
        "*Source: {} records from India Meteorological Department*",
        rainfall.height()
    ));
    Ok(result)
}

pub fn analyze_crop_production(dataset: &AgriDataset, extraction: &Extraction) -> Result<String> {
    if extraction.states.is_empty() {
        return Ok(SPECIFY_STATES_TO_ANALYZE.to_string());
    }

    let crop = dataset.crop();
    let mut result = String::from("## 🌾 Crop Production Analysis\n\n");
    for state in &extraction.states {
        let rows = scoped(crop, state_is(state), &extraction.years)?;
        if rows.height() == 0 {
            result.push_str(&format!("**{}**: No crop data available\n\n", state));
            continue;
        }

        if extraction.crops.is_empty() {
            result.push_str(&format!("**{}** - Top {} crops by production:\n", state, TOP_CROPS));
            for (name, production) in top_crops(&rows, TOP_CROPS)? {
                result.push_str(&format!("  - {}: {:.2} tons\n", name, production));
            }
        } else {
            result.push_str(&format!("**{}** - Production for specified crops:\n", state));
            for name in &extraction.crops {
                let crop_rows = scoped(&rows, crop_is(name), &[])?;
                if let Some(production) = column_mean(&crop_rows, PRODUCTION)? {
                    result.push_str(&format!("  - {}: {:.2} tons\n", name, production));
                }
            }
        }
        result.push('\n');
    }

    result.push_str(&format!(
        "*Source: {} records from Ministry of Agriculture*",
        crop.height()
    ));
    Ok(result)
}

pub fn analyze_temperature(dataset: &AgriDataset, extraction: &Extraction) -> Result<String> {
    if extraction.states.is_empty() {
        return Ok(SPECIFY_STATES_TO_ANALYZE.to_string());
    }

    let temperature = dataset.temperature();
    let mut result = String::from("## 🌡️ Temperature Analysis\n\n");
    for state in &extraction.states {
        let rows = scoped(temperature, state_is(state), &extraction.years)?;
        match column_mean(&rows, TEMPERATURE)? {
            Some(avg) => result.push_str(&format!(
                "**{}**: Average temperature = {:.2}°C\n\n",
                state, avg
            )),
            None => result.push_str(&format!("**{}**: No temperature data available\n\n", state)),
        }
    }

    result.push_str(&format!(
        "*Source: {} records from India Meteorological Department*",
        temperature.height()
    ));
    Ok(result)
}

/// Rainfall and temperature side by side for two or more states, plus crop
/// production when crops were named. States without data are left out of a
/// section rather than reported.
pub fn cross_domain_analysis(dataset: &AgriDataset, extraction: &Extraction) -> Result<String> {
    if extraction.states.len() < 2 {
        return Ok(SPECIFY_TWO_STATES.to_string());
    }

    let years = &extraction.years;
    let mut result = String::from("## 📊 Cross-Domain Analysis\n\n");

    result.push_str("### Rainfall Comparison\n");
    for state in &extraction.states {
        let rows = scoped(dataset.rainfall(), state_is(state), years)?;
        if let Some(avg) = column_mean(&rows, RAINFALL)? {
            result.push_str(&format!("- **{}**: {:.2} mm\n", state, avg));
        }
    }
    result.push('\n');

    result.push_str("### Temperature Comparison\n");
    for state in &extraction.states {
        let rows = scoped(dataset.temperature(), state_is(state), years)?;
        if let Some(avg) = column_mean(&rows, TEMPERATURE)? {
            result.push_str(&format!("- **{}**: {:.2}°C\n", state, avg));
        }
    }
    result.push('\n');

    if !extraction.crops.is_empty() {
        result.push_str("### Crop Production\n");
        for name in &extraction.crops {
            result.push_str(&format!("**{}**:\n", name));
            for state in &extraction.states {
                let rows = scoped(dataset.crop(), state_is(state).and(crop_is(name)), years)?;
                if let Some(production) = column_mean(&rows, PRODUCTION)? {
                    result.push_str(&format!("  - {}: {:.2} tons\n", state, production));
                }
            }
            result.push('\n');
        }
    }

    result.push_str("*Sources: Integrated data from Ministry of Agriculture & IMD*");
    Ok(result)
}

fn state_is(state: &str) -> Expr {
    col(STATE).cast(DataType::String).eq(lit(state))
}

fn crop_is(crop: &str) -> Expr {
    col(CROP_TYPE).cast(DataType::String).eq(lit(crop))
}

/// Membership in `years`, or `None` when no year restriction applies.
fn year_in(years: &[i32]) -> Option<Expr> {
    years
        .iter()
        .map(|year| col(YEAR).cast(DataType::Int64).eq(lit(i64::from(*year))))
        .reduce(|acc, expr| acc.or(expr))
}

fn scoped(frame: &DataFrame, predicate: Expr, years: &[i32]) -> Result<DataFrame> {
    let predicate = match year_in(years) {
        Some(years) => predicate.and(years),
        None => predicate,
    };
    Ok(frame.clone().lazy().filter(predicate).collect()?)
}

fn column_mean(rows: &DataFrame, column: &str) -> Result<Option<f64>> {
    if rows.height() == 0 {
        return Ok(None);
    }
    let values = rows.column(column)?.cast(&DataType::Float64)?;
    Ok(values.mean())
}

/// Mean production per crop, highest first. Ties keep ascending crop-name order.
fn top_crops(rows: &DataFrame, n: usize) -> Result<Vec<(String, f64)>> {
    let grouped = rows
        .clone()
        .lazy()
        .group_by([col(CROP_TYPE)])
        .agg([col(PRODUCTION).cast(DataType::Float64).mean()])
        .collect()?;

    let names = grouped.column(CROP_TYPE)?.cast(&DataType::String)?;
    let means = grouped.column(PRODUCTION)?.cast(&DataType::Float64)?;

    let mut ranked: Vec<(String, f64)> = names
        .str()?
        .into_iter()
        .zip(means.f64()?.into_iter())
        .filter_map(|(name, mean)| Some((name?.to_string(), mean?)))
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .collect();

    // stable: equal means stay in name order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    Ok(ranked)
}

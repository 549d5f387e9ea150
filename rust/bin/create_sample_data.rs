use agri_qa::config::{DEFAULT_CROP_FILE, DEFAULT_RAINFALL_FILE, DEFAULT_TEMPERATURE_FILE};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};

const STATES: [&str; 10] = [
    "Andhra Pradesh",
    "Bihar",
    "Gujarat",
    "Karnataka",
    "Kerala",
    "Maharashtra",
    "Punjab",
    "Tamil Nadu",
    "Uttar Pradesh",
    "West Bengal",
];

const CROPS: [&str; 6] = ["Cotton", "Maize", "Pulses", "Rice", "Sugarcane", "Wheat"];

const FIRST_YEAR: i32 = 2015;
const LAST_YEAR: i32 = 2024;

fn write_csv(path: &Path, df: &mut DataFrame) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = fs::File::create(path)?;
    CsvWriter::new(&mut file).finish(df)?;
    println!("✅ Created {} ({} rows)", path.display(), df.height());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));
    fs::create_dir_all(&out_dir)?;

    // Fixed seed so every run produces the same tables
    let mut rng = StdRng::seed_from_u64(2015);

    let mut crop_states = Vec::new();
    let mut crop_years = Vec::new();
    let mut crop_types = Vec::new();
    let mut production = Vec::new();

    let mut climate_states = Vec::new();
    let mut climate_years = Vec::new();
    let mut rainfall = Vec::new();
    let mut temperature = Vec::new();

    for (i, state) in STATES.iter().enumerate() {
        // Per-state baseline keeps states distinguishable year over year
        let base_rain = 700.0 + 250.0 * (i % 5) as f64;
        let base_temp = 22.0 + 1.1 * (i % 6) as f64;

        for year in FIRST_YEAR..=LAST_YEAR {
            climate_states.push(state.to_string());
            climate_years.push(year);
            rainfall.push(round2(base_rain + rng.gen_range(-150.0..150.0)));
            temperature.push(round2(base_temp + rng.gen_range(-1.5..1.5)));

            for (j, crop) in CROPS.iter().enumerate() {
                let base = 500.0 + 400.0 * ((i + j) % CROPS.len()) as f64;
                crop_states.push(state.to_string());
                crop_years.push(year);
                crop_types.push(crop.to_string());
                production.push(round2(base + rng.gen_range(0.0..250.0)));
            }
        }
    }

    let mut crop_df = df![
        "State" => crop_states,
        "Year" => crop_years,
        "Crop_Type" => crop_types,
        "Production_Volume" => production,
    ]?;
    let mut rainfall_df = df![
        "State" => climate_states.clone(),
        "Year" => climate_years.clone(),
        "Rainfall_mm" => rainfall,
    ]?;
    let mut temperature_df = df![
        "State" => climate_states,
        "Year" => climate_years,
        "Avg_Temperature" => temperature,
    ]?;

    write_csv(&out_dir.join(DEFAULT_CROP_FILE), &mut crop_df)?;
    write_csv(&out_dir.join(DEFAULT_RAINFALL_FILE), &mut rainfall_df)?;
    write_csv(&out_dir.join(DEFAULT_TEMPERATURE_FILE), &mut temperature_df)?;

    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

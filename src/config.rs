//! Data file configuration.
//!
//! Resolution order for the data directory: explicit path (CLI), then
//! `AGRI_QA_DATA_DIR`, then the current directory. File names default to the
//! names the dashboard always shipped with and can be overridden one by one.

use std::env;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "AGRI_QA_DATA_DIR";
pub const CROP_FILE_ENV: &str = "AGRI_QA_CROP_FILE";
pub const RAINFALL_FILE_ENV: &str = "AGRI_QA_RAINFALL_FILE";
pub const TEMPERATURE_FILE_ENV: &str = "AGRI_QA_TEMPERATURE_FILE";

pub const DEFAULT_CROP_FILE: &str = "crop_production.csv";
pub const DEFAULT_RAINFALL_FILE: &str = "rainfall_data.csv";
pub const DEFAULT_TEMPERATURE_FILE: &str = "temperature_data.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    pub crop_file: String,
    pub rainfall_file: String,
    pub temperature_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl DataConfig {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
            crop_file: DEFAULT_CROP_FILE.to_string(),
            rainfall_file: DEFAULT_RAINFALL_FILE.to_string(),
            temperature_file: DEFAULT_TEMPERATURE_FILE.to_string(),
        }
    }

    /// Build from the environment, letting `data_dir` win over `AGRI_QA_DATA_DIR`.
    pub fn from_env(data_dir: Option<PathBuf>) -> Self {
        let dir = data_dir
            .or_else(|| env::var(DATA_DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = Self::in_dir(dir);
        if let Ok(name) = env::var(CROP_FILE_ENV) {
            config.crop_file = name;
        }
        if let Ok(name) = env::var(RAINFALL_FILE_ENV) {
            config.rainfall_file = name;
        }
        if let Ok(name) = env::var(TEMPERATURE_FILE_ENV) {
            config.temperature_file = name;
        }
        config
    }

    pub fn crop_path(&self) -> PathBuf {
        self.data_dir.join(&self.crop_file)
    }

    pub fn rainfall_path(&self) -> PathBuf {
        self.data_dir.join(&self.rainfall_file)
    }

    pub fn temperature_path(&self) -> PathBuf {
        self.data_dir.join(&self.temperature_file)
    }
}

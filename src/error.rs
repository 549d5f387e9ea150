use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgriError {
    #[error("Data file not found: {0}")]
    MissingFile(String),

    #[error("Failed to load {table} table from {path}: {message}")]
    Load {
        table: String,
        path: String,
        message: String,
    },

    #[error("{table} table is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, AgriError>;

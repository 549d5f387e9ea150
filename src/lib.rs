pub mod analyzers;
pub mod assistant;
pub mod config;
pub mod dataset;
pub mod error;
pub mod presentation;
pub mod router;
pub mod vocabulary;

pub use assistant::{Answer, QaAssistant};
pub use config::DataConfig;
pub use dataset::{AgriDataset, Table};
pub use error::{AgriError, Result};
pub use router::Route;
pub use vocabulary::{Extraction, Vocabulary};

//! Question answering over the loaded agri-climate tables.

use crate::config::DataConfig;
use crate::dataset::AgriDataset;
use crate::error::Result;
use crate::router::Route;
use serde::Serialize;
use tracing::info;

/// Answer to one question, with the entities that drove it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub question: String,
    pub route: Route,
    pub states: Vec<String>,
    pub crops: Vec<String>,
    pub years: Vec<i32>,
    /// Rendered Markdown
    pub markdown: String,
}

pub struct QaAssistant {
    dataset: AgriDataset,
}

impl QaAssistant {
    pub fn new(dataset: AgriDataset) -> Self {
        Self { dataset }
    }

    pub fn load(config: &DataConfig) -> Result<Self> {
        Ok(Self::new(AgriDataset::load(config)?))
    }

    pub fn dataset(&self) -> &AgriDataset {
        &self.dataset
    }

    /// Extract entities, pick an analyzer and render its answer.
    pub fn ask(&self, question: &str) -> Result<Answer> {
        let extraction = self.dataset.vocabulary().extract(question);
        let route = Route::for_question(question);
        info!(
            "Routing to {:?} (states={:?}, crops={:?}, years={:?})",
            route, extraction.states, extraction.crops, extraction.years
        );

        let markdown = route.run(&self.dataset, &extraction)?;
        Ok(Answer {
            question: question.to_string(),
            route,
            states: extraction.states,
            crops: extraction.crops,
            years: extraction.years,
            markdown,
        })
    }
}

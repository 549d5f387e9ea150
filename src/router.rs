use crate::analyzers;
use crate::dataset::AgriDataset;
use crate::error::Result;
use crate::vocabulary::Extraction;
use serde::Serialize;

/// Which analyzer answers a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Rainfall,
    CropProduction,
    Temperature,
    CrossDomain,
}

impl Route {
    /// First-match dispatch on trigger words in the lower-cased question.
    pub fn for_question(question: &str) -> Self {
        let q = question.to_lowercase();
        let mentions = |word: &str| q.contains(word);

        if mentions("compare") || mentions("comparison") {
            if mentions("rainfall") && mentions("temperature") {
                Route::CrossDomain
            } else if mentions("rainfall") {
                Route::Rainfall
            } else if mentions("temperature") {
                Route::Temperature
            } else {
                Route::CrossDomain
            }
        } else if mentions("crop") || mentions("production") {
            Route::CropProduction
        } else if mentions("temperature") {
            Route::Temperature
        } else if mentions("rainfall") {
            Route::Rainfall
        } else {
            Route::CrossDomain
        }
    }

    pub fn run(&self, dataset: &AgriDataset, extraction: &Extraction) -> Result<String> {
        match self {
            Route::Rainfall => analyzers::compare_rainfall(dataset, extraction),
            Route::CropProduction => analyzers::analyze_crop_production(dataset, extraction),
            Route::Temperature => analyzers::analyze_temperature(dataset, extraction),
            Route::CrossDomain => analyzers::cross_domain_analysis(dataset, extraction),
        }
    }
}

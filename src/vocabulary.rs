//! Fixed-vocabulary extraction of states, crops and years from a question.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref YEAR_PATTERN: Regex = Regex::new(r"\b(20[0-9]{2})\b").unwrap();
}

/// Known states and crops, kept in ascending order.
///
/// The order is the canonical order of extraction results: matches come back
/// sorted by vocabulary position, not by where they appear in the question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    states: Vec<String>,
    crops: Vec<String>,
}

/// Entities found in one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub states: Vec<String>,
    pub crops: Vec<String>,
    pub years: Vec<i32>,
}

impl Vocabulary {
    pub fn new<S, C>(states: S, crops: C) -> Self
    where
        S: IntoIterator<Item = String>,
        C: IntoIterator<Item = String>,
    {
        let states: BTreeSet<String> = states.into_iter().collect();
        let crops: BTreeSet<String> = crops.into_iter().collect();
        Self {
            states: states.into_iter().collect(),
            crops: crops.into_iter().collect(),
        }
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn crops(&self) -> &[String] {
        &self.crops
    }

    /// Every known state whose name occurs in the question, ignoring case.
    ///
    /// No disambiguation: if one state name contains another, both match.
    pub fn extract_states(&self, question: &str) -> Vec<String> {
        find_terms(&self.states, question)
    }

    /// Every known crop whose name occurs in the question, ignoring case.
    pub fn extract_crops(&self, question: &str) -> Vec<String> {
        find_terms(&self.crops, question)
    }

    pub fn extract(&self, question: &str) -> Extraction {
        Extraction {
            states: self.extract_states(question),
            crops: self.extract_crops(question),
            years: extract_years(question),
        }
    }
}

/// Years 2000-2099 written as standalone 4-digit tokens, in order of
/// appearance. Duplicates are kept.
pub fn extract_years(question: &str) -> Vec<i32> {
    YEAR_PATTERN
        .captures_iter(question)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .collect()
}

fn find_terms(terms: &[String], question: &str) -> Vec<String> {
    let haystack = question.to_lowercase();
    terms
        .iter()
        .filter(|term| haystack.contains(&term.to_lowercase()))
        .cloned()
        .collect()
}

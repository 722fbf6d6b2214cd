use crate::aggregate::{self, IndexSummary};
use crate::criteria::{self, PatternBank, Signals};
use crate::types::criterion::{CriterionId, Score};
use crate::types::scoring::{AggregationSettings, ScoreCard};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Result of scoring one text. Serializes with `criteria`, `signals` and the
/// index fields (`index_raw`, `index_adjusted`, `interpretation`, ...) at the
/// top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub criteria: BTreeMap<CriterionId, Score>,
    pub signals: BTreeMap<CriterionId, Signals>,
    #[serde(flatten)]
    pub index: IndexSummary,
}

impl Evaluation {
    pub fn score(&self, id: CriterionId) -> Score {
        self.criteria
            .get(&id)
            .copied()
            .unwrap_or_else(|| id.absent_score())
    }
}

pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

pub fn evaluate_text(text: &str, bank: &PatternBank, settings: &AggregationSettings) -> Evaluation {
    let normalized = normalize(text);
    let outcomes = criteria::score_all(bank, &normalized);

    let mut criteria = BTreeMap::new();
    let mut signals = BTreeMap::new();
    for (id, outcome) in outcomes {
        criteria.insert(id, outcome.score);
        signals.insert(id, outcome.signals);
    }

    let index = aggregate::aggregate(&ScoreCard::from_scores(&criteria), settings);
    Evaluation {
        criteria,
        signals,
        index,
    }
}

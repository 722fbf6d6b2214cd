//! Incongruence detection seam. Reports flow to rendering unmodified.

use crate::evaluate::Evaluation;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Incongruence {
    pub kind: String,
    pub paragraphs: Vec<usize>,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excerpts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IncongruenceReport(pub Vec<Incongruence>);

impl IncongruenceReport {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incongruence> {
        self.0.iter()
    }
}

pub trait IncongruenceDetector {
    fn detect(&self, text: &str, evaluation: &Evaluation) -> IncongruenceReport;
}

/// Detector used when no incongruence engine is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDetector;

impl IncongruenceDetector for NoDetector {
    fn detect(&self, _text: &str, _evaluation: &Evaluation) -> IncongruenceReport {
        IncongruenceReport::default()
    }
}

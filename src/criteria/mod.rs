//! Criterion evaluator bank.
//!
//! Every criterion owns one or more named pattern groups. Scoring happens in
//! two steps: a [`PatternTable`] counts matches per group into [`Signals`], and
//! the criterion's step function maps those counts to a bounded score. The
//! step functions never see the text, so they can be exercised directly.

pub mod bias;
pub mod evidence;
pub mod experience;
pub mod fallacy;
pub mod hypotheses;
pub mod inference;
pub mod integrity;
pub mod linkage;
pub mod standard;

use crate::error::Result;
use crate::types::criterion::{CriterionId, Score};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// A named group of regex sources, as written in the rule tables.
pub type GroupSource = (&'static str, &'static [&'static str]);

#[derive(Debug, Clone, Copy)]
pub struct CriterionRule {
    pub id: CriterionId,
    pub groups: &'static [GroupSource],
    pub score: fn(&Signals) -> Score,
}

pub const RULES: [CriterionRule; 12] = [
    CriterionRule {
        id: CriterionId::C1,
        groups: evidence::C1_GROUPS,
        score: evidence::score_c1,
    },
    CriterionRule {
        id: CriterionId::C2,
        groups: evidence::C2_GROUPS,
        score: evidence::score_c2,
    },
    CriterionRule {
        id: CriterionId::C3,
        groups: linkage::C3_GROUPS,
        score: linkage::score_c3,
    },
    CriterionRule {
        id: CriterionId::C4,
        groups: linkage::C4_GROUPS,
        score: linkage::score_c4,
    },
    CriterionRule {
        id: CriterionId::C5,
        groups: hypotheses::GROUPS,
        score: hypotheses::score,
    },
    CriterionRule {
        id: CriterionId::C6,
        groups: standard::C6_GROUPS,
        score: standard::score_c6,
    },
    CriterionRule {
        id: CriterionId::C7,
        groups: standard::C7_GROUPS,
        score: standard::score_c7,
    },
    CriterionRule {
        id: CriterionId::C8,
        groups: experience::GROUPS,
        score: experience::score,
    },
    CriterionRule {
        id: CriterionId::C9,
        groups: bias::GROUPS,
        score: bias::score,
    },
    CriterionRule {
        id: CriterionId::C10,
        groups: fallacy::GROUPS,
        score: fallacy::score,
    },
    CriterionRule {
        id: CriterionId::C11,
        groups: inference::GROUPS,
        score: inference::score,
    },
    CriterionRule {
        id: CriterionId::C12,
        groups: integrity::GROUPS,
        score: integrity::score,
    },
];

/// Match counts per pattern group for a single criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Signals(BTreeMap<String, usize>);

impl Signals {
    pub fn get(&self, group: &str) -> usize {
        self.0.get(group).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    #[cfg(test)]
    pub fn with(mut self, group: &str, count: usize) -> Self {
        self.0.insert(group.to_string(), count);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

#[derive(Debug, Clone)]
pub struct PatternGroup {
    pub name: String,
    pub patterns: Vec<Regex>,
}

impl PatternGroup {
    pub fn count(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    pub groups: Vec<PatternGroup>,
}

impl PatternTable {
    pub fn from_sources(sources: &[GroupSource]) -> Result<Self> {
        let groups = sources
            .iter()
            .map(|(name, patterns)| {
                let patterns = patterns
                    .iter()
                    .map(|source| compile(source))
                    .collect::<Result<Vec<_>>>()?;
                Ok(PatternGroup {
                    name: (*name).to_string(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { groups })
    }

    pub fn signals(&self, text: &str) -> Signals {
        Signals(
            self.groups
                .iter()
                .map(|group| (group.name.clone(), group.count(text)))
                .collect(),
        )
    }
}

fn compile(source: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(source).case_insensitive(true).build()?)
}

/// The pattern tables for all twelve criteria.
#[derive(Debug, Clone, Default)]
pub struct PatternBank {
    tables: BTreeMap<CriterionId, PatternTable>,
}

static BUILTIN_BANK: Lazy<PatternBank> =
    Lazy::new(|| PatternBank::builtin().expect("builtin pattern tables must compile"));

impl PatternBank {
    pub fn builtin() -> Result<Self> {
        let tables = RULES
            .iter()
            .map(|rule| Ok((rule.id, PatternTable::from_sources(rule.groups)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { tables })
    }

    /// Process-wide builtin bank, compiled on first use.
    pub fn shared() -> &'static PatternBank {
        &BUILTIN_BANK
    }

    #[cfg(test)]
    pub fn with_table(mut self, id: CriterionId, table: PatternTable) -> Self {
        self.tables.insert(id, table);
        self
    }

    pub fn table(&self, id: CriterionId) -> Option<&PatternTable> {
        self.tables.get(&id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriterionOutcome {
    pub score: Score,
    pub signals: Signals,
}

/// Scores every criterion against already-normalized text.
pub fn score_all(bank: &PatternBank, text: &str) -> BTreeMap<CriterionId, CriterionOutcome> {
    RULES
        .iter()
        .map(|rule| {
            let signals = bank
                .table(rule.id)
                .map(|table| table.signals(text))
                .unwrap_or_default();
            let score = (rule.score)(&signals);
            debug!(criterion = %rule.id, score, signals = signals.total(), "criterion scored");
            (rule.id, CriterionOutcome { score, signals })
        })
        .collect()
}

use crate::error::{IciError, Result};
use crate::types::criterion::{CriterionId, Score};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Alternative hypotheses (C5) carry the largest share.
pub const DEFAULT_WEIGHTS: [f64; 12] = [
    0.10, 0.10, 0.07, 0.07, 0.16, 0.10, 0.10, 0.10, 0.07, 0.06, 0.04, 0.03,
];

pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable([f64; 12]);

impl Default for WeightTable {
    fn default() -> Self {
        Self(DEFAULT_WEIGHTS)
    }
}

impl WeightTable {
    pub fn new(weights: [f64; 12]) -> Self {
        Self(weights)
    }

    pub fn get(&self, id: CriterionId) -> f64 {
        self.0[id.index()]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CriterionId, f64)> + '_ {
        CriterionId::ALL.into_iter().map(|id| (id, self.get(id)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationScheme {
    #[default]
    Weighted,
    Mean,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyRule {
    pub threshold: f64,
    pub max: f64,
}

impl Default for PenaltyRule {
    fn default() -> Self {
        Self {
            threshold: 40.0,
            max: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregationSettings {
    pub scheme: AggregationScheme,
    pub weights: WeightTable,
    pub penalty: PenaltyRule,
}

/// Criterion scores handed to the aggregator. Externally supplied maps may
/// carry fractional values or omit criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreCard(BTreeMap<CriterionId, f64>);

impl ScoreCard {
    pub fn from_scores(scores: &BTreeMap<CriterionId, Score>) -> Self {
        Self(
            scores
                .iter()
                .map(|(id, score)| (*id, f64::from(*score)))
                .collect(),
        )
    }

    /// Accepts either a bare `{ "C1": 50, ... }` map or an object holding
    /// such a map under `criteria`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| IciError::InvalidScoreMap("expected a JSON object".to_string()))?;
        let map = match object.get("criteria") {
            Some(Value::Object(inner)) => inner,
            Some(_) => {
                return Err(IciError::InvalidScoreMap(
                    "`criteria` must be a JSON object".to_string(),
                ))
            }
            None => object,
        };

        let mut card = ScoreCard::default();
        for (key, raw) in map {
            let Ok(id) = key.parse::<CriterionId>() else {
                warn!(key = %key, "ignoring unknown criterion key");
                continue;
            };
            let value = raw.as_f64().ok_or_else(|| IciError::NonNumericCriterion {
                key: key.clone(),
                value: raw.to_string(),
            })?;
            if !(0.0..=100.0).contains(&value) {
                warn!(criterion = %id, value, "criterion score outside 0..=100");
            }
            card.insert(id, value);
        }
        Ok(card)
    }

    pub fn insert(&mut self, id: CriterionId, value: f64) {
        self.0.insert(id, value);
    }

    pub fn get(&self, id: CriterionId) -> Option<f64> {
        self.0.get(&id).copied()
    }

    /// Present value, or the criterion's absent-evidence score.
    pub fn resolve(&self, id: CriterionId) -> f64 {
        self.get(id)
            .unwrap_or_else(|| f64::from(id.absent_score()))
    }

    pub fn present(&self) -> impl Iterator<Item = (CriterionId, f64)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

use crate::error::IciError;
use crate::types::criterion::CriterionId;
use crate::types::scoring::{
    AggregationScheme, AggregationSettings, PenaltyRule, WeightTable, WEIGHT_SUM_TOLERANCE,
};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IciConfig {
    pub aggregation: Option<AggregationConfig>,
    pub penalty: Option<PenaltyConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregationConfig {
    #[serde(default)]
    pub scheme: AggregationScheme,
    pub weights: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PenaltyConfig {
    pub threshold: Option<f64>,
    pub max: Option<f64>,
}

impl IciConfig {
    pub fn scheme(&self) -> AggregationScheme {
        self.aggregation
            .as_ref()
            .map(|aggregation| aggregation.scheme)
            .unwrap_or_default()
    }

    /// Configured weights over the defaults; keys that do not name a
    /// criterion are left to `validate`.
    pub fn weights(&self) -> WeightTable {
        let defaults = WeightTable::default();
        let Some(overrides) = self
            .aggregation
            .as_ref()
            .and_then(|aggregation| aggregation.weights.as_ref())
        else {
            return defaults;
        };

        let mut weights = [0.0; 12];
        for id in CriterionId::ALL {
            weights[id.index()] = overrides
                .iter()
                .find(|(key, _)| key.parse::<CriterionId>().ok() == Some(id))
                .map(|(_, weight)| *weight)
                .unwrap_or_else(|| defaults.get(id));
        }
        WeightTable::new(weights)
    }

    pub fn penalty_rule(&self) -> PenaltyRule {
        let defaults = PenaltyRule::default();
        match &self.penalty {
            Some(penalty) => PenaltyRule {
                threshold: penalty.threshold.unwrap_or(defaults.threshold),
                max: penalty.max.unwrap_or(defaults.max),
            },
            None => defaults,
        }
    }

    pub fn settings(&self) -> AggregationSettings {
        AggregationSettings {
            scheme: self.scheme(),
            weights: self.weights(),
            penalty: self.penalty_rule(),
        }
    }

    pub fn validate(&self) -> Result<(), IciError> {
        if let Some(weights) = self
            .aggregation
            .as_ref()
            .and_then(|aggregation| aggregation.weights.as_ref())
        {
            let mut unknown = weights
                .keys()
                .filter(|key| key.parse::<CriterionId>().is_err())
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(IciError::ConfigParse(format!(
                    "aggregation.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }

            for id in CriterionId::ALL {
                let mut spellings = weights
                    .keys()
                    .filter(|key| key.parse::<CriterionId>().ok() == Some(id))
                    .cloned()
                    .collect::<Vec<_>>();
                if spellings.len() > 1 {
                    spellings.sort();
                    return Err(IciError::ConfigParse(format!(
                        "aggregation.weights sets {} more than once: {}",
                        id,
                        spellings.join(", ")
                    )));
                }
            }
        }

        let weights = self.weights();
        if weights.iter().any(|(_, weight)| !(0.0..=1.0).contains(&weight)) {
            return Err(IciError::ConfigParse(
                "aggregation.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum = weights.sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(IciError::ConfigParse(format!(
                "aggregation.weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        let penalty = self.penalty_rule();
        if !(penalty.threshold > 0.0 && penalty.threshold <= 100.0) {
            return Err(IciError::ConfigParse(
                "penalty.threshold must be greater than 0 and at most 100".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&penalty.max) {
            return Err(IciError::ConfigParse(
                "penalty.max must be between 0 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

//! Index aggregation: base index, C5 penalty, interpretation.

pub mod interpret;

use crate::types::criterion::CriterionId;
use crate::types::scoring::{AggregationScheme, AggregationSettings, PenaltyRule, ScoreCard};
use interpret::RiskBand;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexSummary {
    pub index_raw: f64,
    pub penalty: f64,
    pub index_adjusted: f64,
    pub band: RiskBand,
    pub remarks: Vec<String>,
    pub interpretation: String,
}

pub fn aggregate(card: &ScoreCard, settings: &AggregationSettings) -> IndexSummary {
    let index_raw = base_index(card, settings);
    let c5 = card.resolve(CriterionId::C5);
    let (penalty, index_adjusted) = apply_penalty(index_raw, c5, &settings.penalty);
    let reading = interpret::interpret(index_adjusted, card, &settings.penalty);

    debug!(
        present = card.len(),
        index_raw,
        penalty,
        index_adjusted,
        band = ?reading.band,
        "index aggregated"
    );

    IndexSummary {
        index_raw,
        penalty,
        index_adjusted,
        band: reading.band,
        remarks: reading.remarks,
        interpretation: reading.interpretation,
    }
}

/// Index before the C5 penalty, rounded to two decimals.
pub fn base_index(card: &ScoreCard, settings: &AggregationSettings) -> f64 {
    let raw = match settings.scheme {
        AggregationScheme::Weighted => CriterionId::ALL
            .iter()
            .map(|id| settings.weights.get(*id) * card.resolve(*id))
            .sum(),
        AggregationScheme::Mean if card.is_empty() => {
            let total: f64 = CriterionId::ALL.iter().map(|id| card.resolve(*id)).sum();
            total / CriterionId::ALL.len() as f64
        }
        AggregationScheme::Mean => {
            let total: f64 = card.present().map(|(_, value)| value).sum();
            total / card.len() as f64
        }
    };
    round2(raw)
}

/// Returns `(penalty, adjusted index)`. The shortfall below the threshold is
/// proportional; C5 is clamped at zero so the penalty never exceeds `max`.
pub fn apply_penalty(index_raw: f64, c5: f64, rule: &PenaltyRule) -> (f64, f64) {
    if c5 >= rule.threshold {
        return (0.0, round2(index_raw));
    }
    let shortfall = (rule.threshold - c5.max(0.0)) / rule.threshold;
    let penalty = rule.max * shortfall;
    (round2(penalty), round2((index_raw - penalty).max(0.0)))
}

/// Two decimals, ties to even: 49.625 becomes 49.62.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

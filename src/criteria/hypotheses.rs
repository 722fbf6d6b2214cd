//! C5: treatment of alternative hypotheses.
//!
//! Mentioning an alternative explanation earns a moderate score; the upper
//! tiers require the decision to also rule those explanations out.

use super::{GroupSource, Signals};
use crate::types::criterion::{CriterionId, Score};

pub const MENTIONS: &str = "mentions";
pub const ANALYZES: &str = "analyzes";

pub const GROUPS: &[GroupSource] = &[
    (
        MENTIONS,
        &[
            r"hip[oó]tesis alternativas?",
            r"otras explicaciones razonables",
            r"explicaci[oó]n alternativa",
            r"posibilidad alternativa",
            r"otra versi[oó]n de los hechos",
        ],
    ),
    (
        ANALYZES,
        &[
            r"esta hip[oó]tesis queda descartada",
            r"se descarta (esta|dicha) hip[oó]tesis",
            r"no resulta razonable aceptar",
            r"no es veros[ií]mil",
            r"no encuentra respaldo probatorio",
            r"carece de apoyo probatorio",
        ],
    ),
];

pub fn score(signals: &Signals) -> Score {
    let mentions = signals.get(MENTIONS);
    let analyzes = signals.get(ANALYZES);
    if mentions == 0 && analyzes == 0 {
        return CriterionId::C5.absent_score();
    }

    let mut score = 40;
    if mentions >= 2 && analyzes >= 1 {
        score += 20;
    }
    if mentions >= 3 && analyzes >= 2 {
        score += 20;
    }
    CriterionId::C5.clamp(score)
}

//! C8: experience rules, scientific generalizations and probability qualifiers.

use super::{GroupSource, Signals};
use crate::types::criterion::{CriterionId, Score};

pub const EXPERIENCE: &str = "experience";
pub const SCIENCE: &str = "science";
pub const PROBABILITY: &str = "probability";

pub const GROUPS: &[GroupSource] = &[
    (
        EXPERIENCE,
        &[
            r"de acuerdo con la experiencia",
            r"seg[uú]n la experiencia",
            r"reglas de la experiencia",
            r"regla de experiencia",
            r"por regla general",
            r"lo normal es que",
            r"lo habitual es que",
            r"usualmente",
            r"ordinariamente",
            r"lo esperable es que",
        ],
    ),
    (
        SCIENCE,
        &[
            r"seg[uú]n la evidencia cient[ií]fica",
            r"seg[uú]n estudios cient[ií]ficos",
            r"la criminolog[ií]a muestra que",
            r"estudios criminol[oó]gicos indican",
            r"estudios emp[ií]ricos indican",
            r"estudios emp[ií]ricos muestran",
            r"la ciencia (jur[ií]dica|forense) indica",
        ],
    ),
    (
        PROBABILITY,
        &[
            r"en la mayor[ií]a de los casos",
            r"con alta probabilidad",
            r"es altamente probable",
            r"resulta poco probable que",
            r"resulta muy probable que",
        ],
    ),
];

pub fn score(signals: &Signals) -> Score {
    let experience = signals.get(EXPERIENCE);
    let science = signals.get(SCIENCE);
    let probability = signals.get(PROBABILITY);
    let total = experience + science + probability;
    if total == 0 {
        return CriterionId::C8.absent_score();
    }

    let mut score = 45;
    if experience >= 2 {
        score += 15;
    }
    if science >= 1 {
        score += 15;
    }
    if probability >= 2 || total >= 5 {
        score += 15;
    }
    CriterionId::C8.clamp(score)
}

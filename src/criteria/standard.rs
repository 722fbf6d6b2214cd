//! C6 (standard of proof) and C7 (global coherence).

use super::{GroupSource, Signals};
use crate::types::criterion::{CriterionId, Score};

pub const PROOF_STANDARD: &str = "proof_standard";
pub const STRUCTURE: &str = "structure";
pub const CONTRADICTION: &str = "contradiction";

pub const C6_GROUPS: &[GroupSource] = &[(
    PROOF_STANDARD,
    &[
        r"presunci[oó]n de inocencia",
        r"duda razonable",
        r"m[aá]s all[aá] de toda duda razonable",
        r"est[aá]ndar probatorio",
        r"carga de la prueba",
        r"in dubio pro reo",
        r"certeza moral",
        r"certeza m[aá]s all[aá] de la duda razonable",
    ],
)];

pub const C7_GROUPS: &[GroupSource] = &[
    (
        STRUCTURE,
        &[
            r"metodolog[ií]a (de la )?prueba indiciaria",
            r"esquema operativo",
            r"estructura (de la )?prueba indiciaria",
            r"en primer lugar[,;]",
            r"en segundo lugar[,;]",
            r"finalmente[,;]",
            r"en suma[,;]",
        ],
    ),
    (
        CONTRADICTION,
        &[
            r"contradicci[oó]n interna",
            r"incongruencia",
            r"incoherencia",
        ],
    ),
];

const CONTRADICTION_PENALTY: i32 = 15;

pub fn score_c6(signals: &Signals) -> Score {
    let mentions = signals.get(PROOF_STANDARD);
    if mentions == 0 {
        return CriterionId::C6.absent_score();
    }

    let mut score = 55;
    if mentions >= 3 {
        score += 15;
    }
    if mentions >= 5 {
        score += 15;
    }
    CriterionId::C6.clamp(score)
}

/// Structure markers raise the score; any explicit contradiction costs a
/// fixed amount. There is no early return: silence scores the base value.
pub fn score_c7(signals: &Signals) -> Score {
    let structure = signals.get(STRUCTURE);
    let mut score = i32::from(CriterionId::C7.absent_score());
    if structure >= 2 {
        score += 20;
    }
    if structure >= 4 {
        score += 20;
    }
    if signals.get(CONTRADICTION) >= 1 {
        score -= CONTRADICTION_PENALTY;
    }
    CriterionId::C7.clamp(score)
}

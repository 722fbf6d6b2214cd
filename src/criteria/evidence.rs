//! C1 (evidentiary facts) and C2 (reliability of sources).

use super::{GroupSource, Signals};
use crate::types::criterion::{CriterionId, Score};

pub const INDICIA: &str = "indicia";
pub const SCHEMES: &str = "schemes";
pub const SOURCES: &str = "sources";
pub const RELIABILITY: &str = "reliability";

pub const C1_GROUPS: &[GroupSource] = &[
    (
        INDICIA,
        &[
            r"\bindicios?\b",
            r"hechos? indiciarios?",
            r"hechos? base\b",
            r"hechos? indicador[ea]s?",
            r"datos incriminatorios",
            r"datos indiciarios",
        ],
    ),
    (
        SCHEMES,
        &[
            r"\bH\s*1\b",
            r"\bH\s*2\b",
            r"\bH\s*3\b",
            r"\bH\s*4\b",
            r"hecho base\s*\d",
            r"indic[ií]o\s*\d",
        ],
    ),
];

pub const C2_GROUPS: &[GroupSource] = &[
    (
        SOURCES,
        &[
            r"declaraci[oó]n del testigo",
            r"testigo presencial",
            r"testigo de o[ií]das",
            r"pericia\b",
            r"informe pericial",
            r"\bacta\b",
            r"informe policial",
            r"dictamen pericial",
        ],
    ),
    (
        RELIABILITY,
        &[
            r"fiabilidad\b",
            r"credibilidad\b",
            r"veros[ií]mil",
            r"coherentes?",
            r"contradicci[oó]n",
            r"condiciones de percepci[oó]n",
            r"rigor metodol[oó]gico",
            r"origen de la prueba",
            r"calidad de la pericia",
        ],
    ),
];

pub fn score_c1(signals: &Signals) -> Score {
    let indicia = signals.get(INDICIA);
    let schemes = signals.get(SCHEMES);
    if indicia == 0 && schemes == 0 {
        return CriterionId::C1.absent_score();
    }

    let mut score = 50;
    if indicia >= 2 {
        score += 15;
    }
    if schemes >= 2 {
        score += 15;
    }
    if indicia + schemes >= 6 {
        score += 10;
    }
    CriterionId::C1.clamp(score)
}

/// Reliability vocabulary only counts once at least one source is named.
pub fn score_c2(signals: &Signals) -> Score {
    if signals.get(SOURCES) == 0 {
        return CriterionId::C2.absent_score();
    }

    let analysis = signals.get(RELIABILITY);
    let mut score = 40;
    if analysis >= 2 {
        score += 20;
    }
    if analysis >= 4 {
        score += 15;
    }
    if analysis >= 6 {
        score += 15;
    }
    CriterionId::C2.clamp(score)
}

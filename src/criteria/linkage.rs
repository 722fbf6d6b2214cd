//! C3 (logical link between base fact and consequence) and C4 (plurality and
//! convergence of indicia).

use super::{GroupSource, Signals};
use crate::types::criterion::{CriterionId, Score};

pub const RELEVANCE: &str = "relevance";
pub const LINKAGE: &str = "linkage";
pub const COMBINATION: &str = "combination";
pub const PLURALITY: &str = "plurality";
pub const CONVERGENCE: &str = "convergence";
pub const EXPLICIT: &str = "explicit";

pub const C3_GROUPS: &[GroupSource] = &[
    (
        RELEVANCE,
        &[
            r"relevan(cia|te)",
            r"pertinencia",
            r"conducente",
            r"idoneidad probatoria",
            r"v[ií]nculo (l[oó]gico|causal)",
            r"relaci[oó]n (l[oó]gica|causal)",
            r"peso (probatorio|indiciario)",
            r"aporte (probatorio|indiciario)",
        ],
    ),
    (
        LINKAGE,
        &[
            r"estos hechos permiten",
            r"estos indicios permiten",
            r"de lo actuado se (colige|concluye|infiere)",
            r"de (estos|tales|los) hechos se (colige|concluye|infiere)",
            r"se colige que",
            r"se concluye que",
            r"permite establecer",
            r"permite afirmar",
            r"permite vincular",
            r"guarda relaci[oó]n con",
            r"resultado natural de",
        ],
    ),
    (
        COMBINATION,
        &[
            r"H\s*1\s*\+\s*H\s*2",
            r"H\s*[0-9]+\s*y\s*H\s*[0-9]+",
            r"en conjunto con H\s*[0-9]+",
            r"la combinaci[oó]n de estos indicios",
        ],
    ),
];

pub const C4_GROUPS: &[GroupSource] = &[
    (
        PLURALITY,
        &[
            r"pluralidad de indicios",
            r"diversos indicios",
            r"varios indicios",
            r"m[uú]ltiples indicios",
            r"conjunto de indicios",
            r"serie de indicios",
            r"m[uú]ltiples hechos",
        ],
    ),
    (
        CONVERGENCE,
        &[
            r"en conjunto permiten",
            r"considerados en su conjunto",
            r"convergen en",
            r"se refuerzan mutuamente",
            r"corroboran entre s[ií]",
            r"se corroboran",
            r"armonizan con",
            r"compatibles entre s[ií]",
            r"no se contradicen",
        ],
    ),
    (
        EXPLICIT,
        &[
            r"indicios convergentes",
            r"estructura convergente",
            r"indicios perif[eé]ricos que convergen",
        ],
    ),
];

pub fn score_c3(signals: &Signals) -> Score {
    let relevance = signals.get(RELEVANCE);
    let linkage = signals.get(LINKAGE);
    let combination = signals.get(COMBINATION);
    if relevance == 0 && linkage == 0 && combination == 0 {
        return CriterionId::C3.absent_score();
    }

    let mut score = 40;
    if relevance >= 2 {
        score += 15;
    }
    if linkage >= 2 {
        score += 15;
    }
    if combination >= 1 || relevance + linkage >= 5 {
        score += 20;
    }
    CriterionId::C3.clamp(score)
}

pub fn score_c4(signals: &Signals) -> Score {
    let plurality = signals.get(PLURALITY);
    let convergence = signals.get(CONVERGENCE);
    let explicit = signals.get(EXPLICIT);
    if plurality == 0 && convergence == 0 && explicit == 0 {
        return CriterionId::C4.absent_score();
    }

    let mut score = 35;
    if plurality >= 1 {
        score += 15;
    }
    if convergence >= 1 {
        score += 15;
    }
    if convergence >= 2 || explicit >= 1 {
        score += 20;
    }
    CriterionId::C4.clamp(score)
}

//! C11: explicit inferential chains. Presence bonus only.

use super::{GroupSource, Signals};
use crate::types::criterion::{CriterionId, Score};

pub const CHAIN: &str = "chain";

pub const GROUPS: &[GroupSource] = &[(
    CHAIN,
    &[
        r"hechos? intermedios?",
        r"hecho consecuencia",
        r"hecho final",
        r"a partir de (estos|tales|los) hechos",
        r"de estos hechos se infiere",
        r"este indicio, unido a",
        r"unido a este otro indicio",
        r"primera inferencia",
        r"segunda inferencia",
        r"primer nivel inferencial",
        r"segundo nivel inferencial",
        r"cadena inferencial",
        r"estructura escalonada",
    ],
)];

pub fn score(signals: &Signals) -> Score {
    let links = signals.get(CHAIN);
    if links == 0 {
        return CriterionId::C11.absent_score();
    }

    let mut score = 50;
    if links >= 2 {
        score += 15;
    }
    if links >= 4 {
        score += 15;
    }
    CriterionId::C11.clamp(score)
}

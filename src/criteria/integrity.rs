//! C12: textual integrity. Weighs cited doctrine against language that
//! applies it to the case at hand.

use super::{GroupSource, Signals};
use crate::types::criterion::Score;

pub const DOCTRINE: &str = "doctrine";
pub const CASE_APPLICATION: &str = "case_application";

pub const GROUPS: &[GroupSource] = &[
    (
        DOCTRINE,
        &[
            r"Acuerdo Plenario",
            r"Ferrer Beltr[aá]n",
            r"Taruffo",
            r"Atienza",
            r"Perfecto Andr[eé]s Ib[aá][ñn]ez",
            r"Nieva Fenoll",
            r"doctrina (nacional|comparada)",
            r"jurisprudencia comparada",
        ],
    ),
    (
        CASE_APPLICATION,
        &[
            r"en el presente caso",
            r"en el caso concreto",
            r"en autos",
            r"en la presente causa",
            r"en el proceso de autos",
            r"en este proceso penal",
            r"aplicado al caso",
            r"aplicando dicha doctrina al caso",
        ],
    ),
];

const RED_FLAG: Score = 35;
const APPLIED: Score = 65;
const CASE_FOCUSED: Score = 80;
const NEUTRAL: Score = 60;
const RESIDUAL: Score = 55;

pub fn score(signals: &Signals) -> Score {
    let doctrine = signals.get(DOCTRINE);
    let case = signals.get(CASE_APPLICATION);
    match (doctrine, case) {
        (3.., 0) => RED_FLAG,
        (1.., 1..) => APPLIED,
        (0, 2..) => CASE_FOCUSED,
        (0, 0) => NEUTRAL,
        _ => RESIDUAL,
    }
}

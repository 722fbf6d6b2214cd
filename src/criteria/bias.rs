//! C9: stereotype control in victim-credibility reasoning.
//!
//! Bidirectional: stereotype phrasing pulls the score down, corrective
//! phrasing pushes it up. Silence is neutral, not a sign of control.

use super::{GroupSource, Signals};
use crate::types::criterion::Score;

pub const STEREOTYPE: &str = "stereotype";
pub const CORRECTIVE: &str = "corrective";

pub const GROUPS: &[GroupSource] = &[
    (
        STEREOTYPE,
        &[
            r"si realmente (hubiera sido|fuese|fuera) v[íi]ctima.*(habr[ií]a denunciado|denunciado de inmediato)",
            r"no denunci[oó] de inmediato",
            r"no (pidi[oó]|solicit[oó]) ayuda",
            r"no (grit[oó]|emiti[oó] gritos)",
            r"no opuso resistencia",
            r"no presenta signos de violencia f[ií]sica",
            r"su comportamiento no se condice con el de una v[íi]ctima",
            r"conducta provocadora",
            r"se coloc[oó] en situaci[oó]n de riesgo",
            r"pudo haber evitado los hechos",
            r"no resulta cre[ií]ble que una v[íi]ctima",
        ],
    ),
    (
        CORRECTIVE,
        &[
            r"no es v[aá]lido exigir a la v[íi]ctima",
            r"no puede exigirse a la v[íi]ctima",
            r"no puede sostenerse que.*(por no denunciar de inmediato|por no pedir ayuda)",
            r"no puede considerarse que la falta de denuncia inmediata reste credibilidad",
            r"no puede fundarse la incredulidad en estereotipos",
            r"sin acudir a estereotipos",
            r"evitando estereotipos",
            r"los estereotipos de g[eé]nero no pueden",
        ],
    ),
];

const NEUTRAL: Score = 60;
const STRONG_BIAS: Score = 25;
const SOME_BIAS: Score = 35;
const MIXED: Score = 55;
const CONTROLLED: Score = 80;

pub fn score(signals: &Signals) -> Score {
    let stereotype = signals.get(STEREOTYPE);
    let corrective = signals.get(CORRECTIVE);
    match (stereotype, corrective) {
        (0, 0) => NEUTRAL,
        (3.., 0) => STRONG_BIAS,
        (_, 0) => SOME_BIAS,
        (0, _) => CONTROLLED,
        _ => MIXED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::PatternTable;
    use crate::types::criterion::CriterionId;

    fn c9(text: &str) -> Score {
        let table = PatternTable::from_sources(GROUPS).expect("C9 table should compile");
        score(&table.signals(text))
    }

    #[test]
    fn silence_is_neutral_and_matches_absent_score() {
        assert_eq!(c9("La testigo relató los hechos."), 60);
        assert_eq!(NEUTRAL, CriterionId::C9.absent_score());
    }

    #[test]
    fn stereotype_phrasing_lowers_the_score() {
        assert_eq!(c9("La denunciante no opuso resistencia."), 35);
        let text = "No pidió ayuda, no gritó y no opuso resistencia.";
        assert_eq!(c9(text), 25);
    }

    #[test]
    fn corrective_phrasing_raises_the_score() {
        assert_eq!(
            c9("Se valora la declaración sin acudir a estereotipos."),
            80
        );
    }

    #[test]
    fn mixed_presence_lands_in_the_middle() {
        let text = "Aunque no denunció de inmediato, no puede exigirse a la víctima una \
                    reacción determinada.";
        assert_eq!(c9(text), 55);
    }

    #[test]
    fn every_outcome_is_within_bounds() {
        let (floor, ceiling) = CriterionId::C9.bounds();
        for stereotype in 0..5 {
            for corrective in 0..3 {
                let signals = Signals::default()
                    .with(STEREOTYPE, stereotype)
                    .with(CORRECTIVE, corrective);
                assert!((floor..=ceiling).contains(&score(&signals)));
            }
        }
    }
}

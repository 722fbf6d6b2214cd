//! C10: fallacious evidentiary reasoning.

use super::{GroupSource, Signals};
use crate::types::criterion::{CriterionId, Score};

pub const FALLACY: &str = "fallacy";
pub const CORRECTIVE: &str = "corrective";

pub const GROUPS: &[GroupSource] = &[
    (
        FALLACY,
        &[
            r"por el solo hecho de",
            r"por el simple hecho de",
            r"basta (para concluir|para tener por acreditado)",
            r"ello demuestra sin m[aá]s",
            r"sin mayor an[aá]lisis",
            r"no cabe duda de que.*por cuanto",
            r"es evidente que.*porque as[ií] lo declara",
        ],
    ),
    (
        CORRECTIVE,
        &[
            r"no basta con el solo hecho de",
            r"no puede fundarse [uú]nicamente en",
            r"no puede sostenerse solo en",
            r"no resulta suficiente por s[ií] mism[oa]",
            r"requiere corroboraci[oó]n adicional",
        ],
    ),
];

pub fn score(signals: &Signals) -> Score {
    let fallacy = signals.get(FALLACY);
    let corrective = signals.get(CORRECTIVE);
    let raw = match (fallacy, corrective) {
        (0, 0) => 60,
        (3.., 0) => 30,
        (_, 0) => 40,
        (0, _) => 80,
        _ => 55,
    };
    CriterionId::C10.clamp(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::PatternTable;

    fn c10(text: &str) -> Score {
        let table = PatternTable::from_sources(GROUPS).expect("C10 table should compile");
        score(&table.signals(text))
    }

    #[test]
    fn neutral_without_markers() {
        assert_eq!(c10("Se valoró la prueba documental."), 60);
    }

    #[test]
    fn fallacy_markers_lower_the_score() {
        assert_eq!(c10("Es autor por el solo hecho de estar presente."), 40);
        let text = "Por el simple hecho de huir, y sin mayor análisis, ello demuestra sin más \
                    su culpa.";
        assert_eq!(c10(text), 30);
    }

    #[test]
    fn corrective_markers_raise_the_score() {
        let text = "La presencia en el lugar no resulta suficiente por sí misma y requiere \
                    corroboración adicional.";
        assert_eq!(c10(text), 80);
    }

    #[test]
    fn corrective_and_fallacy_markers_together_are_mixed() {
        // no "por" before "el solo hecho de", so only the corrective group fires
        assert_eq!(c10("No basta con el solo hecho de estar allí."), 80);
        assert_eq!(
            c10("Por el solo hecho de estar allí no se condena; no puede fundarse únicamente en ello."),
            55
        );
    }
}

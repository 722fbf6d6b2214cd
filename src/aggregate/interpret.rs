use crate::types::criterion::CriterionId;
use crate::types::scoring::{PenaltyRule, ScoreCard};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl RiskBand {
    /// Lower bounds are inclusive: 40.0 is `High`, 39.99 is `VeryHigh`.
    pub fn from_index(index: f64) -> Self {
        if index < 40.0 {
            RiskBand::VeryHigh
        } else if index < 55.0 {
            RiskBand::High
        } else if index < 70.0 {
            RiskBand::Medium
        } else if index < 85.0 {
            RiskBand::Low
        } else {
            RiskBand::VeryLow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::VeryHigh => "Riesgo MUY ALTO",
            RiskBand::High => "Riesgo ALTO",
            RiskBand::Medium => "Riesgo MEDIO",
            RiskBand::Low => "Riesgo BAJO",
            RiskBand::VeryLow => "Estándar ALTO",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskBand::VeryHigh => {
                "Riesgo MUY ALTO: la coherencia indiciaria es deficiente. El razonamiento \
                 presenta serias lagunas en la estructura de indicios y en el tratamiento de \
                 hipótesis alternativas, con uso insuficiente de reglas de experiencia y posible \
                 presencia de sesgos o falacias relevantes."
            }
            RiskBand::High => {
                "Riesgo ALTO: la motivación presenta fallas relevantes. Aunque se identifican \
                 algunos elementos indiciarios, el descarte de hipótesis alternativas y/o el uso \
                 de máximas de la experiencia resulta insuficiente, y se aprecian debilidades en \
                 el control de sesgos, falacias o en la aplicación concreta de la doctrina al caso."
            }
            RiskBand::Medium => {
                "Riesgo MEDIO: motivación aceptable pero incompleta. Se aprecian indicios y \
                 cierta lógica inferencial, pero existen debilidades en la convergencia, en el \
                 análisis de hipótesis alternativas o en el uso explícito de reglas de \
                 experiencia, así como en el control sistemático de sesgos y falacias."
            }
            RiskBand::Low => {
                "Riesgo BAJO: razonamiento indiciario sólido en general. La sentencia identifica \
                 hechos base, analiza fuentes, descarta hipótesis alternativas y utiliza reglas de \
                 experiencia de forma razonable, con un nivel aceptable de control de sesgos, \
                 falacias y una aplicación suficiente de la doctrina al caso concreto."
            }
            RiskBand::VeryLow => {
                "Estándar ALTO de coherencia indiciaria: la motivación sigue un método claro, con \
                 hechos base definidos, fuentes analizadas, pluralidad y convergencia real de \
                 indicios, hipótesis alternativas tratadas rigurosamente, uso consistente de \
                 máximas de la experiencia y un control explícito de estereotipos, falacias y \
                 aplicación cuidadosa de la doctrina al caso concreto."
            }
        }
    }
}

/// A remark appended when a criterion falls strictly below `below`.
#[derive(Debug, Clone, Copy)]
pub struct Remark {
    pub criterion: CriterionId,
    pub below: f64,
    pub text: &'static str,
}

/// Emitted whenever C5 is below the penalty threshold.
pub const HYPOTHESES_REMARK: &str = "C5 muy bajo: no se desarrollan adecuadamente hipótesis \
                                     alternativas ni se descartan otras explicaciones \
                                     razonables de los hechos.";

pub const REMARKS: [Remark; 4] = [
    Remark {
        criterion: CriterionId::C7,
        below: 50.0,
        text: "C7 bajo: el razonamiento presenta saltos lógicos o contradicciones que dañan \
               la coherencia global.",
    },
    Remark {
        criterion: CriterionId::C9,
        below: 40.0,
        text: "C9 bajo: la valoración de la prueba recurre a estereotipos sobre el \
               comportamiento esperable de la víctima.",
    },
    Remark {
        criterion: CriterionId::C10,
        below: 45.0,
        text: "C10 bajo: se detectan expresiones propias de razonamientos probatorios \
               falaces, como inferencias extraídas de un solo hecho.",
    },
    Remark {
        criterion: CriterionId::C12,
        below: 40.0,
        text: "C12 bajo: abundante cita doctrinal sin aplicación explícita al caso concreto.",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub band: RiskBand,
    pub remarks: Vec<String>,
    pub interpretation: String,
}

pub fn interpret(index_adjusted: f64, card: &ScoreCard, penalty: &PenaltyRule) -> Reading {
    let band = RiskBand::from_index(index_adjusted);
    let mut remarks = Vec::new();
    if card.resolve(CriterionId::C5) < penalty.threshold {
        remarks.push(HYPOTHESES_REMARK.to_string());
    }
    remarks.extend(
        REMARKS
            .iter()
            .filter(|remark| card.resolve(remark.criterion) < remark.below)
            .map(|remark| remark.text.to_string()),
    );

    let mut interpretation = band.description().to_string();
    for remark in &remarks {
        interpretation.push(' ');
        interpretation.push_str(remark);
    }

    Reading {
        band,
        remarks,
        interpretation,
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type Score = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CriterionId {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    C10,
    C11,
    C12,
}

impl CriterionId {
    pub const ALL: [CriterionId; 12] = [
        CriterionId::C1,
        CriterionId::C2,
        CriterionId::C3,
        CriterionId::C4,
        CriterionId::C5,
        CriterionId::C6,
        CriterionId::C7,
        CriterionId::C8,
        CriterionId::C9,
        CriterionId::C10,
        CriterionId::C11,
        CriterionId::C12,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CriterionId::C1 => "C1",
            CriterionId::C2 => "C2",
            CriterionId::C3 => "C3",
            CriterionId::C4 => "C4",
            CriterionId::C5 => "C5",
            CriterionId::C6 => "C6",
            CriterionId::C7 => "C7",
            CriterionId::C8 => "C8",
            CriterionId::C9 => "C9",
            CriterionId::C10 => "C10",
            CriterionId::C11 => "C11",
            CriterionId::C12 => "C12",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CriterionId::C1 => "Hechos base e indicios",
            CriterionId::C2 => "Fiabilidad de las fuentes",
            CriterionId::C3 => "Vínculo lógico del indicio",
            CriterionId::C4 => "Pluralidad y convergencia",
            CriterionId::C5 => "Hipótesis alternativas",
            CriterionId::C6 => "Estándar de prueba",
            CriterionId::C7 => "Coherencia global",
            CriterionId::C8 => "Máximas de la experiencia",
            CriterionId::C9 => "Sesgos y estereotipos",
            CriterionId::C10 => "Falacias probatorias",
            CriterionId::C11 => "Cadena inferencial",
            CriterionId::C12 => "Doctrina frente a caso concreto",
        }
    }

    /// Inclusive `(floor, ceiling)` every score of this criterion lies in.
    pub fn bounds(self) -> (Score, Score) {
        match self {
            CriterionId::C1 | CriterionId::C2 => (20, 95),
            CriterionId::C3 => (10, 95),
            CriterionId::C4 => (10, 90),
            CriterionId::C5 | CriterionId::C8 => (20, 90),
            CriterionId::C6 | CriterionId::C11 => (30, 90),
            CriterionId::C7 => (25, 90),
            CriterionId::C9 => (25, 80),
            CriterionId::C10 => (30, 80),
            CriterionId::C12 => (35, 80),
        }
    }

    /// Score produced when the text carries no recognized language at all.
    /// Also the neutral default for a criterion missing from a score map.
    pub fn absent_score(self) -> Score {
        match self {
            CriterionId::C1 | CriterionId::C2 | CriterionId::C5 | CriterionId::C8 => 20,
            CriterionId::C3 | CriterionId::C4 => 10,
            CriterionId::C6 | CriterionId::C11 => 30,
            CriterionId::C7 => 40,
            CriterionId::C9 | CriterionId::C10 | CriterionId::C12 => 60,
        }
    }

    pub fn clamp(self, raw: i32) -> Score {
        let (floor, ceiling) = self.bounds();
        raw.clamp(i32::from(floor), i32::from(ceiling)) as Score
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriterionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        CriterionId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| format!("unknown criterion: {s}"))
    }
}

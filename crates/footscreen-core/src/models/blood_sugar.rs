use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The laboratory test a blood sugar value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BloodSugarKind {
    /// Random capillary glucose (mg/dL).
    #[serde(rename = "gds")]
    CapillaryRandom,
    /// Fasting plasma glucose (mg/dL).
    #[serde(rename = "gdp")]
    FastingPlasma,
    /// Glycated haemoglobin (%).
    #[serde(rename = "hba1c")]
    HemoglobinA1c,
}

impl BloodSugarKind {
    pub const ALL: [BloodSugarKind; 3] = [
        BloodSugarKind::CapillaryRandom,
        BloodSugarKind::FastingPlasma,
        BloodSugarKind::HemoglobinA1c,
    ];

    /// The form code for this kind (`gds`, `gdp`, `hba1c`).
    pub fn code(&self) -> &'static str {
        match self {
            BloodSugarKind::CapillaryRandom => "gds",
            BloodSugarKind::FastingPlasma => "gdp",
            BloodSugarKind::HemoglobinA1c => "hba1c",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BloodSugarKind::CapillaryRandom => "Random Capillary Glucose",
            BloodSugarKind::FastingPlasma => "Fasting Plasma Glucose",
            BloodSugarKind::HemoglobinA1c => "HbA1c",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            BloodSugarKind::CapillaryRandom | BloodSugarKind::FastingPlasma => "mg/dL",
            BloodSugarKind::HemoglobinA1c => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BloodSugarStatus {
    Normal,
    Prediabetes,
    Diabetes,
    Unknown,
}

impl fmt::Display for BloodSugarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BloodSugarStatus::Normal => "Normal",
            BloodSugarStatus::Prediabetes => "Prediabetes",
            BloodSugarStatus::Diabetes => "Diabetes",
            BloodSugarStatus::Unknown => "Unknown",
        })
    }
}

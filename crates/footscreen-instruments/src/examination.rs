use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use footscreen_core::models::blood_sugar::BloodSugarKind;
use footscreen_core::models::screening::FootScores;

use crate::findings::{
    DeformityFinding, Footwear, NailFinding, RomFinding, SkinFinding, max_severity,
};

/// Everything the engine needs to score one screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExaminationInput {
    pub blood_sugar: BloodSugarReading,
    pub left: FootExamination,
    pub right: FootExamination,
    pub footwear: Footwear,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodSugarReading {
    pub kind: BloodSugarKind,
    pub value: f64,
}

/// Observations for a single foot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FootExamination {
    pub skin: BTreeSet<SkinFinding>,
    pub nails: BTreeSet<NailFinding>,
    /// Monofilament result (0 or 4) plus symptom bonus (0 or 2).
    pub sensation: u8,
    /// Pain on walking or at rest.
    pub pain: u8,
    /// Dependent rubor.
    pub rubor: u8,
    /// Cool foot.
    pub temperature: u8,
    /// Absent pedal pulse.
    pub pedal_pulse: u8,
    pub deformity: BTreeSet<DeformityFinding>,
    pub range_of_motion: BTreeSet<RomFinding>,
}

impl FootExamination {
    /// Flattened per-item severities, as stored with the screening.
    pub fn scores(&self) -> FootScores {
        FootScores {
            skin: max_severity(&self.skin),
            nails: max_severity(&self.nails),
            sensation: self.sensation,
            pain: self.pain,
            rubor: self.rubor,
            temperature: self.temperature,
            pedal_pulse: self.pedal_pulse,
            deformity: max_severity(&self.deformity),
            range_of_motion: max_severity(&self.range_of_motion),
        }
    }

    pub fn has_ulcer_history(&self) -> bool {
        self.skin.contains(&SkinFinding::Ulcer)
    }

    pub fn has_prior_amputation(&self) -> bool {
        self.deformity.contains(&DeformityFinding::PriorAmputation)
    }

    pub fn has_active_charcot(&self) -> bool {
        self.deformity.contains(&DeformityFinding::ActiveCharcot)
    }
}

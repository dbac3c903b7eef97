use serde::{Deserialize, Serialize};
use ts_rs::TS;

use footscreen_core::models::blood_sugar::BloodSugarStatus;
use footscreen_core::models::risk::RiskTier;

use crate::examination::ExaminationInput;

/// Engine output for one screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    pub total_score: u32,
    pub risk_classification: RiskTier,
    pub blood_sugar_status: BloodSugarStatus,
}

/// Per-domain contributions to the Inlow's total.
///
/// Graded domains take the worse foot. PAD sums its four signs, each taken
/// from the worse foot, so it ranges 0–4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub skin: u32,
    pub nails: u32,
    pub sensation: u32,
    pub pad: u32,
    pub deformity: u32,
    pub range_of_motion: u32,
    pub footwear: u32,
}

impl ScoreBreakdown {
    pub fn of(input: &ExaminationInput) -> Self {
        let left = input.left.scores();
        let right = input.right.scores();

        let pad = bilateral(left.pain, right.pain)
            + bilateral(left.rubor, right.rubor)
            + bilateral(left.temperature, right.temperature)
            + bilateral(left.pedal_pulse, right.pedal_pulse);

        Self {
            skin: bilateral(left.skin, right.skin),
            nails: bilateral(left.nails, right.nails),
            sensation: bilateral(left.sensation, right.sensation),
            pad,
            deformity: bilateral(left.deformity, right.deformity),
            range_of_motion: bilateral(left.range_of_motion, right.range_of_motion),
            footwear: u32::from(input.footwear.score()),
        }
    }

    pub fn total(&self) -> u32 {
        self.skin
            + self.nails
            + self.sensation
            + self.pad
            + self.deformity
            + self.range_of_motion
            + self.footwear
    }
}

/// The worse of the two feet.
fn bilateral(left: u8, right: u8) -> u32 {
    u32::from(left.max(right))
}

/// Total Inlow's score for an examination.
pub fn compute_total_score(input: &ExaminationInput) -> u32 {
    ScoreBreakdown::of(input).total()
}

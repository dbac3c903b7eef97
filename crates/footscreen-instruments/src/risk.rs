//! Inlow's risk classification.
//!
//! Classification is not a score threshold: it is a first-match cascade over
//! six risk factors derived from the examination. The cascade is held as an
//! ordered rule table and evaluated top to bottom.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use footscreen_core::models::risk::RiskTier;

use crate::examination::ExaminationInput;
use crate::findings::max_severity;

/// Risk factors derived from both feet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactors {
    /// Loss of protective sensation.
    pub lops: bool,
    /// Peripheral arterial disease.
    pub pad: bool,
    pub deformity: bool,
    pub ulcer_history: bool,
    pub amputation_history: bool,
    pub active_charcot: bool,
}

impl RiskFactors {
    pub fn of(input: &ExaminationInput) -> Self {
        let (left, right) = (&input.left, &input.right);

        let pad = left.pain.max(right.pain) > 0
            || left.rubor.max(right.rubor) > 0
            || left.temperature.max(right.temperature) > 0
            || left.pedal_pulse.max(right.pedal_pulse) > 0;

        Self {
            lops: left.sensation.max(right.sensation) > 0,
            pad,
            deformity: max_severity(&left.deformity).max(max_severity(&right.deformity)) > 0,
            ulcer_history: left.has_ulcer_history() || right.has_ulcer_history(),
            amputation_history: left.has_prior_amputation() || right.has_prior_amputation(),
            active_charcot: left.has_active_charcot() || right.has_active_charcot(),
        }
    }
}

/// One row of the cascade: if `applies` holds, the patient is in `tier`.
pub struct RiskRule {
    pub tier: RiskTier,
    pub applies: fn(&RiskFactors) -> bool,
}

/// The cascade, highest priority first. A patient matching no rule is
/// [`RiskTier::VeryLow`].
///
/// The `High` rule is partly shadowed by `Emergency` (an ulcer history
/// always fires the first rule) but still catches prior amputation. Row
/// order is significant and must not be rearranged.
pub static RISK_CASCADE: &[RiskRule] = &[
    RiskRule {
        tier: RiskTier::Emergency,
        applies: |f| f.ulcer_history || f.active_charcot,
    },
    RiskRule {
        tier: RiskTier::High,
        applies: |f| (f.lops || f.pad) && (f.ulcer_history || f.amputation_history),
    },
    RiskRule {
        tier: RiskTier::Moderate,
        applies: |f| (f.lops && f.pad) || (f.lops && f.deformity) || (f.pad && f.deformity),
    },
    RiskRule {
        tier: RiskTier::Low,
        applies: |f| f.lops || f.pad,
    },
];

/// Classify a set of risk factors.
pub fn classify_factors(factors: &RiskFactors) -> RiskTier {
    RISK_CASCADE
        .iter()
        .find(|rule| (rule.applies)(factors))
        .map(|rule| rule.tier)
        .unwrap_or(RiskTier::VeryLow)
}

/// Risk tier for an examination.
pub fn classify_risk(input: &ExaminationInput) -> RiskTier {
    classify_factors(&RiskFactors::of(input))
}

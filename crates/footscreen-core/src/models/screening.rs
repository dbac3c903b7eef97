use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::blood_sugar::{BloodSugarKind, BloodSugarStatus};
use super::risk::RiskTier;

/// A stored screening: the per-foot severities that fed the engine plus its
/// results and the clinician's chosen recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Screening {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub blood_sugar_kind: BloodSugarKind,
    pub blood_sugar_value: f64,
    pub blood_sugar_status: BloodSugarStatus,
    pub left: FootScores,
    pub right: FootScores,
    pub footwear_score: u8,
    pub total_score: u32,
    pub risk_classification: RiskTier,
    pub recommendations: Vec<String>,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Severity per examination item for one foot, flattened for storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FootScores {
    pub skin: u8,
    pub nails: u8,
    pub sensation: u8,
    pub pain: u8,
    pub rubor: u8,
    pub temperature: u8,
    pub pedal_pulse: u8,
    pub deformity: u8,
    pub range_of_motion: u8,
}

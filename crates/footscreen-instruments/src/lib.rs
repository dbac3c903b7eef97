//! footscreen-instruments
//!
//! The Inlow's 60-Second Diabetic Foot Screen. Pure computation, no I/O.
//! Defines the examination vocabulary, the score aggregation, the risk
//! cascade, blood sugar classification and the per-tier recommendations.

pub mod blood_sugar;
pub mod error;
pub mod examination;
pub mod findings;
pub mod form;
pub mod recommendations;
pub mod risk;
pub mod scoring;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use footscreen_core::models::screening::FootScores;

use examination::ExaminationInput;
use scoring::{ScoreBreakdown, ScoringResult};

/// Score, classify and grade the blood sugar of one examination.
pub fn score(input: &ExaminationInput) -> ScoringResult {
    ScoringResult {
        total_score: scoring::compute_total_score(input),
        risk_classification: risk::classify_risk(input),
        blood_sugar_status: blood_sugar::classify_blood_sugar(
            input.blood_sugar.kind,
            input.blood_sugar.value,
        ),
    }
}

/// Everything derived from an examination that gets stored with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningOutcome {
    pub result: ScoringResult,
    pub breakdown: ScoreBreakdown,
    pub left: FootScores,
    pub right: FootScores,
}

pub fn process_screening(input: &ExaminationInput) -> ScreeningOutcome {
    ScreeningOutcome {
        result: score(input),
        breakdown: ScoreBreakdown::of(input),
        left: input.left.scores(),
        right: input.right.scores(),
    }
}

//! Raw screening form as posted by the multi-step wizard, and its
//! conversion into a typed [`ExaminationInput`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use footscreen_core::models::blood_sugar::BloodSugarKind;

use crate::error::{InstrumentError, ValidationError};
use crate::examination::{BloodSugarReading, ExaminationInput, FootExamination};
use crate::findings::{
    DeformityFinding, Finding, Footwear, NailFinding, RomFinding, SkinFinding,
};

/// Score added to the monofilament result when any neuropathy symptom is reported.
pub const SYMPTOM_BONUS: u8 = 2;

/// Score for a foot that failed the monofilament test at one or more sites.
pub const MONOFILAMENT_LOSS: u8 = 4;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningForm {
    /// `gds`, `gdp` or `hba1c`.
    pub blood_sugar_type: String,
    pub blood_sugar_value: f64,
    pub left: FootForm,
    pub right: FootForm,
    pub footwear_score: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FootForm {
    pub skin_scores: Vec<String>,
    pub nails_scores: Vec<String>,
    pub monofilament_score: u8,
    #[serde(default)]
    pub symptoms: SensationSymptoms,
    pub pain_score: u8,
    pub rubor_score: u8,
    pub temperature_score: u8,
    pub pedal_pulse_score: u8,
    pub deformity_scores: Vec<String>,
    pub rom_scores: Vec<String>,
}

/// Answers to the four neuropathy questions for one foot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SensationSymptoms {
    pub numbness: bool,
    pub tingling: bool,
    pub burning: bool,
    pub crawling: bool,
}

impl SensationSymptoms {
    pub fn any(&self) -> bool {
        self.numbness || self.tingling || self.burning || self.crawling
    }
}

/// Combined sensation score: monofilament result plus the symptom bonus.
pub fn sensation_score(monofilament: u8, symptoms: &SensationSymptoms) -> u8 {
    let bonus = if symptoms.any() { SYMPTOM_BONUS } else { 0 };
    monofilament + bonus
}

impl ScreeningForm {
    /// Every problem with the form. Empty when the form is complete.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if BloodSugarKind::from_code(&self.blood_sugar_type).is_none() {
            errors.push(ValidationError::new(
                "blood_sugar_type",
                format!("unknown blood sugar test '{}'", self.blood_sugar_type),
            ));
        }
        if !self.blood_sugar_value.is_finite() {
            errors.push(ValidationError::new(
                "blood_sugar_value",
                "blood sugar value must be a number",
            ));
        }
        if Footwear::from_score(self.footwear_score).is_none() {
            errors.push(ValidationError::new(
                "footwear_score",
                format!("footwear score {} is outside range [0, 2]", self.footwear_score),
            ));
        }

        self.left.validate("left", &mut errors);
        self.right.validate("right", &mut errors);
        errors
    }

    /// Validate and convert into engine input.
    pub fn into_input(self) -> Result<ExaminationInput, InstrumentError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(InstrumentError::Invalid(errors));
        }

        // Both lookups succeeded in validate().
        let kind = BloodSugarKind::from_code(&self.blood_sugar_type)
            .unwrap_or(BloodSugarKind::CapillaryRandom);
        let footwear = Footwear::from_score(self.footwear_score).unwrap_or_default();

        Ok(ExaminationInput {
            blood_sugar: BloodSugarReading {
                kind,
                value: self.blood_sugar_value,
            },
            left: self.left.to_examination(),
            right: self.right.to_examination(),
            footwear,
        })
    }
}

impl FootForm {
    fn validate(&self, side: &str, errors: &mut Vec<ValidationError>) {
        check_findings::<SkinFinding>(
            &format!("{side}_skin_scores"),
            &self.skin_scores,
            errors,
        );
        check_findings::<NailFinding>(
            &format!("{side}_nails_scores"),
            &self.nails_scores,
            errors,
        );
        check_findings::<DeformityFinding>(
            &format!("{side}_deformity_scores"),
            &self.deformity_scores,
            errors,
        );
        check_findings::<RomFinding>(
            &format!("{side}_rom_scores"),
            &self.rom_scores,
            errors,
        );

        if self.monofilament_score != 0 && self.monofilament_score != MONOFILAMENT_LOSS {
            errors.push(ValidationError::new(
                format!("{side}_monofilament_score"),
                format!(
                    "monofilament score must be 0 or {MONOFILAMENT_LOSS}, got {}",
                    self.monofilament_score
                ),
            ));
        }

        for (name, value) in [
            ("pain_score", self.pain_score),
            ("rubor_score", self.rubor_score),
            ("temperature_score", self.temperature_score),
            ("pedal_pulse_score", self.pedal_pulse_score),
        ] {
            if value > 1 {
                errors.push(ValidationError::new(
                    format!("{side}_{name}"),
                    format!("{name} must be 0 or 1, got {value}"),
                ));
            }
        }
    }

    fn to_examination(&self) -> FootExamination {
        FootExamination {
            skin: parse_findings(&self.skin_scores),
            nails: parse_findings(&self.nails_scores),
            sensation: sensation_score(self.monofilament_score, &self.symptoms),
            pain: self.pain_score,
            rubor: self.rubor_score,
            temperature: self.temperature_score,
            pedal_pulse: self.pedal_pulse_score,
            deformity: parse_findings(&self.deformity_scores),
            range_of_motion: parse_findings(&self.rom_scores),
        }
    }
}

fn check_findings<F: Finding>(field: &str, tags: &[String], errors: &mut Vec<ValidationError>) {
    if tags.is_empty() {
        errors.push(ValidationError::new(
            field,
            format!("select at least one {} finding", F::GROUP),
        ));
    }
    for tag in tags {
        if F::from_tag(tag).is_none() {
            errors.push(ValidationError::new(
                field,
                format!("unrecognised {} finding '{tag}'", F::GROUP),
            ));
        }
    }
}

fn parse_findings<F: Finding>(tags: &[String]) -> BTreeSet<F> {
    tags.iter().filter_map(|t| F::from_tag(t)).collect()
}

//! Blood sugar status from a single lab value.

use footscreen_core::models::blood_sugar::{BloodSugarKind, BloodSugarStatus};

/// Lower bounds for one test kind, most severe first. Bounds are inclusive.
struct Thresholds {
    kind: BloodSugarKind,
    tiers: [(f64, BloodSugarStatus); 2],
}

const THRESHOLDS: [Thresholds; 3] = [
    Thresholds {
        kind: BloodSugarKind::CapillaryRandom,
        tiers: [
            (200.0, BloodSugarStatus::Diabetes),
            (140.0, BloodSugarStatus::Prediabetes),
        ],
    },
    Thresholds {
        kind: BloodSugarKind::FastingPlasma,
        tiers: [
            (126.0, BloodSugarStatus::Diabetes),
            (100.0, BloodSugarStatus::Prediabetes),
        ],
    },
    Thresholds {
        kind: BloodSugarKind::HemoglobinA1c,
        tiers: [
            (6.5, BloodSugarStatus::Diabetes),
            (5.7, BloodSugarStatus::Prediabetes),
        ],
    },
];

/// Classify a lab value. Values below every bound are `Normal`.
pub fn classify_blood_sugar(kind: BloodSugarKind, value: f64) -> BloodSugarStatus {
    THRESHOLDS
        .iter()
        .find(|t| t.kind == kind)
        .and_then(|t| t.tiers.iter().find(|(bound, _)| value >= *bound))
        .map(|(_, status)| *status)
        .unwrap_or(BloodSugarStatus::Normal)
}

/// Classify a lab value given the raw form code (`gds`, `gdp`, `hba1c`).
///
/// An unrecognised code yields `Unknown` rather than an error.
pub fn classify_blood_sugar_code(code: &str, value: f64) -> BloodSugarStatus {
    match BloodSugarKind::from_code(code) {
        Some(kind) => classify_blood_sugar(kind, value),
        None => BloodSugarStatus::Unknown,
    }
}

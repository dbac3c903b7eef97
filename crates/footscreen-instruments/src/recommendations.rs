//! Care recommendations offered for each risk tier.
//!
//! The clinician picks from this list when saving a screening; the chosen
//! items are stored with the record and printed on the report.

use footscreen_core::models::risk::RiskTier;

use crate::error::ValidationError;

const DAILY_INSPECTION: &str = "Daily foot inspection";

const NON_WEIGHT_BEARING_EXERCISE: &str = "Recommend a non-weight-bearing exercise program";

const ORTHOPAEDIC_FOOTWEAR: &str = "Well-fitting orthopaedic footwear with custom cast total-contact \
     foot orthoses and diabetic socks. Footwear must accommodate existing deformities";

const PROFESSIONAL_CARE: &str = "Professional foot and nail care, including treatment of \
     onychomycosis and tinea pedis, if present";

const NEUROPATHIC_PAIN: &str = "Pain management for ischaemic or neuropathic pain";

const SURGICAL_REFERRAL: &str = "Referral to a general, orthopaedic or foot surgeon, if indicated, \
     to manage foot deformity surgically";

const VERY_LOW: &[&str] = &[
    "Education on: risk factors; daily foot inspection; appropriate footwear and foot and nail \
     care; when and how to seek medical attention if needed",
    DAILY_INSPECTION,
    "Appropriate foot and nail care",
    "Well-fitting footwear",
    "Exercise as tolerated",
];

const LOW: &[&str] = &[
    "Education on: risk factors (including LOPS or PAD); daily foot inspection; appropriate \
     footwear and foot and nail care; when and how to seek medical attention if needed",
    DAILY_INSPECTION,
    PROFESSIONAL_CARE,
    "Well-fitting, sensible footwear with custom full-contact foot orthoses and diabetic socks",
    "Vascular studies ± referral for vascular investigation ± vascular surgeon",
    "Pain management for ischaemic pain, if present",
    NON_WEIGHT_BEARING_EXERCISE,
];

const MODERATE: &[&str] = &[
    "Education on: risk factors (including LOPS ± PAD ± foot deformity); daily foot inspection; \
     appropriate footwear and foot and nail care; when and how to seek medical attention if needed",
    DAILY_INSPECTION,
    PROFESSIONAL_CARE,
    ORTHOPAEDIC_FOOTWEAR,
    "Vascular studies ± referral to a vascular surgeon",
    NEUROPATHIC_PAIN,
    SURGICAL_REFERRAL,
    NON_WEIGHT_BEARING_EXERCISE,
];

const HIGH: &[&str] = &[
    "Education on: risk factors (including LOPS ± PAD ± foot deformity); risk of ulcer \
     recurrence; daily foot inspection; appropriate footwear and foot and nail care; when and \
     how to seek medical attention if needed",
    DAILY_INSPECTION,
    PROFESSIONAL_CARE,
    ORTHOPAEDIC_FOOTWEAR,
    "Modified footwear and/or prosthetics based on the level of amputation",
    "Vascular studies ± referral to a vascular surgeon",
    NEUROPATHIC_PAIN,
    NON_WEIGHT_BEARING_EXERCISE,
];

const EMERGENCY: &[&str] = &[
    "Education on: signs of wound infection and wound care; risk factors (LOPS ± PAD ± foot \
     deformity); risk of ulcer recurrence; daily foot inspection; appropriate footwear and foot \
     and nail care; when and how to seek medical attention",
    DAILY_INSPECTION,
    PROFESSIONAL_CARE,
    "Offloading with a total contact cast, removable cast walker or wound shoe to close the \
     ulcer and/or immobilise the Charcot foot",
    "Vascular studies ± referral to a vascular surgeon or limb preservation clinic, as indicated",
    NEUROPATHIC_PAIN,
    SURGICAL_REFERRAL,
    "Referral to infectious diseases to manage infection, if indicated, and/or to a general, \
     orthopaedic or foot surgeon for debridement of infected tissue ± bone, if indicated",
];

/// The recommendations available for a tier, in display order.
pub fn recommendations_for(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::VeryLow => VERY_LOW,
        RiskTier::Low => LOW,
        RiskTier::Moderate => MODERATE,
        RiskTier::High => HIGH,
        RiskTier::Emergency => EMERGENCY,
    }
}

/// Check that every chosen recommendation is offered for `tier`.
pub fn check_selection<S: AsRef<str>>(
    tier: RiskTier,
    chosen: &[S],
) -> Result<(), ValidationError> {
    let offered = recommendations_for(tier);
    match chosen.iter().find(|c| !offered.contains(&c.as_ref())) {
        Some(stray) => Err(ValidationError::new(
            "recommendations",
            format!(
                "'{}' is not a recommendation for {} risk",
                stray.as_ref(),
                tier.label()
            ),
        )),
        None => Ok(()),
    }
}

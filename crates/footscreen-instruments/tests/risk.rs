use std::collections::BTreeSet;

use footscreen_core::models::blood_sugar::BloodSugarKind;
use footscreen_core::models::risk::RiskTier;
use footscreen_instruments::examination::{BloodSugarReading, ExaminationInput, FootExamination};
use footscreen_instruments::findings::{DeformityFinding, Footwear, SkinFinding};
use footscreen_instruments::risk::{RISK_CASCADE, RiskFactors, classify_factors, classify_risk};

fn input(left: FootExamination, right: FootExamination) -> ExaminationInput {
    ExaminationInput {
        blood_sugar: BloodSugarReading {
            kind: BloodSugarKind::HemoglobinA1c,
            value: 7.1,
        },
        left,
        right,
        footwear: Footwear::Appropriate,
    }
}

#[test]
fn ulcer_on_left_is_emergency_regardless_of_sensation() {
    for sensation in [0, 2, 4, 6] {
        let left = FootExamination {
            skin: BTreeSet::from([SkinFinding::Ulcer]),
            sensation,
            ..Default::default()
        };
        assert_eq!(
            classify_risk(&input(left, FootExamination::default())),
            RiskTier::Emergency
        );
    }
}

#[test]
fn ulcer_history_always_wins() {
    let every_combination = (0..32u8).map(|bits| RiskFactors {
        lops: bits & 1 != 0,
        pad: bits & 2 != 0,
        deformity: bits & 4 != 0,
        amputation_history: bits & 8 != 0,
        active_charcot: bits & 16 != 0,
        ulcer_history: true,
    });
    for factors in every_combination {
        assert_eq!(classify_factors(&factors), RiskTier::Emergency);
    }
}

#[test]
fn active_charcot_is_emergency() {
    let right = FootExamination {
        deformity: BTreeSet::from([DeformityFinding::ActiveCharcot]),
        ..Default::default()
    };
    assert_eq!(
        classify_risk(&input(FootExamination::default(), right)),
        RiskTier::Emergency
    );
}

#[test]
fn amputation_with_lops_is_high() {
    let left = FootExamination {
        sensation: 4,
        deformity: BTreeSet::from([DeformityFinding::PriorAmputation]),
        ..Default::default()
    };
    assert_eq!(
        classify_risk(&input(left, FootExamination::default())),
        RiskTier::High
    );
}

#[test]
fn amputation_alone_is_very_low() {
    // A deformity with neither LOPS nor PAD satisfies no rule.
    let left = FootExamination {
        deformity: BTreeSet::from([DeformityFinding::PriorAmputation]),
        ..Default::default()
    };
    assert_eq!(
        classify_risk(&input(left, FootExamination::default())),
        RiskTier::VeryLow
    );
}

#[test]
fn lops_and_pad_on_different_feet_is_moderate() {
    let left = FootExamination {
        sensation: 4,
        ..Default::default()
    };
    let right = FootExamination {
        pedal_pulse: 1,
        ..Default::default()
    };
    let exam = input(left, right);

    let factors = RiskFactors::of(&exam);
    assert!(factors.lops);
    assert!(factors.pad);
    assert!(!factors.deformity);
    assert_eq!(classify_risk(&exam), RiskTier::Moderate);
}

#[test]
fn pad_with_deformity_is_moderate() {
    let left = FootExamination {
        rubor: 1,
        deformity: BTreeSet::from([DeformityFinding::Present]),
        ..Default::default()
    };
    assert_eq!(
        classify_risk(&input(left, FootExamination::default())),
        RiskTier::Moderate
    );
}

#[test]
fn symptoms_alone_are_low() {
    let right = FootExamination {
        sensation: 2,
        ..Default::default()
    };
    assert_eq!(
        classify_risk(&input(FootExamination::default(), right)),
        RiskTier::Low
    );
}

#[test]
fn no_factors_is_very_low() {
    assert_eq!(classify_factors(&RiskFactors::default()), RiskTier::VeryLow);
}

#[test]
fn cascade_runs_from_most_to_least_urgent() {
    let tiers: Vec<RiskTier> = RISK_CASCADE.iter().map(|rule| rule.tier).collect();
    assert_eq!(
        tiers,
        vec![
            RiskTier::Emergency,
            RiskTier::High,
            RiskTier::Moderate,
            RiskTier::Low
        ]
    );
}

#[test]
fn first_matching_rule_wins() {
    // Satisfies High, Moderate and Low; High must be chosen.
    let factors = RiskFactors {
        lops: true,
        pad: true,
        deformity: true,
        amputation_history: true,
        ..Default::default()
    };
    assert_eq!(classify_factors(&factors), RiskTier::High);
}

use std::collections::BTreeSet;

use footscreen_core::models::blood_sugar::BloodSugarKind;
use footscreen_core::models::risk::RiskTier;
use footscreen_instruments::examination::{BloodSugarReading, ExaminationInput, FootExamination};
use footscreen_instruments::findings::{
    DeformityFinding, Footwear, NailFinding, RomFinding, SkinFinding, max_severity,
    max_tag_severity,
};
use footscreen_instruments::scoring::{ScoreBreakdown, compute_total_score};
use footscreen_instruments::{process_screening, score};

fn healthy_foot() -> FootExamination {
    FootExamination {
        skin: BTreeSet::from([SkinFinding::Intact]),
        nails: BTreeSet::from([NailFinding::WellKept]),
        deformity: BTreeSet::from([DeformityFinding::Absent]),
        range_of_motion: BTreeSet::from([RomFinding::Full]),
        ..Default::default()
    }
}

fn input(left: FootExamination, right: FootExamination) -> ExaminationInput {
    ExaminationInput {
        blood_sugar: BloodSugarReading {
            kind: BloodSugarKind::CapillaryRandom,
            value: 110.0,
        },
        left,
        right,
        footwear: Footwear::Appropriate,
    }
}

fn busy_foot() -> FootExamination {
    FootExamination {
        skin: BTreeSet::from([SkinFinding::Dry, SkinFinding::HeavyCallus]),
        nails: BTreeSet::from([NailFinding::Unkempt]),
        sensation: 6,
        pain: 1,
        rubor: 0,
        temperature: 1,
        pedal_pulse: 0,
        deformity: BTreeSet::from([DeformityFinding::Present]),
        range_of_motion: BTreeSet::from([RomFinding::Limited]),
    }
}

#[test]
fn max_severity_of_empty_set_is_zero() {
    assert_eq!(max_severity::<SkinFinding>(&BTreeSet::new()), 0);
    assert_eq!(max_tag_severity::<&str>(&[]), 0);
}

#[test]
fn max_severity_takes_highest_finding() {
    let skin = BTreeSet::from([SkinFinding::Fungus, SkinFinding::HeavyCallus, SkinFinding::Dry]);
    assert_eq!(max_severity(&skin), 2);

    let deformity = BTreeSet::from([DeformityFinding::Absent, DeformityFinding::ActiveCharcot]);
    assert_eq!(max_severity(&deformity), 2);
}

#[test]
fn max_tag_severity_is_order_independent() {
    let forward = ["1_dry", "2", "1_fungus"];
    let backward = ["1_fungus", "2", "1_dry"];
    assert_eq!(max_tag_severity(&forward), 2);
    assert_eq!(max_tag_severity(&backward), 2);
}

#[test]
fn max_tag_severity_reads_leading_integer() {
    assert_eq!(max_tag_severity(&["2_charcot", "1"]), 2);
    assert_eq!(max_tag_severity(&["3"]), 3);
    assert_eq!(max_tag_severity(&["1_callus_thin"]), 1);
}

#[test]
fn malformed_tag_counts_as_zero() {
    assert_eq!(max_tag_severity(&["callus"]), 0);
    assert_eq!(max_tag_severity(&["", "1_dry"]), 1);
}

#[test]
fn all_clear_scores_zero_and_very_low() {
    let exam = input(healthy_foot(), healthy_foot());
    let result = score(&exam);
    assert_eq!(result.total_score, 0);
    assert_eq!(result.risk_classification, RiskTier::VeryLow);
}

#[test]
fn empty_finding_sets_score_zero() {
    let exam = input(FootExamination::default(), FootExamination::default());
    assert_eq!(compute_total_score(&exam), 0);
}

#[test]
fn worse_foot_dominates_each_graded_domain() {
    let mut left = healthy_foot();
    left.skin = BTreeSet::from([SkinFinding::HeavyCallus]);
    left.range_of_motion = BTreeSet::from([RomFinding::Rigid]);
    let mut right = healthy_foot();
    right.nails = BTreeSet::from([NailFinding::Damaged]);
    right.sensation = 4;

    let breakdown = ScoreBreakdown::of(&input(left, right));
    assert_eq!(breakdown.skin, 2);
    assert_eq!(breakdown.nails, 2);
    assert_eq!(breakdown.sensation, 4);
    assert_eq!(breakdown.range_of_motion, 2);
    assert_eq!(breakdown.total(), 10);
}

#[test]
fn swapping_feet_leaves_every_component_unchanged() {
    let mut exam = input(busy_foot(), healthy_foot());
    let before = ScoreBreakdown::of(&exam);
    std::mem::swap(&mut exam.left, &mut exam.right);
    assert_eq!(ScoreBreakdown::of(&exam), before);
}

#[test]
fn each_pad_sign_adds_exactly_one() {
    let mut right = healthy_foot();
    let mut expected = 0;
    for sign in 0..4 {
        match sign {
            0 => right.pain = 1,
            1 => right.rubor = 1,
            2 => right.temperature = 1,
            _ => right.pedal_pulse = 1,
        }
        expected += 1;
        let breakdown = ScoreBreakdown::of(&input(healthy_foot(), right.clone()));
        assert_eq!(breakdown.pad, expected);
    }
    assert_eq!(expected, 4);
}

#[test]
fn pad_signs_on_different_feet_both_count() {
    let mut left = healthy_foot();
    left.pain = 1;
    let mut right = healthy_foot();
    right.pedal_pulse = 1;
    assert_eq!(ScoreBreakdown::of(&input(left, right)).pad, 2);
}

#[test]
fn footwear_is_added_once() {
    let mut exam = input(healthy_foot(), healthy_foot());
    exam.footwear = Footwear::CausingTrauma;
    assert_eq!(compute_total_score(&exam), 2);
}

#[test]
fn total_score_is_deterministic() {
    let exam = input(busy_foot(), healthy_foot());
    let first = compute_total_score(&exam);
    for _ in 0..10 {
        assert_eq!(compute_total_score(&exam), first);
    }
    // skin 2 + nails 1 + sensation 6 + pad 2 + deformity 1 + rom 1
    assert_eq!(first, 13);
}

#[test]
fn process_screening_reports_per_foot_scores() {
    let exam = input(busy_foot(), healthy_foot());
    let outcome = process_screening(&exam);

    assert_eq!(outcome.left.skin, 2);
    assert_eq!(outcome.left.sensation, 6);
    assert_eq!(outcome.left.deformity, 1);
    assert_eq!(outcome.right, healthy_foot().scores());
    assert_eq!(outcome.result.total_score, outcome.breakdown.total());
}

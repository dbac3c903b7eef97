use footscreen_core::models::blood_sugar::{BloodSugarKind, BloodSugarStatus};
use footscreen_core::models::patient::{Education, Gender, PatientDetails};
use footscreen_core::models::risk::RiskTier;
use footscreen_core::models::screening::{FootScores, Screening};
use footscreen_storage::error::StorageError;
use footscreen_storage::{objects, records};
use jiff::civil::date;
use uuid::Uuid;

fn details(name: &str) -> PatientDetails {
    PatientDetails {
        name: name.to_string(),
        date_of_birth: date(1958, 4, 2),
        gender: Gender::Female,
        last_education: Some(Education::SeniorHigh),
        occupation: None,
    }
}

fn screening(patient_id: Uuid) -> Screening {
    let now = jiff::Timestamp::now();
    Screening {
        id: Uuid::new_v4(),
        patient_id,
        blood_sugar_kind: BloodSugarKind::CapillaryRandom,
        blood_sugar_value: 212.0,
        blood_sugar_status: BloodSugarStatus::Diabetes,
        left: FootScores {
            sensation: 4,
            ..Default::default()
        },
        right: FootScores::default(),
        footwear_score: 0,
        total_score: 4,
        risk_classification: RiskTier::Low,
        recommendations: vec![],
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn missing_object_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = records::get_screening(dir.path(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn listing_an_empty_store_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(objects::list_objects(dir.path(), "screenings/").await.unwrap().is_empty());
    assert!(records::list_patients(dir.path()).await.unwrap().is_empty());
}

#[tokio::test]
async fn upsert_matches_on_name_and_birth_date() {
    let dir = tempfile::tempdir().unwrap();
    let now = jiff::Timestamp::now();
    let today = date(2025, 7, 29);

    let first = records::upsert_patient(dir.path(), details("Siti Aminah"), now, today)
        .await
        .unwrap();
    assert_eq!(first.age, 67);

    let mut changed = details("Siti Aminah");
    changed.occupation = Some("Farmer".to_string());
    let second = records::upsert_patient(dir.path(), changed, now, today)
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.occupation.as_deref(), Some("Farmer"));

    let mut other = details("Siti Aminah");
    other.date_of_birth = date(1990, 1, 1);
    let third = records::upsert_patient(dir.path(), other, now, today)
        .await
        .unwrap();
    assert_ne!(third.id, first.id);

    assert_eq!(records::list_patients(dir.path()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn screening_round_trips_and_updates() {
    let dir = tempfile::tempdir().unwrap();
    let patient = records::upsert_patient(
        dir.path(),
        details("Budi"),
        jiff::Timestamp::now(),
        date(2025, 1, 1),
    )
    .await
    .unwrap();

    let stored = screening(patient.id);
    records::save_screening(dir.path(), &stored).await.unwrap();

    let loaded = records::get_screening(dir.path(), stored.id).await.unwrap();
    assert_eq!(loaded.total_score, 4);
    assert_eq!(loaded.left.sensation, 4);

    let updated = records::update_recommendations(
        dir.path(),
        stored.id,
        vec!["Daily foot inspection".to_string()],
        jiff::Timestamp::now(),
    )
    .await
    .unwrap();
    assert_eq!(updated.recommendations, vec!["Daily foot inspection"]);

    records::update_notes(
        dir.path(),
        stored.id,
        Some("Review in 3 months".to_string()),
        jiff::Timestamp::now(),
    )
    .await
    .unwrap();
    let reloaded = records::get_screening(dir.path(), stored.id).await.unwrap();
    assert_eq!(reloaded.notes.as_deref(), Some("Review in 3 months"));
    assert_eq!(reloaded.recommendations.len(), 1);
}

#[tokio::test]
async fn deleting_a_screening_removes_the_patient_and_their_screenings() {
    let dir = tempfile::tempdir().unwrap();
    let now = jiff::Timestamp::now();
    let today = date(2025, 1, 1);
    let budi = records::upsert_patient(dir.path(), details("Budi"), now, today)
        .await
        .unwrap();
    let ani = records::upsert_patient(dir.path(), details("Ani"), now, today)
        .await
        .unwrap();

    let first = screening(budi.id);
    let second = screening(budi.id);
    let kept = screening(ani.id);
    for s in [&first, &second, &kept] {
        records::save_screening(dir.path(), s).await.unwrap();
    }

    let deleted = records::delete_screening(dir.path(), first.id).await.unwrap();
    assert_eq!(deleted, 2);

    let remaining = records::list_screenings(dir.path()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert!(matches!(
        records::get_patient(dir.path(), budi.id).await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(records::get_patient(dir.path(), ani.id).await.is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn listing_skips_records_removed_after_listing() {
    let dir = tempfile::tempdir().unwrap();
    let patient = records::upsert_patient(
        dir.path(),
        details("Budi"),
        jiff::Timestamp::now(),
        date(2025, 1, 1),
    )
    .await
    .unwrap();
    let kept = screening(patient.id);
    records::save_screening(dir.path(), &kept).await.unwrap();

    // Listed like any other record, but reading it finds nothing.
    std::os::unix::fs::symlink(
        dir.path().join("gone.json"),
        dir.path().join("screenings").join("dangling.json"),
    )
    .unwrap();

    let listed = records::list_screenings(dir.path()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept.id);
}

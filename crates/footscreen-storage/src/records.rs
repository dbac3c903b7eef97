//! Patient and screening records.

use std::path::Path;

use uuid::Uuid;

use footscreen_core::keys;
use footscreen_core::models::patient::{Patient, PatientDetails, age_on};
use footscreen_core::models::screening::Screening;

use crate::error::StorageError;
use crate::{json, objects};

pub async fn get_patient(root: &Path, id: Uuid) -> Result<Patient, StorageError> {
    json::load(root, &keys::patient(id)).await
}

pub async fn list_patients(root: &Path) -> Result<Vec<Patient>, StorageError> {
    json::load_all(root, keys::PATIENTS_PREFIX).await
}

/// Find the patient with the same name and date of birth and refresh their
/// demographics, or register a new patient.
pub async fn upsert_patient(
    root: &Path,
    details: PatientDetails,
    now: jiff::Timestamp,
    today: jiff::civil::Date,
) -> Result<Patient, StorageError> {
    let existing = list_patients(root)
        .await?
        .into_iter()
        .find(|p| p.is_same_person(&details.name, details.date_of_birth));

    let age = age_on(details.date_of_birth, today);
    let patient = match existing {
        Some(mut patient) => {
            patient.age = age;
            patient.gender = details.gender;
            patient.last_education = details.last_education;
            patient.occupation = details.occupation;
            patient.updated_at = now;
            tracing::info!(patient_id = %patient.id, "updating existing patient");
            patient
        }
        None => {
            let patient = Patient {
                id: Uuid::new_v4(),
                name: details.name,
                date_of_birth: details.date_of_birth,
                age,
                gender: details.gender,
                last_education: details.last_education,
                occupation: details.occupation,
                created_at: now,
                updated_at: now,
            };
            tracing::info!(patient_id = %patient.id, "registering new patient");
            patient
        }
    };

    json::save(root, &keys::patient(patient.id), &patient).await?;
    Ok(patient)
}

pub async fn get_screening(root: &Path, id: Uuid) -> Result<Screening, StorageError> {
    json::load(root, &keys::screening(id)).await
}

pub async fn list_screenings(root: &Path) -> Result<Vec<Screening>, StorageError> {
    json::load_all(root, keys::SCREENINGS_PREFIX).await
}

pub async fn save_screening(root: &Path, screening: &Screening) -> Result<(), StorageError> {
    json::save(root, &keys::screening(screening.id), screening).await?;
    tracing::info!(
        screening_id = %screening.id,
        patient_id = %screening.patient_id,
        risk = screening.risk_classification.code(),
        total_score = screening.total_score,
        "screening saved"
    );
    Ok(())
}

/// Replace the chosen recommendations on a stored screening.
pub async fn update_recommendations(
    root: &Path,
    id: Uuid,
    recommendations: Vec<String>,
    now: jiff::Timestamp,
) -> Result<Screening, StorageError> {
    let mut screening = get_screening(root, id).await?;
    screening.recommendations = recommendations;
    screening.updated_at = now;
    json::save(root, &keys::screening(id), &screening).await?;
    Ok(screening)
}

/// Replace the clinician's notes on a stored screening.
pub async fn update_notes(
    root: &Path,
    id: Uuid,
    notes: Option<String>,
    now: jiff::Timestamp,
) -> Result<Screening, StorageError> {
    let mut screening = get_screening(root, id).await?;
    screening.notes = notes;
    screening.updated_at = now;
    json::save(root, &keys::screening(id), &screening).await?;
    Ok(screening)
}

/// Delete a screening together with its patient.
///
/// Removing the patient removes every screening that belongs to them.
/// Returns the number of screenings deleted.
pub async fn delete_screening(root: &Path, id: Uuid) -> Result<usize, StorageError> {
    let screening = get_screening(root, id).await?;
    let patient_id = screening.patient_id;

    let mut deleted = 0;
    for other in list_screenings(root).await? {
        if other.patient_id == patient_id {
            objects::delete_object(root, &keys::screening(other.id)).await?;
            deleted += 1;
        }
    }
    objects::delete_object(root, &keys::patient(patient_id)).await?;

    tracing::info!(screening_id = %id, %patient_id, deleted, "screening and patient deleted");
    Ok(deleted)
}

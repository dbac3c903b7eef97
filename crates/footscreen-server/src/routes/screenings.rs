use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use footscreen_core::models::patient::{Patient, PatientDetails};
use footscreen_core::models::screening::Screening;
use footscreen_core::report::report_filename;
use footscreen_instruments::error::ValidationError;
use footscreen_instruments::form::ScreeningForm;
use footscreen_instruments::recommendations::{check_selection, recommendations_for};
use footscreen_instruments::scoring::{ScoreBreakdown, ScoringResult};
use footscreen_instruments::{ScreeningOutcome, process_screening};
use footscreen_storage::error::StorageError;
use footscreen_storage::history::{
    self, HistoryPage, HistoryQuery, SortDirection, SortField,
};
use footscreen_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub const MAX_NOTES_LEN: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct CreateScreening {
    pub patient: PatientDetails,
    pub form: ScreeningForm,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecommendations {
    pub recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNotes {
    pub notes: Option<String>,
}

/// Query string for the history list. `toggle` applies a column-header
/// click on top of the given sort.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub sort_by: Option<SortField>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub toggle: Option<SortField>,
}

impl ListParams {
    fn into_query(self) -> HistoryQuery {
        let mut query = HistoryQuery::default();
        query.set_search(self.search);
        if let Some(sort_by) = self.sort_by {
            query.sort_by = sort_by;
        }
        if let Some(direction) = self.direction {
            query.direction = direction;
        }
        if let Some(page) = self.page {
            query.page = page;
        }
        if let Some(field) = self.toggle {
            query.toggle_sort(field);
        }
        query
    }
}

#[derive(Serialize)]
pub struct ScorePreview {
    pub result: ScoringResult,
    pub breakdown: ScoreBreakdown,
    pub recommendations: &'static [&'static str],
}

#[derive(Serialize)]
pub struct ScreeningDetail {
    pub screening: Screening,
    pub patient: Option<Patient>,
    pub available_recommendations: &'static [&'static str],
    pub report_filename: Option<String>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub query: HistoryQuery,
    #[serde(flatten)]
    pub page: HistoryPage,
}

#[derive(Serialize)]
pub struct Deleted {
    pub screenings_deleted: usize,
}

/// Score a form without storing anything.
pub async fn score_screening(Json(form): Json<ScreeningForm>) -> Result<Json<ScorePreview>, ApiError> {
    let input = form.into_input()?;
    let outcome = process_screening(&input);
    Ok(Json(ScorePreview {
        result: outcome.result,
        breakdown: outcome.breakdown,
        recommendations: recommendations_for(outcome.result.risk_classification),
    }))
}

pub async fn create_screening(
    State(state): State<AppState>,
    Json(request): Json<CreateScreening>,
) -> Result<Json<ScreeningDetail>, ApiError> {
    if request.patient.name.trim().is_empty() {
        return Err(ValidationError::new("name", "patient name is required").into());
    }
    let notes = clean_notes(request.notes)?;

    let input = request.form.into_input()?;
    let ScreeningOutcome { result, left, right, .. } = process_screening(&input);
    check_selection(result.risk_classification, &request.recommendations)?;

    let now = jiff::Timestamp::now();
    let today = jiff::Zoned::now().date();

    let _guard = state.write_lock.lock().await;
    let patient = records::upsert_patient(&state.data_dir, request.patient, now, today).await?;

    let screening = Screening {
        id: Uuid::new_v4(),
        patient_id: patient.id,
        blood_sugar_kind: input.blood_sugar.kind,
        blood_sugar_value: input.blood_sugar.value,
        blood_sugar_status: result.blood_sugar_status,
        left,
        right,
        footwear_score: input.footwear.score(),
        total_score: result.total_score,
        risk_classification: result.risk_classification,
        recommendations: request.recommendations,
        notes,
        created_at: now,
        updated_at: now,
    };
    records::save_screening(&state.data_dir, &screening).await?;

    Ok(Json(detail(screening, Some(patient))))
}

pub async fn list_screenings(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let query = params.into_query();
    let page = history::search_history(&state.data_dir, &query, state.page_size).await?;
    Ok(Json(HistoryResponse { query, page }))
}

pub async fn get_screening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningDetail>, ApiError> {
    let screening = records::get_screening(&state.data_dir, id).await?;
    let patient = match records::get_patient(&state.data_dir, screening.patient_id).await {
        Ok(patient) => Some(patient),
        Err(StorageError::NotFound { .. }) => {
            tracing::warn!(screening_id = %id, patient_id = %screening.patient_id, "patient record missing");
            None
        }
        Err(e) => return Err(e.into()),
    };
    Ok(Json(detail(screening, patient)))
}

pub async fn update_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRecommendations>,
) -> Result<Json<Screening>, ApiError> {
    let _guard = state.write_lock.lock().await;
    let current = records::get_screening(&state.data_dir, id).await?;
    check_selection(current.risk_classification, &body.recommendations)?;

    let screening = records::update_recommendations(
        &state.data_dir,
        id,
        body.recommendations,
        jiff::Timestamp::now(),
    )
    .await?;
    Ok(Json(screening))
}

pub async fn update_notes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateNotes>,
) -> Result<Json<Screening>, ApiError> {
    let notes = clean_notes(body.notes)?;

    let _guard = state.write_lock.lock().await;
    let screening =
        records::update_notes(&state.data_dir, id, notes, jiff::Timestamp::now()).await?;
    Ok(Json(screening))
}

pub async fn delete_screening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Deleted>, ApiError> {
    let _guard = state.write_lock.lock().await;
    let screenings_deleted = records::delete_screening(&state.data_dir, id).await?;
    Ok(Json(Deleted { screenings_deleted }))
}

/// Blank notes are stored as none.
fn clean_notes(notes: Option<String>) -> Result<Option<String>, ValidationError> {
    let notes = notes.filter(|n| !n.trim().is_empty());
    if notes.as_ref().is_some_and(|n| n.chars().count() > MAX_NOTES_LEN) {
        return Err(ValidationError::new(
            "notes",
            format!("notes must be at most {MAX_NOTES_LEN} characters"),
        ));
    }
    Ok(notes)
}

fn detail(screening: Screening, patient: Option<Patient>) -> ScreeningDetail {
    let report_filename = patient.as_ref().map(|p| {
        let screened_on = screening
            .created_at
            .to_zoned(jiff::tz::TimeZone::system())
            .date();
        report_filename(&p.name, screened_on)
    });
    ScreeningDetail {
        available_recommendations: recommendations_for(screening.risk_classification),
        screening,
        patient,
        report_filename,
    }
}

//! Screening history: search by patient name, sort by column, paginate.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use footscreen_core::models::patient::Patient;
use footscreen_core::models::screening::Screening;

use crate::error::StorageError;
use crate::records;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortField {
    #[default]
    CreatedAt,
    TotalScore,
    RiskClassification,
    PatientName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// History view state. Defaults to newest first, page 1, no search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub direction: SortDirection,
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort_by: SortField::default(),
            direction: SortDirection::default(),
            page: first_page(),
        }
    }
}

impl HistoryQuery {
    /// Clicking the current sort column flips its direction; clicking another
    /// column sorts it ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_by == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort_by = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// A new search term starts again from the first page.
    pub fn set_search(&mut self, search: Option<String>) {
        self.search = search.filter(|s| !s.trim().is_empty());
        self.page = first_page();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub screening: Screening,
    /// `None` if the patient record is missing.
    pub patient: Option<Patient>,
}

impl HistoryEntry {
    fn patient_name(&self) -> &str {
        self.patient.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryPage {
    pub entries: Vec<HistoryEntry>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Run a history query against the store.
pub async fn search_history(
    root: &Path,
    query: &HistoryQuery,
    page_size: usize,
) -> Result<HistoryPage, StorageError> {
    let patients: HashMap<Uuid, Patient> = records::list_patients(root)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let entries = records::list_screenings(root)
        .await?
        .into_iter()
        .map(|screening| {
            let patient = patients.get(&screening.patient_id).cloned();
            HistoryEntry { screening, patient }
        })
        .collect();

    Ok(select(entries, query, page_size))
}

/// Filter, sort and paginate entries. Pure, so the view logic is testable
/// without a store.
pub fn select(mut entries: Vec<HistoryEntry>, query: &HistoryQuery, page_size: usize) -> HistoryPage {
    if let Some(term) = query.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let needle = term.to_lowercase();
        entries.retain(|e| {
            e.patient
                .as_ref()
                .is_some_and(|p| p.name.to_lowercase().contains(&needle))
        });
    }

    entries.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_by).then_with(|| {
            a.screening.created_at.cmp(&b.screening.created_at)
        });
        match query.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let page_size = page_size.max(1);
    let total = entries.len();
    let total_pages = total.div_ceil(page_size);
    let page = query.page.max(1);

    let entries = entries
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    HistoryPage {
        entries,
        page,
        page_size,
        total,
        total_pages,
    }
}

fn compare(a: &HistoryEntry, b: &HistoryEntry, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => a.screening.created_at.cmp(&b.screening.created_at),
        SortField::TotalScore => a.screening.total_score.cmp(&b.screening.total_score),
        SortField::RiskClassification => a
            .screening
            .risk_classification
            .cmp(&b.screening.risk_classification),
        SortField::PatientName => a
            .patient_name()
            .to_lowercase()
            .cmp(&b.patient_name().to_lowercase()),
    }
}

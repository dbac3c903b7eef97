use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: jiff::civil::Date,
    /// Completed years at the time of the last screening.
    pub age: u8,
    pub gender: Gender,
    pub last_education: Option<Education>,
    pub occupation: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Patient {
    /// Two records describe the same patient when name and date of birth match.
    pub fn is_same_person(&self, name: &str, date_of_birth: jiff::civil::Date) -> bool {
        self.name == name && self.date_of_birth == date_of_birth
    }
}

/// Completed years between `date_of_birth` and `on`. Zero if `on` precedes birth.
pub fn age_on(date_of_birth: jiff::civil::Date, on: jiff::civil::Date) -> u8 {
    let mut years = i32::from(on.year()) - i32::from(date_of_birth.year());
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years.clamp(0, i32::from(u8::MAX)) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Education {
    NoSchooling,
    Primary,
    JuniorHigh,
    SeniorHigh,
    Diploma,
    Bachelor,
    Master,
    Doctorate,
}

/// Identity and demographics as entered on the first step of the screening.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDetails {
    pub name: String,
    pub date_of_birth: jiff::civil::Date,
    pub gender: Gender,
    #[serde(default)]
    pub last_education: Option<Education>,
    #[serde(default)]
    pub occupation: Option<String>,
}

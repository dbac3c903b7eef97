use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Inlow's risk classification, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    VeryLow,
    Low,
    Moderate,
    High,
    Emergency,
}

impl RiskTier {
    pub const ALL: [RiskTier; 5] = [
        RiskTier::VeryLow,
        RiskTier::Low,
        RiskTier::Moderate,
        RiskTier::High,
        RiskTier::Emergency,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            RiskTier::VeryLow => "very_low",
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
            RiskTier::Emergency => "emergency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::VeryLow => "Very Low",
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
            RiskTier::Emergency => "Emergency",
        }
    }

    /// Badge colour used by the result and report views.
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::VeryLow => "#058a84",
            RiskTier::Low => "#ffd867",
            RiskTier::Moderate => "#faba5c",
            RiskTier::High => "#ef810b",
            RiskTier::Emergency => "#d0222a",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskTier::ALL
            .into_iter()
            .find(|tier| tier.code() == s)
            .ok_or_else(|| CoreError::UnknownCode {
                kind: "risk tier",
                code: s.to_string(),
            })
    }
}

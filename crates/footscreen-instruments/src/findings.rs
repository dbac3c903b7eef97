//! Multi-select examination findings.
//!
//! Each observation group is a closed vocabulary. Every variant carries a
//! fixed severity and serialises to the tag value the screening form posts.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A finding from one multi-select observation group.
pub trait Finding: Copy + Ord + 'static {
    /// Group name used in validation messages.
    const GROUP: &'static str;

    /// Every finding in the group, in form order.
    const ALL: &'static [Self];

    fn severity(self) -> u8;

    /// Form tag, e.g. `"1_dry"`.
    fn tag(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.tag() == tag)
    }
}

/// Highest severity in a set of findings; 0 when the set is empty.
pub fn max_severity<F: Finding>(findings: &BTreeSet<F>) -> u8 {
    findings.iter().map(|f| f.severity()).max().unwrap_or(0)
}

/// Highest severity in a list of raw form tags.
///
/// The severity of a tag is the integer before its first `_`. Tags without a
/// leading integer count as 0.
pub fn max_tag_severity<S: AsRef<str>>(tags: &[S]) -> u8 {
    tags.iter()
        .map(|t| tag_severity(t.as_ref()))
        .max()
        .unwrap_or(0)
}

fn tag_severity(tag: &str) -> u8 {
    let rank = tag.split('_').next().unwrap_or_default().trim();
    let end = rank
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rank.len());
    match rank[..end].parse::<u64>() {
        Ok(n) => n.min(u64::from(u8::MAX)) as u8,
        Err(_) => {
            tracing::warn!(tag, "finding tag has no numeric severity, counting as 0");
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SkinFinding {
    #[serde(rename = "0")]
    Intact,
    #[serde(rename = "1_dry")]
    Dry,
    #[serde(rename = "1_fungus")]
    Fungus,
    #[serde(rename = "1_callus_thin")]
    LightCallus,
    #[serde(rename = "2")]
    HeavyCallus,
    /// Open ulcer or history of a previous ulcer.
    #[serde(rename = "3")]
    Ulcer,
}

impl Finding for SkinFinding {
    const GROUP: &'static str = "skin";

    const ALL: &'static [Self] = &[
        SkinFinding::Intact,
        SkinFinding::Dry,
        SkinFinding::Fungus,
        SkinFinding::LightCallus,
        SkinFinding::HeavyCallus,
        SkinFinding::Ulcer,
    ];

    fn severity(self) -> u8 {
        match self {
            SkinFinding::Intact => 0,
            SkinFinding::Dry | SkinFinding::Fungus | SkinFinding::LightCallus => 1,
            SkinFinding::HeavyCallus => 2,
            SkinFinding::Ulcer => 3,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            SkinFinding::Intact => "0",
            SkinFinding::Dry => "1_dry",
            SkinFinding::Fungus => "1_fungus",
            SkinFinding::LightCallus => "1_callus_thin",
            SkinFinding::HeavyCallus => "2",
            SkinFinding::Ulcer => "3",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SkinFinding::Intact => "Intact skin, no fungal disease or callus build-up",
            SkinFinding::Dry => "Dry skin",
            SkinFinding::Fungus => "Fungal infection",
            SkinFinding::LightCallus => "Light callus build-up",
            SkinFinding::HeavyCallus => "Heavy callus build-up",
            SkinFinding::Ulcer => "Open ulcer or history of previous ulcer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum NailFinding {
    #[serde(rename = "0")]
    WellKept,
    #[serde(rename = "1")]
    Unkempt,
    #[serde(rename = "2")]
    Damaged,
}

impl Finding for NailFinding {
    const GROUP: &'static str = "nails";

    const ALL: &'static [Self] = &[
        NailFinding::WellKept,
        NailFinding::Unkempt,
        NailFinding::Damaged,
    ];

    fn severity(self) -> u8 {
        match self {
            NailFinding::WellKept => 0,
            NailFinding::Unkempt => 1,
            NailFinding::Damaged => 2,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            NailFinding::WellKept => "0",
            NailFinding::Unkempt => "1",
            NailFinding::Damaged => "2",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NailFinding::WellKept => "Well kept",
            NailFinding::Unkempt => "Unkempt and ragged",
            NailFinding::Damaged => "Thick, damaged or infected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DeformityFinding {
    #[serde(rename = "0")]
    Absent,
    /// Dropped metatarsal heads, bunion, chronic Charcot, hammertoes.
    #[serde(rename = "1")]
    Present,
    #[serde(rename = "2_amputation")]
    PriorAmputation,
    #[serde(rename = "2_charcot")]
    ActiveCharcot,
}

impl Finding for DeformityFinding {
    const GROUP: &'static str = "deformity";

    const ALL: &'static [Self] = &[
        DeformityFinding::Absent,
        DeformityFinding::Present,
        DeformityFinding::PriorAmputation,
        DeformityFinding::ActiveCharcot,
    ];

    fn severity(self) -> u8 {
        match self {
            DeformityFinding::Absent => 0,
            DeformityFinding::Present => 1,
            DeformityFinding::PriorAmputation | DeformityFinding::ActiveCharcot => 2,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            DeformityFinding::Absent => "0",
            DeformityFinding::Present => "1",
            DeformityFinding::PriorAmputation => "2_amputation",
            DeformityFinding::ActiveCharcot => "2_charcot",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DeformityFinding::Absent => "No deformity",
            DeformityFinding::Present => {
                "Deformity (e.g. dropped metatarsal heads, bunion, chronic Charcot, hammertoes)"
            }
            DeformityFinding::PriorAmputation => "Previous lower-extremity amputation",
            DeformityFinding::ActiveCharcot => "Active Charcot foot (warmth and redness)",
        }
    }
}

/// Hallux range of motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RomFinding {
    #[serde(rename = "0")]
    Full,
    #[serde(rename = "1")]
    Limited,
    #[serde(rename = "2")]
    Rigid,
}

impl Finding for RomFinding {
    const GROUP: &'static str = "range of motion";

    const ALL: &'static [Self] = &[RomFinding::Full, RomFinding::Limited, RomFinding::Rigid];

    fn severity(self) -> u8 {
        match self {
            RomFinding::Full => 0,
            RomFinding::Limited => 1,
            RomFinding::Rigid => 2,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            RomFinding::Full => "0",
            RomFinding::Limited => "1",
            RomFinding::Rigid => "2",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RomFinding::Full => "Full range of motion",
            RomFinding::Limited => "Limited range of motion (hallux limitus)",
            RomFinding::Rigid => "No range of motion (hallux rigidus)",
        }
    }
}

/// Footwear assessment, scored once for both feet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Footwear {
    #[default]
    Appropriate,
    Inappropriate,
    CausingTrauma,
}

impl Footwear {
    pub fn score(self) -> u8 {
        match self {
            Footwear::Appropriate => 0,
            Footwear::Inappropriate => 1,
            Footwear::CausingTrauma => 2,
        }
    }

    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            0 => Some(Footwear::Appropriate),
            1 => Some(Footwear::Inappropriate),
            2 => Some(Footwear::CausingTrauma),
            _ => None,
        }
    }
}

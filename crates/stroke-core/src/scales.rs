//! NIHSS and mRS scale definitions.
//!
//! The NIHSS has 15 scored subscales in a fixed order. Each has its own
//! range (0–2, 0–3 or 0–4); the motor items, limb ataxia and dysarthria may
//! also be recorded as untestable (amputation, joint fusion, intubation).

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::FieldError;
use crate::scoring::{NihssScore, ScoreRange, UNTESTABLE_MARKER};

/// One of the 15 NIHSS subscales, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum NihssItem {
    Loc,
    LocQuestions,
    LocCommands,
    Gaze,
    Visual,
    Facial,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    Ataxia,
    Sensory,
    Language,
    Dysarthria,
    Extinction,
}

pub const NIHSS_ITEM_COUNT: usize = 15;

/// Highest total the scale can produce.
pub const NIHSS_MAX_TOTAL: u32 = 42;

impl NihssItem {
    pub const ALL: [NihssItem; NIHSS_ITEM_COUNT] = [
        NihssItem::Loc,
        NihssItem::LocQuestions,
        NihssItem::LocCommands,
        NihssItem::Gaze,
        NihssItem::Visual,
        NihssItem::Facial,
        NihssItem::LeftArm,
        NihssItem::RightArm,
        NihssItem::LeftLeg,
        NihssItem::RightLeg,
        NihssItem::Ataxia,
        NihssItem::Sensory,
        NihssItem::Language,
        NihssItem::Dysarthria,
        NihssItem::Extinction,
    ];

    /// Position in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Form key, e.g. `locQuestions`.
    pub fn key(self) -> &'static str {
        match self {
            NihssItem::Loc => "loc",
            NihssItem::LocQuestions => "locQuestions",
            NihssItem::LocCommands => "locCommands",
            NihssItem::Gaze => "gaze",
            NihssItem::Visual => "visual",
            NihssItem::Facial => "facial",
            NihssItem::LeftArm => "leftArm",
            NihssItem::RightArm => "rightArm",
            NihssItem::LeftLeg => "leftLeg",
            NihssItem::RightLeg => "rightLeg",
            NihssItem::Ataxia => "ataxia",
            NihssItem::Sensory => "sensory",
            NihssItem::Language => "language",
            NihssItem::Dysarthria => "dysarthria",
            NihssItem::Extinction => "extinction",
        }
    }

    pub fn from_key(key: &str) -> Option<NihssItem> {
        NihssItem::ALL.into_iter().find(|item| item.key() == key)
    }

    pub fn definition(self) -> &'static ScaleItem {
        &nihss_items()[self.index()]
    }

    pub fn label(self) -> &'static str {
        self.definition().label
    }

    pub fn range(self) -> ScoreRange {
        self.definition().range
    }

    pub fn untestable_allowed(self) -> bool {
        self.definition().untestable_allowed
    }

    /// Parse the text the form sends for this subscale.
    ///
    /// Empty text clears the subscale. Surrounding whitespace is ignored.
    pub fn parse_score(self, raw: &str) -> Result<NihssScore, FieldError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(NihssScore::Unset);
        }
        if raw == UNTESTABLE_MARKER {
            if self.untestable_allowed() {
                return Ok(NihssScore::Untestable);
            }
            return Err(FieldError::UntestableNotAllowed {
                field: format!("nihss.{}", self.key()),
            });
        }
        let field = format!("nihss.{}", self.key());
        self.range().parse(&field, raw).map(NihssScore::Score)
    }
}

impl fmt::Display for NihssItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Definition of one scored subscale.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScaleItem {
    pub item: NihssItem,
    pub label: &'static str,
    pub range: ScoreRange,
    pub untestable_allowed: bool,
}

/// All NIHSS subscale definitions in canonical order.
pub fn nihss_items() -> &'static [ScaleItem] {
    static ITEMS: std::sync::LazyLock<Vec<ScaleItem>> = std::sync::LazyLock::new(|| {
        let r2 = ScoreRange::new(0, 2);
        let r3 = ScoreRange::new(0, 3);
        let r4 = ScoreRange::new(0, 4);

        vec![
            item(NihssItem::Loc, "LOC", r3, false),
            item(NihssItem::LocQuestions, "LOC Questions", r2, false),
            item(NihssItem::LocCommands, "LOC Commands", r2, false),
            item(NihssItem::Gaze, "Gaze", r2, false),
            item(NihssItem::Visual, "Visual Fields", r3, false),
            item(NihssItem::Facial, "Facial Palsy", r3, false),
            item(NihssItem::LeftArm, "Left Arm", r4, true),
            item(NihssItem::RightArm, "Right Arm", r4, true),
            item(NihssItem::LeftLeg, "Left Leg", r4, true),
            item(NihssItem::RightLeg, "Right Leg", r4, true),
            item(NihssItem::Ataxia, "Limb Ataxia", r2, true),
            item(NihssItem::Sensory, "Sensory", r2, false),
            item(NihssItem::Language, "Language", r3, false),
            item(NihssItem::Dysarthria, "Dysarthria", r2, true),
            item(NihssItem::Extinction, "Extinction/Inattention", r2, false),
        ]
    });
    &ITEMS
}

fn item(item: NihssItem, label: &'static str, range: ScoreRange, untestable_allowed: bool) -> ScaleItem {
    ScaleItem {
        item,
        label,
        range,
        untestable_allowed,
    }
}

/// Severity band for an NIHSS total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NihssSeverity {
    NoSymptoms,
    Minor,
    Moderate,
    ModerateToSevere,
    Severe,
}

impl NihssSeverity {
    pub fn from_total(total: u32) -> Self {
        match total {
            0 => NihssSeverity::NoSymptoms,
            1..=4 => NihssSeverity::Minor,
            5..=15 => NihssSeverity::Moderate,
            16..=20 => NihssSeverity::ModerateToSevere,
            _ => NihssSeverity::Severe,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NihssSeverity::NoSymptoms => "No stroke symptoms",
            NihssSeverity::Minor => "Minor stroke",
            NihssSeverity::Moderate => "Moderate stroke",
            NihssSeverity::ModerateToSevere => "Moderate to severe stroke",
            NihssSeverity::Severe => "Severe stroke",
        }
    }
}

/// Modified Rankin Scale, 0 (no symptoms) to 6 (dead).
pub const MRS_RANGE: ScoreRange = ScoreRange::new(0, 6);

const MRS_GRADES: [&str; 7] = [
    "No symptoms",
    "No significant disability",
    "Slight disability",
    "Moderate disability",
    "Moderately severe disability",
    "Severe disability",
    "Dead",
];

pub fn mrs_description(grade: u8) -> Option<&'static str> {
    MRS_GRADES.get(usize::from(grade)).copied()
}

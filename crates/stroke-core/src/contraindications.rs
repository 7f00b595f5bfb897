//! Thrombolytic (TNK/tPA) contraindication checklist.
//!
//! Sixteen fixed criteria in four categories. The label sentences are
//! clinical reference text and are emitted verbatim in the alert message.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContraindicationCategory {
    PatientHistory,
    Clinical,
    Hematologic,
    HeadCt,
}

impl ContraindicationCategory {
    pub fn name(self) -> &'static str {
        match self {
            ContraindicationCategory::PatientHistory => "Patient History",
            ContraindicationCategory::Clinical => "Clinical",
            ContraindicationCategory::Hematologic => "Hematologic",
            ContraindicationCategory::HeadCt => "Head CT",
        }
    }
}

/// One contraindication checkbox, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Contraindication {
    PriorIntracranialHemorrhage,
    RecentStrokeOrHeadTrauma,
    RecentIntracranialSurgery,
    GiMalignancyOrBleed,
    SymptomsOfSubarachnoidHemorrhage,
    ElevatedBloodPressure,
    InfectiveEndocarditis,
    AorticArchDissection,
    PlateletUnder100k,
    ElevatedInr,
    RecentLowMolecularWeightHeparin,
    RecentDirectOralAnticoagulant,
    EvidenceOfHemorrhage,
    ExtensiveHypodensity,
    IntraAxialNeoplasm,
    UnsecuredVascularMalformation,
}

pub const CONTRAINDICATION_COUNT: usize = 16;

impl Contraindication {
    pub const ALL: [Contraindication; CONTRAINDICATION_COUNT] = [
        Contraindication::PriorIntracranialHemorrhage,
        Contraindication::RecentStrokeOrHeadTrauma,
        Contraindication::RecentIntracranialSurgery,
        Contraindication::GiMalignancyOrBleed,
        Contraindication::SymptomsOfSubarachnoidHemorrhage,
        Contraindication::ElevatedBloodPressure,
        Contraindication::InfectiveEndocarditis,
        Contraindication::AorticArchDissection,
        Contraindication::PlateletUnder100k,
        Contraindication::ElevatedInr,
        Contraindication::RecentLowMolecularWeightHeparin,
        Contraindication::RecentDirectOralAnticoagulant,
        Contraindication::EvidenceOfHemorrhage,
        Contraindication::ExtensiveHypodensity,
        Contraindication::IntraAxialNeoplasm,
        Contraindication::UnsecuredVascularMalformation,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Form key, e.g. `plateletUnder100k`.
    pub fn key(self) -> &'static str {
        match self {
            Contraindication::PriorIntracranialHemorrhage => "priorIntracranialHemorrhage",
            Contraindication::RecentStrokeOrHeadTrauma => "recentStrokeOrHeadTrauma",
            Contraindication::RecentIntracranialSurgery => "recentIntracranialSurgery",
            Contraindication::GiMalignancyOrBleed => "giMalignancyOrBleed",
            Contraindication::SymptomsOfSubarachnoidHemorrhage => {
                "symptomsOfSubarachnoidHemorrhage"
            }
            Contraindication::ElevatedBloodPressure => "elevatedBloodPressure",
            Contraindication::InfectiveEndocarditis => "infectiveEndocarditis",
            Contraindication::AorticArchDissection => "aorticArchDissection",
            Contraindication::PlateletUnder100k => "plateletUnder100k",
            Contraindication::ElevatedInr => "elevatedInr",
            Contraindication::RecentLowMolecularWeightHeparin => "recentLowMolecularWeightHeparin",
            Contraindication::RecentDirectOralAnticoagulant => "recentDirectOralAnticoagulant",
            Contraindication::EvidenceOfHemorrhage => "evidenceOfHemorrhage",
            Contraindication::ExtensiveHypodensity => "extensiveHypodensity",
            Contraindication::IntraAxialNeoplasm => "intraAxialNeoplasm",
            Contraindication::UnsecuredVascularMalformation => "unsecuredVascularMalformation",
        }
    }

    pub fn from_key(key: &str) -> Option<Contraindication> {
        Contraindication::ALL.into_iter().find(|c| c.key() == key)
    }

    pub fn category(self) -> ContraindicationCategory {
        use Contraindication::*;
        match self {
            PriorIntracranialHemorrhage
            | RecentStrokeOrHeadTrauma
            | RecentIntracranialSurgery
            | GiMalignancyOrBleed => ContraindicationCategory::PatientHistory,
            SymptomsOfSubarachnoidHemorrhage
            | ElevatedBloodPressure
            | InfectiveEndocarditis
            | AorticArchDissection => ContraindicationCategory::Clinical,
            PlateletUnder100k
            | ElevatedInr
            | RecentLowMolecularWeightHeparin
            | RecentDirectOralAnticoagulant => ContraindicationCategory::Hematologic,
            EvidenceOfHemorrhage
            | ExtensiveHypodensity
            | IntraAxialNeoplasm
            | UnsecuredVascularMalformation => ContraindicationCategory::HeadCt,
        }
    }

    /// The clinical criterion sentence for this checkbox.
    pub fn label(self) -> Cow<'static, str> {
        render_contraindication_label(self.key())
    }
}

static LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("priorIntracranialHemorrhage", "Prior intracranial hemorrhage"),
        (
            "recentStrokeOrHeadTrauma",
            "Ischemic stroke or severe head trauma within the past 3 months",
        ),
        (
            "recentIntracranialSurgery",
            "Intracranial or intraspinal surgery within the past 3 months",
        ),
        (
            "giMalignancyOrBleed",
            "Structural gastrointestinal malignancy or gastrointestinal bleeding within the past 21 days",
        ),
        (
            "symptomsOfSubarachnoidHemorrhage",
            "Symptoms and signs most consistent with subarachnoid hemorrhage",
        ),
        (
            "elevatedBloodPressure",
            "Persistent blood pressure elevation (systolic >185 mmHg or diastolic >110 mmHg) despite treatment",
        ),
        (
            "infectiveEndocarditis",
            "Symptoms consistent with infective endocarditis",
        ),
        (
            "aorticArchDissection",
            "Known or suspected aortic arch dissection",
        ),
        ("plateletUnder100k", "Platelet count <100,000/mm3"),
        (
            "elevatedInr",
            "INR >1.7, aPTT >40 seconds, or PT >15 seconds",
        ),
        (
            "recentLowMolecularWeightHeparin",
            "Treatment-dose low-molecular-weight heparin within the previous 24 hours",
        ),
        (
            "recentDirectOralAnticoagulant",
            "Direct thrombin inhibitor or direct factor Xa inhibitor taken within the past 48 hours",
        ),
        (
            "evidenceOfHemorrhage",
            "CT demonstrates acute intracranial hemorrhage",
        ),
        (
            "extensiveHypodensity",
            "CT demonstrates extensive regions of clear hypodensity consistent with irreversible injury",
        ),
        (
            "intraAxialNeoplasm",
            "CT demonstrates intra-axial intracranial neoplasm",
        ),
        (
            "unsecuredVascularMalformation",
            "CT demonstrates unsecured intracranial vascular malformation or giant aneurysm",
        ),
    ])
});

/// Human-readable criterion for a contraindication key.
///
/// Keys outside the table are split on their internal capitals and
/// lowercased (`bloodSugar` becomes `blood sugar`).
pub fn render_contraindication_label(key: &str) -> Cow<'static, str> {
    match LABELS.get(key) {
        Some(label) => Cow::Borrowed(*label),
        None => Cow::Owned(split_camel_case(key)),
    }
}

fn split_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch.is_uppercase() && i > 0 {
            out.push(' ');
        }
        out.extend(ch.to_lowercase());
    }
    out
}

//! The in-memory assessment record and the edits the form applies to it.

use std::borrow::Cow;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::contraindications::{CONTRAINDICATION_COUNT, Contraindication};
use crate::error::FieldError;
use crate::scales::{MRS_RANGE, NIHSS_ITEM_COUNT, NihssItem};
use crate::scoring::NihssScore;

/// Per-subscale NIHSS values, indexed by [`NihssItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NihssScores([NihssScore; NIHSS_ITEM_COUNT]);

impl NihssScores {
    pub fn get(&self, item: NihssItem) -> NihssScore {
        self.0[item.index()]
    }

    pub fn set(&mut self, item: NihssItem, score: NihssScore) {
        self.0[item.index()] = score;
    }

    /// Subscales with their values, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (NihssItem, NihssScore)> + '_ {
        NihssItem::ALL.into_iter().map(|item| (item, self.get(item)))
    }
}

impl Index<NihssItem> for NihssScores {
    type Output = NihssScore;

    fn index(&self, item: NihssItem) -> &NihssScore {
        &self.0[item.index()]
    }
}

/// Contraindication checkboxes, indexed by [`Contraindication`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContraindicationFlags([bool; CONTRAINDICATION_COUNT]);

impl ContraindicationFlags {
    pub fn is_set(&self, flag: Contraindication) -> bool {
        self.0[flag.index()]
    }

    pub fn set(&mut self, flag: Contraindication, checked: bool) {
        self.0[flag.index()] = checked;
    }

    /// Checked contraindications, in canonical order.
    pub fn active(&self) -> impl Iterator<Item = Contraindication> + '_ {
        Contraindication::ALL
            .into_iter()
            .filter(|flag| self.is_set(*flag))
    }
}

/// Everything the stroke form has collected so far.
///
/// Owned by one form session; starts empty and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentRecord {
    pub history: String,
    pub complaint: String,
    pub last_known_well: String,
    pub nihss: NihssScores,
    pub contraindications: ContraindicationFlags,
    pub mrs: Option<u8>,
}

impl AssessmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one form edit. On error the record is left unchanged.
    pub fn apply(
        &mut self,
        path: FieldPath,
        value: FieldValue,
        coercion: Coercion,
    ) -> Result<(), FieldError> {
        match path {
            FieldPath::History => self.history = value.into_text(path)?,
            FieldPath::Complaint => self.complaint = value.into_text(path)?,
            FieldPath::LastKnownWell => self.last_known_well = value.into_text(path)?,
            FieldPath::Mrs => {
                let text = value.into_text(path)?;
                self.mrs = coercion.settle(path, parse_mrs(&text), None)?;
            }
            FieldPath::Nihss(item) => {
                let text = value.into_text(path)?;
                let score = coercion.settle(path, item.parse_score(&text), NihssScore::Unset)?;
                self.nihss.set(item, score);
            }
            FieldPath::Contraindication(flag) => {
                let checked = value.into_flag(path)?;
                self.contraindications.set(flag, checked);
            }
        }
        tracing::debug!(field = %path, "applied field edit");
        Ok(())
    }

    pub fn apply_edit(&mut self, edit: FieldEdit, coercion: Coercion) -> Result<(), FieldError> {
        let path: FieldPath = edit.field.parse()?;
        self.apply(path, edit.value, coercion)
    }
}

fn parse_mrs(raw: &str) -> Result<Option<u8>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    MRS_RANGE.parse("mrs", raw).map(Some)
}

/// What to do with score text that is malformed or out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Coercion {
    /// Store the score as unset so it contributes nothing to the total.
    #[default]
    Coerce,
    /// Fail the edit and keep the previous value.
    Reject,
}

impl Coercion {
    fn settle<T>(
        self,
        path: FieldPath,
        parsed: Result<T, FieldError>,
        fallback: T,
    ) -> Result<T, FieldError> {
        match (parsed, self) {
            (Ok(value), _) => Ok(value),
            (Err(e), Coercion::Coerce) => {
                tracing::warn!(field = %path, error = %e, "coerced malformed score to unset");
                Ok(fallback)
            }
            (Err(e), Coercion::Reject) => Err(e),
        }
    }
}

/// Address of one form field, written `nihss.gaze`, `contraindications.elevatedInr`,
/// `lastKnownWell` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    History,
    Complaint,
    LastKnownWell,
    Mrs,
    Nihss(NihssItem),
    Contraindication(Contraindication),
}

impl FieldPath {
    /// Every field in form order.
    pub fn all() -> impl Iterator<Item = FieldPath> {
        [FieldPath::History, FieldPath::Complaint, FieldPath::LastKnownWell]
            .into_iter()
            .chain(NihssItem::ALL.into_iter().map(FieldPath::Nihss))
            .chain(Contraindication::ALL.into_iter().map(FieldPath::Contraindication))
            .chain(std::iter::once(FieldPath::Mrs))
    }

    /// Prompt shown next to the field on the form.
    pub fn label(self) -> Cow<'static, str> {
        match self {
            FieldPath::History => Cow::Borrowed("Brief History"),
            FieldPath::Complaint => Cow::Borrowed("Acute Neurological Complaint"),
            FieldPath::LastKnownWell => Cow::Borrowed("Last Known Well"),
            FieldPath::Mrs => Cow::Borrowed("Pre-treatment mRS Score"),
            FieldPath::Nihss(item) => Cow::Borrowed(item.label()),
            FieldPath::Contraindication(flag) => flag.label(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::History => f.write_str("history"),
            FieldPath::Complaint => f.write_str("complaint"),
            FieldPath::LastKnownWell => f.write_str("lastKnownWell"),
            FieldPath::Mrs => f.write_str("mrs"),
            FieldPath::Nihss(item) => write!(f, "nihss.{}", item.key()),
            FieldPath::Contraindication(flag) => write!(f, "contraindications.{}", flag.key()),
        }
    }
}

impl FromStr for FieldPath {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || FieldError::UnknownField(s.to_string());
        match s.split_once('.') {
            None => match s {
                "history" => Ok(FieldPath::History),
                "complaint" => Ok(FieldPath::Complaint),
                "lastKnownWell" => Ok(FieldPath::LastKnownWell),
                "mrs" => Ok(FieldPath::Mrs),
                _ => Err(unknown()),
            },
            Some(("nihss", key)) => NihssItem::from_key(key)
                .map(FieldPath::Nihss)
                .ok_or_else(unknown),
            Some(("contraindications", key)) => Contraindication::from_key(key)
                .map(FieldPath::Contraindication)
                .ok_or_else(unknown),
            Some(_) => Err(unknown()),
        }
    }
}

/// A value from the form: text for inputs and selects, a flag for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    fn into_text(self, path: FieldPath) -> Result<String, FieldError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Flag(_) => Err(FieldError::WrongKind {
                field: path.to_string(),
                expected: "text",
            }),
        }
    }

    fn into_flag(self, path: FieldPath) -> Result<bool, FieldError> {
        match self {
            FieldValue::Flag(checked) => Ok(checked),
            FieldValue::Text(_) => Err(FieldError::WrongKind {
                field: path.to_string(),
                expected: "boolean",
            }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(checked: bool) -> Self {
        FieldValue::Flag(checked)
    }
}

/// One field-set operation as sent by the form, e.g.
/// `{"field": "nihss.gaze", "value": "1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldEdit {
    pub field: String,
    pub value: FieldValue,
}

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use ts_rs::TS;

use crate::error::FieldError;

/// Wire marker the form sends for an untestable NIHSS subscale.
pub const UNTESTABLE_MARKER: &str = "UN";

/// Display text for an untestable subscale.
pub const UNTESTABLE_DISPLAY: &str = "Untestable";

/// Inclusive integer range a score must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= u32::from(self.min) && value <= u32::from(self.max)
    }

    /// Parse form text as a whole-number score within this range.
    ///
    /// `field` only names the edit in the returned error.
    pub fn parse(&self, field: &str, raw: &str) -> Result<u8, FieldError> {
        let value: u32 = raw.parse().map_err(|_| FieldError::NotANumber {
            field: field.to_string(),
            value: raw.to_string(),
        })?;
        if !self.contains(value) {
            return Err(FieldError::OutOfRange {
                field: field.to_string(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        // in range, so it fits in a u8
        Ok(value as u8)
    }
}

/// The value of one NIHSS subscale.
///
/// Unset and untestable both contribute nothing to the total; a numeric
/// score contributes itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NihssScore {
    #[default]
    Unset,
    Untestable,
    Score(u8),
}

/// Display form of a raw subscale value as the form sends it: the
/// untestable marker becomes `Untestable`, anything else passes through.
pub fn format_value(value: &str) -> &str {
    if value == UNTESTABLE_MARKER {
        UNTESTABLE_DISPLAY
    } else {
        value
    }
}

impl NihssScore {
    /// The value as the form sends it: empty, `UN`, or the number.
    pub fn form_value(self) -> Cow<'static, str> {
        match self {
            NihssScore::Unset => Cow::Borrowed(""),
            NihssScore::Untestable => Cow::Borrowed(UNTESTABLE_MARKER),
            NihssScore::Score(n) => Cow::Owned(n.to_string()),
        }
    }

    pub fn points(self) -> u32 {
        match self {
            NihssScore::Score(n) => u32::from(n),
            NihssScore::Unset | NihssScore::Untestable => 0,
        }
    }
}

impl fmt::Display for NihssScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(format_value(&self.form_value()))
    }
}

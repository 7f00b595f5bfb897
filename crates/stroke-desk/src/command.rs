use stroke_core::{FieldPath, FieldValue};

use crate::error::DeskError;

/// One line of input from the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<path>=<value>`
    Edit { path: FieldPath, value: FieldValue },
    Generate,
    Total,
    Fields,
    Reset,
    Quit,
}

impl Command {
    /// Parse an input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, DeskError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        if let Some((field, raw)) = line.split_once('=') {
            let path: FieldPath = field.trim().parse()?;
            let raw = raw.trim();
            let value = match path {
                FieldPath::Contraindication(_) => FieldValue::Flag(parse_flag(path, raw)?),
                _ => FieldValue::Text(raw.to_string()),
            };
            return Ok(Some(Command::Edit { path, value }));
        }

        let command = match line {
            "generate" => Command::Generate,
            "total" => Command::Total,
            "fields" => Command::Fields,
            "reset" => Command::Reset,
            "quit" | "exit" => Command::Quit,
            other => return Err(DeskError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_flag(path: FieldPath, raw: &str) -> Result<bool, DeskError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DeskError::InvalidFlag {
            field: path.to_string(),
            value: raw.to_string(),
        }),
    }
}

use std::io::{BufRead, Write};

use stroke_core::scales::{NihssSeverity, mrs_description};
use stroke_core::{AssessmentRecord, Coercion, FieldError, FieldPath, FieldValue};
use stroke_message::{compute_nihss_total, generate_message};
use uuid::Uuid;

use crate::command::Command;
use crate::error::DeskError;

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One form session. Owns its record exclusively; nothing is shared
/// between sessions and nothing outlives the process.
pub struct Session {
    id: Uuid,
    record: AssessmentRecord,
    coercion: Coercion,
}

impl Session {
    pub fn new(coercion: Coercion) -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session_id = %id, ?coercion, "session started");
        Self {
            id,
            record: AssessmentRecord::new(),
            coercion,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn record(&self) -> &AssessmentRecord {
        &self.record
    }

    pub fn apply(&mut self, path: FieldPath, value: FieldValue) -> Result<(), FieldError> {
        match self.record.apply(path, value, self.coercion) {
            Ok(()) => {
                tracing::info!(session_id = %self.id, field = %path, "field updated");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(session_id = %self.id, field = %path, error = %e, "field edit rejected");
                Err(e)
            }
        }
    }

    pub fn generate(&self) -> String {
        let _span = tracing::info_span!("generate", session_id = %self.id).entered();
        generate_message(&self.record)
    }

    /// NIHSS total with its severity band, and the mRS grade if set.
    pub fn total_summary(&self) -> String {
        let total = compute_nihss_total(&self.record.nihss);
        let severity = NihssSeverity::from_total(total);
        let mut summary = format!("NIHSS Total Score: {total} ({})", severity.description());
        if let Some(grade) = self.record.mrs
            && let Some(description) = mrs_description(grade)
        {
            summary.push_str(&format!("\nPre-treatment mRS: {grade} ({description})"));
        }
        summary
    }

    pub fn reset(&mut self) {
        self.record = AssessmentRecord::new();
        tracing::info!(session_id = %self.id, "record cleared");
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, DeskError> {
        match command {
            Command::Edit { path, value } => self.apply(path, value)?,
            Command::Generate => writeln!(out, "{}", self.generate())?,
            Command::Total => writeln!(out, "{}", self.total_summary())?,
            Command::Fields => write_fields(out)?,
            Command::Reset => self.reset(),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn write_fields<W: Write>(out: &mut W) -> std::io::Result<()> {
    for path in FieldPath::all() {
        let hint = match path {
            FieldPath::Nihss(item) => {
                let range = item.range();
                let untestable = if item.untestable_allowed() { " or UN" } else { "" };
                format!(" [{}-{}{untestable}]", range.min, range.max)
            }
            FieldPath::Mrs => {
                let range = stroke_core::scales::MRS_RANGE;
                format!(" [{}-{}]", range.min, range.max)
            }
            FieldPath::Contraindication(flag) => {
                format!(" [{}; true/false]", flag.category().name())
            }
            FieldPath::History | FieldPath::Complaint | FieldPath::LastKnownWell => String::new(),
        };
        writeln!(out, "{path}: {}{hint}", path.label())?;
    }
    Ok(())
}

/// Drive `session` from line-oriented input until `quit` or end of input.
///
/// Bad lines, including lines that are not UTF-8, are reported on `err`
/// and the session carries on; only I/O failures end the loop early.
pub fn run<R, W, E>(session: &mut Session, mut input: R, out: &mut W, err: &mut E) -> Result<(), DeskError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut buf = Vec::new();
    let mut line_number = 0usize;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\n', '\r']),
            Err(_) => {
                tracing::warn!(session_id = %session.id(), line_number, "input line is not valid UTF-8");
                writeln!(err, "error: line {line_number} is not valid UTF-8")?;
                continue;
            }
        };
        let outcome = Command::parse(line).and_then(|command| match command {
            Some(command) => session.execute(command, &mut *out),
            None => Ok(Flow::Continue),
        });
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(DeskError::Io(e)) => return Err(DeskError::Io(e)),
            Err(e) => writeln!(err, "error: {e}")?,
        }
    }
    out.flush()?;
    tracing::info!(session_id = %session.id(), "session ended");
    Ok(())
}

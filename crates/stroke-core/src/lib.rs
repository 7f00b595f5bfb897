//! stroke-core
//!
//! Pure domain types for the stroke alert form: the NIHSS and mRS scale
//! definitions, the thrombolytic contraindication table, the in-memory
//! assessment record, and the field edits the form applies to it.
//! No I/O — this is the shared vocabulary of the stroke alert crates.

pub mod contraindications;
pub mod error;
pub mod record;
pub mod scales;
pub mod scoring;

pub use contraindications::{Contraindication, ContraindicationCategory};
pub use error::FieldError;
pub use record::{AssessmentRecord, Coercion, FieldEdit, FieldPath, FieldValue};
pub use scales::NihssItem;
pub use scoring::NihssScore;

//! stroke-message
//!
//! Turns an assessment record into the fixed-format stroke alert text used
//! for paging, chart notes and handoff. Everything here is a pure function
//! of the record.

pub mod message;

pub use message::{compute_nihss_total, generate_message};
pub use stroke_core::contraindications::render_contraindication_label;
pub use stroke_core::scoring::format_value;

use stroke_core::AssessmentRecord;
use stroke_core::record::NihssScores;
use stroke_core::scoring::format_value;

const TITLE: &str = "STROKE ALERT ASSESSMENT";
const NO_CONTRAINDICATIONS: &str = "None";

/// Sum of the 15 NIHSS subscales. Unset and untestable items count as 0.
pub fn compute_nihss_total(nihss: &NihssScores) -> u32 {
    nihss.iter().map(|(_, score)| score.points()).sum()
}

/// Render the canonical stroke alert message for `record`.
///
/// Never fails: blank fields render as empty values.
pub fn generate_message(record: &AssessmentRecord) -> String {
    let nihss_total = compute_nihss_total(&record.nihss);

    let mut lines: Vec<String> = vec![
        TITLE.to_string(),
        String::new(),
        format!("History: {}", record.history),
        format!("Chief Complaint: {}", record.complaint),
        format!("Last Known Well: {}", record.last_known_well),
        String::new(),
        format!("NIHSS Total Score: {nihss_total}"),
    ];

    for (item, score) in record.nihss.iter() {
        lines.push(format!("- {}: {}", item.label(), format_value(&score.form_value())));
    }

    lines.push(String::new());
    let mrs = record.mrs.map(|grade| grade.to_string()).unwrap_or_default();
    lines.push(format!("Pre-treatment mRS: {mrs}"));

    lines.push(String::new());
    lines.push("Contraindications Present:".to_string());
    let before = lines.len();
    lines.extend(
        record
            .contraindications
            .active()
            .map(|flag| format!("- {}", flag.label())),
    );
    let active_contraindications = lines.len() - before;
    if active_contraindications == 0 {
        lines.push(NO_CONTRAINDICATIONS.to_string());
    }

    tracing::debug!(
        nihss_total,
        active_contraindications,
        "generated stroke alert message"
    );

    lines.join("\n")
}

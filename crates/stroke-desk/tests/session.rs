use stroke_core::{Coercion, Contraindication, FieldPath, FieldValue, NihssItem, NihssScore};
use stroke_desk::command::Command;
use stroke_desk::error::DeskError;
use stroke_desk::session::{Flow, Session, run};
use stroke_message::generate_message;

fn drive(coercion: Coercion, input: &str) -> (Session, String, String) {
    drive_bytes(coercion, input.as_bytes())
}

fn drive_bytes(coercion: Coercion, input: &[u8]) -> (Session, String, String) {
    let mut session = Session::new(coercion);
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(&mut session, input, &mut out, &mut err).unwrap();
    (
        session,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn parses_edits_and_commands() {
    assert_eq!(
        Command::parse("nihss.gaze = 1").unwrap(),
        Some(Command::Edit {
            path: FieldPath::Nihss(NihssItem::Gaze),
            value: FieldValue::Text("1".to_string()),
        })
    );
    assert_eq!(
        Command::parse("contraindications.elevatedInr=true").unwrap(),
        Some(Command::Edit {
            path: FieldPath::Contraindication(Contraindication::ElevatedInr),
            value: FieldValue::Flag(true),
        })
    );
    assert_eq!(
        Command::parse("history=").unwrap(),
        Some(Command::Edit {
            path: FieldPath::History,
            value: FieldValue::Text(String::new()),
        })
    );
    assert_eq!(Command::parse("generate").unwrap(), Some(Command::Generate));
    assert_eq!(Command::parse("  quit ").unwrap(), Some(Command::Quit));
    assert_eq!(Command::parse("").unwrap(), None);
    assert_eq!(Command::parse("# comment").unwrap(), None);
}

#[test]
fn rejects_bad_lines() {
    assert!(matches!(
        Command::parse("print"),
        Err(DeskError::UnknownCommand(c)) if c == "print"
    ));
    assert!(matches!(
        Command::parse("contraindications.elevatedInr=yes"),
        Err(DeskError::InvalidFlag { .. })
    ));
    assert!(matches!(
        Command::parse("nihss.pupils=1"),
        Err(DeskError::Field(_))
    ));
}

#[test]
fn generate_prints_the_message() {
    let input = "\
history=Found down
lastKnownWell=14:30
nihss.gaze=1
mrs=1
generate
";
    let (_, out, err) = drive(Coercion::Reject, input);
    assert!(err.is_empty(), "{err}");
    assert!(out.starts_with("STROKE ALERT ASSESSMENT\n"));
    assert!(out.contains("History: Found down\n"));
    assert!(out.contains("NIHSS Total Score: 1\n"));
    assert!(out.contains("- Gaze: 1\n"));
    assert!(out.contains("Pre-treatment mRS: 1\n"));
    assert!(out.ends_with("Contraindications Present:\nNone\n"));
}

#[test]
fn bad_lines_are_reported_and_session_continues() {
    let input = "\
nihss.gaze=9
bogus
contraindications.plateletUnder100k=maybe
nihss.gaze=2
total
";
    let (session, out, err) = drive(Coercion::Reject, input);
    assert_eq!(err.lines().count(), 3);
    assert!(err.contains("outside range"));
    assert!(err.contains("unknown command: bogus"));
    assert_eq!(session.record().nihss[NihssItem::Gaze], NihssScore::Score(2));
    assert_eq!(out, "NIHSS Total Score: 2 (Minor stroke)\n");
}

#[test]
fn coercing_session_accepts_malformed_scores() {
    let (session, out, err) = drive(Coercion::Coerce, "nihss.gaze=abc\ntotal\n");
    assert!(err.is_empty());
    assert_eq!(session.record().nihss[NihssItem::Gaze], NihssScore::Unset);
    assert_eq!(out, "NIHSS Total Score: 0 (No stroke symptoms)\n");
}

#[test]
fn total_includes_mrs_grade() {
    let (_, out, _) = drive(Coercion::Reject, "nihss.loc=3\nnihss.leftArm=4\nmrs=2\ntotal\n");
    assert_eq!(
        out,
        "NIHSS Total Score: 7 (Moderate stroke)\nPre-treatment mRS: 2 (Slight disability)\n"
    );
}

#[test]
fn quit_stops_reading() {
    let (session, out, _) = drive(Coercion::Reject, "nihss.gaze=1\nquit\nnihss.gaze=2\ngenerate\n");
    assert!(out.is_empty());
    assert_eq!(session.record().nihss[NihssItem::Gaze], NihssScore::Score(1));
}

#[test]
fn reset_clears_the_record() {
    let mut session = Session::new(Coercion::Reject);
    let mut out = Vec::new();
    for line in ["complaint=Aphasia", "contraindications.evidenceOfHemorrhage=true", "reset"] {
        let command = Command::parse(line).unwrap().unwrap();
        assert_eq!(session.execute(command, &mut out).unwrap(), Flow::Continue);
    }
    assert!(session.record().complaint.is_empty());
    assert_eq!(session.record().contraindications.active().count(), 0);
}

#[test]
fn fields_lists_every_path() {
    let (_, out, _) = drive(Coercion::Reject, "fields\n");
    assert_eq!(out.lines().count(), 35);
    assert!(out.contains("history: Brief History\n"));
    assert!(out.contains("nihss.leftArm: Left Arm [0-4 or UN]\n"));
    assert!(out.contains("nihss.gaze: Gaze [0-2]\n"));
    assert!(out.contains("contraindications.plateletUnder100k: Platelet count <100,000/mm3 [Hematologic; true/false]\n"));
    assert!(out.ends_with("mrs: Pre-treatment mRS Score [0-6]\n"));
}

#[test]
fn sessions_are_independent() {
    let mut first = Session::new(Coercion::Reject);
    let second = Session::new(Coercion::Reject);
    first
        .apply(FieldPath::Nihss(NihssItem::Gaze), "2".into())
        .unwrap();
    assert_ne!(first.id(), second.id());
    assert_eq!(second.record().nihss[NihssItem::Gaze], NihssScore::Unset);
}

#[test]
fn non_utf8_line_is_reported_and_session_continues() {
    let input = b"nihss.gaze=2\nhistory=caf\xE9\nnihss.loc=1\ngenerate\n";
    let (session, out, err) = drive_bytes(Coercion::Reject, input);
    assert_eq!(err, "error: line 2 is not valid UTF-8\n");
    assert!(session.record().history.is_empty());
    assert_eq!(session.record().nihss[NihssItem::Loc], NihssScore::Score(1));
    assert!(out.contains("NIHSS Total Score: 3\n"));
}

#[test]
fn crlf_line_endings_are_accepted() {
    let (session, out, err) = drive(Coercion::Reject, "history=Found down\r\nnihss.gaze=1\r\ntotal\r\n");
    assert!(err.is_empty(), "{err}");
    assert_eq!(session.record().history, "Found down");
    assert_eq!(out, "NIHSS Total Score: 1 (Minor stroke)\n");
}

#[test]
fn last_line_without_newline_is_read() {
    let (_, out, _) = drive(Coercion::Reject, "nihss.gaze=2\ntotal");
    assert_eq!(out, "NIHSS Total Score: 2 (Minor stroke)\n");
}

#[test]
fn session_generate_matches_the_aggregator() {
    let mut session = Session::new(Coercion::Reject);
    session
        .apply(FieldPath::Nihss(NihssItem::LeftLeg), "UN".into())
        .unwrap();
    session
        .apply(
            FieldPath::Contraindication(Contraindication::ElevatedInr),
            true.into(),
        )
        .unwrap();
    assert_eq!(session.generate(), generate_message(session.record()));
}

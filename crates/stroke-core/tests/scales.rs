use stroke_core::scales::{
    NIHSS_MAX_TOTAL, NihssItem, NihssSeverity, mrs_description, nihss_items,
};
use stroke_core::{FieldError, NihssScore};

#[test]
fn items_are_in_canonical_order() {
    let labels: Vec<&str> = nihss_items().iter().map(|d| d.label).collect();
    assert_eq!(
        labels,
        [
            "LOC",
            "LOC Questions",
            "LOC Commands",
            "Gaze",
            "Visual Fields",
            "Facial Palsy",
            "Left Arm",
            "Right Arm",
            "Left Leg",
            "Right Leg",
            "Limb Ataxia",
            "Sensory",
            "Language",
            "Dysarthria",
            "Extinction/Inattention",
        ]
    );
    for (i, def) in nihss_items().iter().enumerate() {
        assert_eq!(def.item.index(), i);
        assert_eq!(NihssItem::ALL[i], def.item);
    }
}

#[test]
fn maximum_scores_sum_to_scale_maximum() {
    let max: u32 = nihss_items().iter().map(|d| u32::from(d.range.max)).sum();
    assert_eq!(max, NIHSS_MAX_TOTAL);
}

#[test]
fn only_motor_ataxia_and_dysarthria_allow_untestable() {
    let allowed: Vec<NihssItem> = NihssItem::ALL
        .into_iter()
        .filter(|i| i.untestable_allowed())
        .collect();
    assert_eq!(
        allowed,
        [
            NihssItem::LeftArm,
            NihssItem::RightArm,
            NihssItem::LeftLeg,
            NihssItem::RightLeg,
            NihssItem::Ataxia,
            NihssItem::Dysarthria,
        ]
    );
}

#[test]
fn keys_round_trip_through_lookup() {
    for item in NihssItem::ALL {
        assert_eq!(NihssItem::from_key(item.key()), Some(item));
    }
    assert_eq!(NihssItem::from_key("Gaze"), None);
}

#[test]
fn parse_score_handles_empty_untestable_and_numbers() {
    assert_eq!(NihssItem::Gaze.parse_score(""), Ok(NihssScore::Unset));
    assert_eq!(NihssItem::Gaze.parse_score("  "), Ok(NihssScore::Unset));
    assert_eq!(NihssItem::Gaze.parse_score("2"), Ok(NihssScore::Score(2)));
    assert_eq!(NihssItem::LeftArm.parse_score(" 4 "), Ok(NihssScore::Score(4)));
    assert_eq!(NihssItem::LeftArm.parse_score("UN"), Ok(NihssScore::Untestable));
}

#[test]
fn parse_score_rejects_out_of_range() {
    assert_eq!(
        NihssItem::Gaze.parse_score("3"),
        Err(FieldError::OutOfRange {
            field: "nihss.gaze".to_string(),
            value: 3,
            min: 0,
            max: 2,
        })
    );
}

#[test]
fn parse_score_rejects_untestable_where_not_allowed() {
    assert_eq!(
        NihssItem::Loc.parse_score("UN"),
        Err(FieldError::UntestableNotAllowed {
            field: "nihss.loc".to_string(),
        })
    );
}

#[test]
fn parse_score_rejects_non_numeric_text() {
    for raw in ["abc", "-1", "1.5"] {
        assert!(matches!(
            NihssItem::Sensory.parse_score(raw),
            Err(FieldError::NotANumber { .. })
        ));
    }
}

#[test]
fn severity_bands_cover_the_scale() {
    assert_eq!(NihssSeverity::from_total(0), NihssSeverity::NoSymptoms);
    assert_eq!(NihssSeverity::from_total(4), NihssSeverity::Minor);
    assert_eq!(NihssSeverity::from_total(5), NihssSeverity::Moderate);
    assert_eq!(NihssSeverity::from_total(15), NihssSeverity::Moderate);
    assert_eq!(NihssSeverity::from_total(16), NihssSeverity::ModerateToSevere);
    assert_eq!(NihssSeverity::from_total(21), NihssSeverity::Severe);
    assert_eq!(NihssSeverity::from_total(42).description(), "Severe stroke");
}

#[test]
fn mrs_grades() {
    assert_eq!(mrs_description(0), Some("No symptoms"));
    assert_eq!(mrs_description(6), Some("Dead"));
    assert_eq!(mrs_description(7), None);
}

#[test]
fn score_display_matches_message_text() {
    assert_eq!(NihssScore::Unset.to_string(), "");
    assert_eq!(NihssScore::Untestable.to_string(), "Untestable");
    assert_eq!(NihssScore::Score(3).to_string(), "3");
}

#[test]
fn display_goes_through_the_form_value() {
    use stroke_core::scoring::format_value;

    assert_eq!(NihssScore::Unset.form_value(), "");
    assert_eq!(NihssScore::Untestable.form_value(), "UN");
    assert_eq!(NihssScore::Score(4).form_value(), "4");
    for score in [NihssScore::Unset, NihssScore::Untestable, NihssScore::Score(2)] {
        assert_eq!(score.to_string(), format_value(&score.form_value()));
    }
}

#[test]
fn form_values_parse_back_to_the_same_score() {
    for score in [NihssScore::Unset, NihssScore::Untestable, NihssScore::Score(3)] {
        assert_eq!(NihssItem::LeftArm.parse_score(&score.form_value()), Ok(score));
    }
}

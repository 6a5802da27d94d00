use crate::{IntervalType, ReleaseStatus, ReminderType, Survey};

#[test]
fn test_survey_new() {
    let survey = Survey::new(
        "mood".to_string(),
        "Mood check".to_string(),
        Some("How is the team feeling".to_string()),
    );

    assert_eq!(survey.name_id, "mood");
    assert_eq!(survey.title, "Mood check");
    assert_eq!(survey.description.as_deref(), Some("How is the team feeling"));
    assert_eq!(survey.version, 1);
    assert_eq!(survey.interval_type, IntervalType::None);
    assert_eq!(survey.release_status, ReleaseStatus::Released);
    assert_eq!(survey.reminder_type, ReminderType::None);
    assert!(!survey.id.is_nil());
}

#[test]
fn test_survey_is_released() {
    let mut survey = Survey::new("mood".to_string(), "Mood check".to_string(), None);

    assert!(survey.is_released());

    survey.release_status = ReleaseStatus::New;
    assert!(!survey.is_released());
}

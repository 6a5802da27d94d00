use crate::{Container, ContainerKind};

use uuid::Uuid;

#[test]
fn test_container_survey_root() {
    let survey_id = Uuid::new_v4();
    let root = Container::survey_root(survey_id);

    assert_eq!(root.id, survey_id);
    assert_eq!(root.kind, ContainerKind::Survey);
    assert_eq!(root.parent_question_id, None);
    assert!(root.question_ids.is_empty());
}

#[test]
fn test_container_nested() {
    let parent = Uuid::new_v4();
    let nested = Container::nested(ContainerKind::Boolean { depends_on: Some(true) }, parent);

    assert_eq!(nested.parent_question_id, Some(parent));
    assert!(!nested.kind.is_survey());
}

#[test]
fn test_container_kind_as_str() {
    assert_eq!(ContainerKind::Survey.as_str(), "survey");
    assert_eq!(ContainerKind::Boolean { depends_on: None }.as_str(), "boolean");
    assert_eq!(ContainerKind::Choice { depends_on: vec![] }.as_str(), "choice");
}

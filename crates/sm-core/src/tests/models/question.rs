use crate::{Question, QuestionKind, QuestionType};

use uuid::Uuid;

#[test]
fn test_question_new() {
    let question = Question::new(
        "Feeling good?".to_string(),
        0,
        false,
        QuestionKind::Bool {
            default_answer: true,
            container_id: None,
        },
    );

    assert_eq!(question.prompt, "Feeling good?");
    assert_eq!(question.rank, 0);
    assert!(!question.optional);
    assert_eq!(question.question_type(), QuestionType::Bool);
    assert!(!question.id.is_nil());
}

#[test]
fn test_question_type_per_kind() {
    let kinds = [
        (
            QuestionKind::Bool {
                default_answer: false,
                container_id: None,
            },
            QuestionType::Bool,
        ),
        (
            QuestionKind::Choice {
                answer_ids: vec![],
                default_answer_id: None,
                multiple: false,
                container_id: None,
            },
            QuestionType::Choice,
        ),
        (
            QuestionKind::Range {
                min_value: 1,
                max_value: 5,
                min_text: None,
                max_text: None,
                default_value: None,
            },
            QuestionType::Range,
        ),
        (
            QuestionKind::Number {
                min_value: None,
                max_value: None,
                default_value: None,
            },
            QuestionType::Number,
        ),
        (
            QuestionKind::Text {
                multiline: false,
                max_length: 255,
            },
            QuestionType::Text,
        ),
        (QuestionKind::Checklist { entry_ids: vec![] }, QuestionType::Checklist),
        (
            QuestionKind::ChecklistEntry { default_answer: false },
            QuestionType::ChecklistEntry,
        ),
    ];

    for (kind, expected) in kinds {
        assert_eq!(kind.question_type(), expected);
    }
}

#[test]
fn test_nested_container_id() {
    let container_id = Uuid::new_v4();

    let bool_question = Question::new(
        "More?".to_string(),
        0,
        false,
        QuestionKind::Bool {
            default_answer: false,
            container_id: Some(container_id),
        },
    );
    assert_eq!(bool_question.nested_container_id(), Some(container_id));

    let text_question = Question::new(
        "Notes".to_string(),
        1,
        true,
        QuestionKind::Text {
            multiline: true,
            max_length: 1024,
        },
    );
    assert_eq!(text_question.nested_container_id(), None);
}

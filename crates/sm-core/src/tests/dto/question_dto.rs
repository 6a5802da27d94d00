use crate::{QuestionDto, QuestionPayloadDto, QuestionType};

use serde_json::json;
use uuid::Uuid;

#[test]
fn test_question_dto_serializes_with_type_tag() {
    let dto = QuestionDto {
        id: None,
        prompt: "Feeling good?".to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Bool {
            default_answer: true,
            container: None,
        },
    };

    let value = serde_json::to_value(&dto).unwrap();

    assert_eq!(value["type"], "bool");
    assert_eq!(value["prompt"], "Feeling good?");
    assert_eq!(value["rank"], 0);
    assert_eq!(value["default_answer"], true);
    assert!(value.get("id").is_none());
    assert!(value.get("container").is_none());
}

#[test]
fn test_question_dto_deserializes_choice_payload() {
    let answer_id = Uuid::new_v4();
    let value = json!({
        "type": "choice",
        "prompt": "Pick one",
        "rank": 2,
        "answers": [
            { "id": answer_id, "value": "Red" },
            { "value": "Blue" }
        ],
        "default_answer": answer_id,
        "multiple": false
    });

    let dto: QuestionDto = serde_json::from_value(value).unwrap();

    assert_eq!(dto.question_type(), QuestionType::Choice);
    assert_eq!(dto.rank, 2);
    assert!(!dto.optional);
    match dto.payload {
        QuestionPayloadDto::Choice {
            answers,
            default_answer,
            multiple,
            container,
        } => {
            assert_eq!(answers.len(), 2);
            assert_eq!(answers[0].id, Some(answer_id));
            assert_eq!(answers[1].id, None);
            assert_eq!(answers[1].value, "Blue");
            assert_eq!(default_answer, Some(answer_id));
            assert!(!multiple);
            assert!(container.is_none());
        }
        other => panic!("expected choice payload, got {other:?}"),
    }
}

#[test]
fn test_question_dto_deserializes_checklist_with_entries() {
    let value = json!({
        "type": "checklist",
        "prompt": "Daily routine",
        "rank": 0,
        "entries": [
            { "prompt": "Standup", "rank": 0, "default_answer": true },
            { "prompt": "Code review", "rank": 1 }
        ]
    });

    let dto: QuestionDto = serde_json::from_value(value).unwrap();

    match dto.payload {
        QuestionPayloadDto::Checklist { entries } => {
            assert_eq!(entries.len(), 2);
            assert!(entries[0].default_answer);
            assert!(!entries[1].default_answer);
            assert!(!entries[1].optional);
        }
        other => panic!("expected checklist payload, got {other:?}"),
    }
}

#[test]
fn test_question_dto_checklist_entry_tag() {
    let value = json!({
        "type": "checklist_entry",
        "prompt": "Standup",
        "rank": 0,
        "default_answer": false
    });

    let dto: QuestionDto = serde_json::from_value(value).unwrap();
    assert_eq!(dto.question_type(), QuestionType::ChecklistEntry);
}

#[test]
fn test_question_dto_rejects_unknown_type_tag() {
    let value = json!({
        "type": "slider",
        "prompt": "How much?",
        "rank": 0
    });

    assert!(serde_json::from_value::<QuestionDto>(value).is_err());
}

#[test]
fn test_question_dto_round_trips_nested_container() {
    let value = json!({
        "type": "bool",
        "prompt": "Need a follow-up?",
        "rank": 1,
        "optional": true,
        "default_answer": false,
        "container": {
            "depends_on": true,
            "sub_questions": [
                {
                    "type": "text",
                    "prompt": "Tell us more",
                    "rank": 0,
                    "multiline": true,
                    "max_length": 1024
                }
            ]
        }
    });

    let dto: QuestionDto = serde_json::from_value(value.clone()).unwrap();
    let reserialized = serde_json::to_value(&dto).unwrap();

    assert_eq!(reserialized["container"]["depends_on"], true);
    assert_eq!(
        reserialized["container"]["sub_questions"][0]["type"],
        "text"
    );
    assert_eq!(reserialized["optional"], true);
}

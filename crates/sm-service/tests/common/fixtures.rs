#![allow(dead_code)]

use sm_core::{
    AnswerDto, BooleanContainerDto, ChecklistEntryDto, ChoiceContainerDto, Question, QuestionDto,
    QuestionKind, QuestionPayloadDto,
};
use sm_service::CreateSurveyRequest;

use uuid::Uuid;

/// Creates a test request for a new survey
pub fn create_survey_request(name_id: &str, title: &str) -> CreateSurveyRequest {
    CreateSurveyRequest {
        name_id: name_id.to_string(),
        title: title.to_string(),
        description: Some("A test survey".to_string()),
    }
}

/// Creates a test text question payload
pub fn text_question_payload(prompt: &str) -> QuestionDto {
    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Text {
            multiline: false,
            max_length: 256,
        },
    }
}

/// Creates a test bool question payload without a follow-up container
pub fn bool_question_payload(prompt: &str, default_answer: bool) -> QuestionDto {
    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Bool {
            default_answer,
            container: None,
        },
    }
}

/// Creates a test bool question payload with a follow-up shown on "yes"
pub fn gated_bool_question_payload(prompt: &str, follow_up: QuestionDto) -> QuestionDto {
    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Bool {
            default_answer: false,
            container: Some(BooleanContainerDto {
                depends_on: Some(true),
                sub_questions: vec![follow_up],
            }),
        },
    }
}

/// Creates a test choice question payload offering the given answer values
pub fn choice_question_payload(prompt: &str, values: &[&str]) -> QuestionDto {
    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Choice {
            answers: values
                .iter()
                .map(|value| AnswerDto {
                    id: None,
                    value: value.to_string(),
                })
                .collect(),
            default_answer: None,
            multiple: false,
            container: None,
        },
    }
}

/// Creates a test choice question payload defaulting to the first value,
/// with a follow-up container gated on `gate_value`
pub fn gated_choice_question_payload(
    prompt: &str,
    values: &[&str],
    gate_value: &str,
    follow_up: QuestionDto,
) -> QuestionDto {
    let answers: Vec<AnswerDto> = values
        .iter()
        .map(|value| AnswerDto {
            id: Some(Uuid::new_v4()),
            value: value.to_string(),
        })
        .collect();
    let default_answer = answers.first().and_then(|answer| answer.id);
    let depends_on: Vec<Uuid> = answers
        .iter()
        .filter(|answer| answer.value == gate_value)
        .filter_map(|answer| answer.id)
        .collect();

    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Choice {
            answers,
            default_answer,
            multiple: false,
            container: Some(ChoiceContainerDto {
                depends_on,
                sub_questions: vec![follow_up],
            }),
        },
    }
}

/// Creates a test range question payload covering 0..=10
pub fn range_question_payload(prompt: &str) -> QuestionDto {
    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Range {
            min_value: 0,
            max_value: 10,
            min_text: Some("Not at all".to_string()),
            max_text: Some("Very much".to_string()),
            default_value: Some(5),
        },
    }
}

/// Creates a test number question payload
pub fn number_question_payload(prompt: &str) -> QuestionDto {
    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Number {
            min_value: Some(0),
            max_value: Some(120),
            default_value: None,
        },
    }
}

/// Creates a test checklist payload with one unticked entry per prompt
pub fn checklist_question_payload(prompt: &str, entries: &[&str]) -> QuestionDto {
    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::Checklist {
            entries: entries
                .iter()
                .enumerate()
                .map(|(index, entry)| ChecklistEntryDto {
                    id: None,
                    prompt: entry.to_string(),
                    rank: index as i32,
                    optional: false,
                    default_answer: false,
                })
                .collect(),
        },
    }
}

/// Creates a test checklist entry payload, only valid inside a checklist
pub fn checklist_entry_payload(prompt: &str) -> QuestionDto {
    QuestionDto {
        id: None,
        prompt: prompt.to_string(),
        rank: 0,
        optional: false,
        payload: QuestionPayloadDto::ChecklistEntry {
            default_answer: false,
        },
    }
}

/// Creates a test text question entity for seeding a store directly
pub fn text_question_entity(prompt: &str, rank: i32) -> Question {
    Question::new(
        prompt.to_string(),
        rank,
        false,
        QuestionKind::Text {
            multiline: false,
            max_length: 256,
        },
    )
}

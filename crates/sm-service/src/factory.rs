//! Typed question creation and update.
//!
//! Creation persists a question's whole dependent graph: choice answers
//! first, then nested follow-up containers with their sub-questions,
//! recursively. Updates overlay the stored record in place and never change
//! the question's type.

use crate::error::{Result as ServiceResult, ServiceError};
use crate::resolve::ResolvedQuestion;

use sm_core::{
    Answer, Container, ContainerKind, Question, QuestionDto, QuestionKind, QuestionPayloadDto,
};
use sm_store::DefinitionTx;

use std::future::Future;
use std::panic::Location;
use std::pin::Pin;

use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Create the question described by `payload` as a new child of `parent`.
///
/// The new question is appended: its rank is the current sibling count. The
/// caller adds the returned question to the parent's child list.
pub async fn create_question<T: DefinitionTx>(
    tx: &mut T,
    parent: &Container,
    payload: &QuestionDto,
) -> ServiceResult<Question> {
    let rank = parent.question_ids.len() as i32;
    build_question(tx, rank, payload).await
}

/// Recursive worker behind `create_question`. Boxed because nested
/// containers recurse through their sub-questions.
fn build_question<'a, T: DefinitionTx>(
    tx: &'a mut T,
    rank: i32,
    payload: &'a QuestionDto,
) -> Pin<Box<dyn Future<Output = ServiceResult<Question>> + Send + 'a>> {
    Box::pin(async move {
        let question_id = Uuid::new_v4();

        let kind = match &payload.payload {
            QuestionPayloadDto::Bool {
                default_answer,
                container,
            } => {
                let container_id = match container {
                    Some(dto) => Some(
                        build_nested_container(
                            tx,
                            ContainerKind::Boolean {
                                depends_on: dto.depends_on,
                            },
                            question_id,
                            &dto.sub_questions,
                        )
                        .await?,
                    ),
                    None => None,
                };
                QuestionKind::Bool {
                    default_answer: *default_answer,
                    container_id,
                }
            }

            QuestionPayloadDto::Choice {
                answers,
                default_answer,
                multiple,
                container,
            } => {
                // 1. Persist the owned answers in payload order
                let mut answer_ids = Vec::with_capacity(answers.len());
                for answer in answers {
                    let persisted = tx
                        .save_answer(Answer {
                            id: answer.id.unwrap_or_else(Uuid::new_v4),
                            value: answer.value.clone(),
                            created_at: Utc::now(),
                        })
                        .await?;
                    answer_ids.push(persisted.id);
                }

                // 2. The default answer must be one of the owned answers
                if let Some(wanted) = default_answer {
                    if !answer_ids.contains(wanted) {
                        return Err(ServiceError::Validation {
                            message: format!(
                                "default answer {wanted} is not an answer of this question"
                            ),
                            field: Some("default_answer".into()),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                }

                // 3. A follow-up container may only depend on the owned answers
                let container_id = match container {
                    Some(dto) => {
                        for depends in &dto.depends_on {
                            if !answer_ids.contains(depends) {
                                return Err(ServiceError::Validation {
                                    message: format!(
                                        "depends-on answer {depends} is not an answer of this question"
                                    ),
                                    field: Some("depends_on".into()),
                                    location: ErrorLocation::from(Location::caller()),
                                });
                            }
                        }
                        Some(
                            build_nested_container(
                                tx,
                                ContainerKind::Choice {
                                    depends_on: dto.depends_on.clone(),
                                },
                                question_id,
                                &dto.sub_questions,
                            )
                            .await?,
                        )
                    }
                    None => None,
                };

                QuestionKind::Choice {
                    answer_ids,
                    default_answer_id: *default_answer,
                    multiple: *multiple,
                    container_id,
                }
            }

            QuestionPayloadDto::Range {
                min_value,
                max_value,
                min_text,
                max_text,
                default_value,
            } => QuestionKind::Range {
                min_value: *min_value,
                max_value: *max_value,
                min_text: min_text.clone(),
                max_text: max_text.clone(),
                default_value: *default_value,
            },

            QuestionPayloadDto::Number {
                min_value,
                max_value,
                default_value,
            } => QuestionKind::Number {
                min_value: *min_value,
                max_value: *max_value,
                default_value: *default_value,
            },

            QuestionPayloadDto::Text {
                multiline,
                max_length,
            } => QuestionKind::Text {
                multiline: *multiline,
                max_length: *max_length,
            },

            QuestionPayloadDto::Checklist { entries } => {
                let mut entry_ids = Vec::with_capacity(entries.len());
                for (index, entry) in entries.iter().enumerate() {
                    let persisted = tx
                        .save_question(Question {
                            id: entry.id.unwrap_or_else(Uuid::new_v4),
                            prompt: entry.prompt.clone(),
                            rank: index as i32,
                            optional: entry.optional,
                            created_at: Utc::now(),
                            kind: QuestionKind::ChecklistEntry {
                                default_answer: entry.default_answer,
                            },
                        })
                        .await?;
                    entry_ids.push(persisted.id);
                }
                QuestionKind::Checklist { entry_ids }
            }

            QuestionPayloadDto::ChecklistEntry { .. } => {
                return Err(ServiceError::Validation {
                    message: "checklist entries live inside a checklist and cannot be created on their own"
                        .to_string(),
                    field: Some("type".into()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let question = Question {
            id: question_id,
            prompt: payload.prompt.clone(),
            rank,
            optional: payload.optional,
            created_at: Utc::now(),
            kind,
        };
        Ok(tx.save_question(question).await?)
    })
}

async fn build_nested_container<T: DefinitionTx>(
    tx: &mut T,
    kind: ContainerKind,
    parent_question_id: Uuid,
    sub_questions: &[QuestionDto],
) -> ServiceResult<Uuid> {
    let mut container = Container::nested(kind, parent_question_id);
    for (index, sub) in sub_questions.iter().enumerate() {
        let question = build_question(tx, index as i32, sub).await?;
        container.question_ids.push(question.id);
    }
    Ok(tx.save_container(container).await?.id)
}

/// Overlay `payload` onto the stored `question`.
///
/// The caller persists the mutated record and resynchronizes sibling ranks
/// if the rank changed. On error the record must be discarded unsaved.
pub fn apply_update(
    context: &ResolvedQuestion,
    question: &mut Question,
    payload: &QuestionDto,
) -> ServiceResult<()> {
    // 1. Released surveys are immutable
    if context.survey.is_released() {
        return Err(ServiceError::Conflict {
            message: format!(
                "related survey '{}' is already released",
                context.survey.name_id
            ),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 2. The question type is fixed at creation
    let expected = question.question_type();
    let received = payload.question_type();
    if expected != received {
        return Err(ServiceError::Validation {
            message: format!(
                "question type does not match: expected {}, received {}",
                expected.as_str(),
                received.as_str()
            ),
            field: Some("type".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 3. The new rank must stay within the sibling range
    let sibling_count = context.container.question_ids.len() as i32;
    if payload.rank < 0 || payload.rank >= sibling_count {
        return Err(ServiceError::Validation {
            message: format!(
                "rank out of range: expected 0..{sibling_count}, received {}",
                payload.rank
            ),
            field: Some("rank".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 4. Overlay the common fields
    question.prompt = payload.prompt.clone();
    question.rank = payload.rank;

    // 5. Overlay the typed payload
    match (&mut question.kind, &payload.payload) {
        (
            QuestionKind::Bool { default_answer, .. },
            QuestionPayloadDto::Bool {
                default_answer: new_default,
                ..
            },
        ) => {
            *default_answer = *new_default;
        }

        (
            QuestionKind::Choice {
                answer_ids,
                default_answer_id,
                multiple,
                ..
            },
            QuestionPayloadDto::Choice {
                default_answer: new_default,
                multiple: new_multiple,
                ..
            },
        ) => {
            // TODO: support updating the answer set; answers are fixed at
            // creation for now.
            if let Some(wanted) = new_default {
                if !answer_ids.contains(wanted) {
                    return Err(ServiceError::Validation {
                        message: format!(
                            "default answer {wanted} is not an answer of this question"
                        ),
                        field: Some("default_answer".into()),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
            *default_answer_id = *new_default;
            *multiple = *new_multiple;
        }

        (
            QuestionKind::Range {
                min_value,
                max_value,
                min_text,
                max_text,
                default_value,
            },
            QuestionPayloadDto::Range {
                min_value: new_min,
                max_value: new_max,
                min_text: new_min_text,
                max_text: new_max_text,
                default_value: new_default,
            },
        ) => {
            *min_value = *new_min;
            *max_value = *new_max;
            *min_text = new_min_text.clone();
            *max_text = new_max_text.clone();
            *default_value = *new_default;
        }

        (
            QuestionKind::Number {
                min_value,
                max_value,
                default_value,
            },
            QuestionPayloadDto::Number {
                min_value: new_min,
                max_value: new_max,
                default_value: new_default,
            },
        ) => {
            *min_value = *new_min;
            *max_value = *new_max;
            *default_value = *new_default;
        }

        (
            QuestionKind::Text {
                multiline,
                max_length,
            },
            QuestionPayloadDto::Text {
                multiline: new_multiline,
                max_length: new_max_length,
            },
        ) => {
            *multiline = *new_multiline;
            *max_length = *new_max_length;
        }

        // The entry list is fixed at creation; the checklist itself only
        // carries the common fields above.
        (QuestionKind::Checklist { .. }, QuestionPayloadDto::Checklist { .. }) => {}

        (
            QuestionKind::ChecklistEntry { default_answer },
            QuestionPayloadDto::ChecklistEntry {
                default_answer: new_default,
            },
        ) => {
            *default_answer = *new_default;
        }

        // Unreachable after the type check above.
        _ => {
            return Err(ServiceError::Internal {
                message: "question kind diverged from its type tag".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    Ok(())
}

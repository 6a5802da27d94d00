//! Read projections from stored entities to DTOs.
//!
//! Projections hydrate the downward references of a question tree: answers,
//! nested containers and checklist entries are fetched and embedded. A
//! nested container with no questions is omitted from its question's DTO.

use crate::error::{Result as ServiceResult, ServiceError};

use sm_core::{
    AnswerDto, BooleanContainerDto, ChecklistEntryDto, ChoiceContainerDto, ContainerKind,
    Question, QuestionDto, QuestionKind, QuestionPayloadDto, Survey, SurveyDto,
};
use sm_store::DefinitionTx;

use std::future::Future;
use std::panic::Location;
use std::pin::Pin;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Project a survey with its hydrated question tree.
pub async fn survey_to_dto<T: DefinitionTx>(
    tx: &mut T,
    survey: &Survey,
) -> ServiceResult<SurveyDto> {
    let questions = questions_in_survey(tx, survey).await?;
    Ok(SurveyDto::from_survey(survey, questions))
}

/// Project the top-level questions of a survey, in child-list order.
pub async fn questions_in_survey<T: DefinitionTx>(
    tx: &mut T,
    survey: &Survey,
) -> ServiceResult<Vec<QuestionDto>> {
    let root = tx.container_by_id(survey.id).await?.ok_or_else(|| {
        let message = format!("survey {} has no root container", survey.id);
        log::error!("{message}");
        ServiceError::Internal {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    })?;
    project_questions(tx, &root.question_ids).await
}

fn project_questions<'a, T: DefinitionTx>(
    tx: &'a mut T,
    ids: &'a [Uuid],
) -> Pin<Box<dyn Future<Output = ServiceResult<Vec<QuestionDto>>> + Send + 'a>> {
    Box::pin(async move {
        let mut dtos = Vec::with_capacity(ids.len());
        for id in ids {
            let question = tx.question_by_id(*id).await?.ok_or_else(|| {
                let message = format!("container references missing question {id}");
                log::error!("{message}");
                ServiceError::Internal {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;
            dtos.push(question_to_dto(tx, &question).await?);
        }
        Ok(dtos)
    })
}

/// Project one question with its hydrated payload.
pub async fn question_to_dto<T: DefinitionTx>(
    tx: &mut T,
    question: &Question,
) -> ServiceResult<QuestionDto> {
    let payload = match &question.kind {
        QuestionKind::Bool {
            default_answer,
            container_id,
        } => QuestionPayloadDto::Bool {
            default_answer: *default_answer,
            container: bool_container_dto(tx, *container_id).await?,
        },

        QuestionKind::Choice {
            answer_ids,
            default_answer_id,
            multiple,
            container_id,
        } => {
            let answers = tx.answers_by_ids(answer_ids).await?;
            if answers.len() != answer_ids.len() {
                let message =
                    format!("choice question {} references missing answers", question.id);
                log::error!("{message}");
                return Err(ServiceError::Internal {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            QuestionPayloadDto::Choice {
                answers: answers
                    .into_iter()
                    .map(|a| AnswerDto {
                        id: Some(a.id),
                        value: a.value,
                    })
                    .collect(),
                default_answer: *default_answer_id,
                multiple: *multiple,
                container: choice_container_dto(tx, *container_id).await?,
            }
        }

        QuestionKind::Range {
            min_value,
            max_value,
            min_text,
            max_text,
            default_value,
        } => QuestionPayloadDto::Range {
            min_value: *min_value,
            max_value: *max_value,
            min_text: min_text.clone(),
            max_text: max_text.clone(),
            default_value: *default_value,
        },

        QuestionKind::Number {
            min_value,
            max_value,
            default_value,
        } => QuestionPayloadDto::Number {
            min_value: *min_value,
            max_value: *max_value,
            default_value: *default_value,
        },

        QuestionKind::Text {
            multiline,
            max_length,
        } => QuestionPayloadDto::Text {
            multiline: *multiline,
            max_length: *max_length,
        },

        QuestionKind::Checklist { entry_ids } => {
            let mut entries = Vec::with_capacity(entry_ids.len());
            for entry_id in entry_ids {
                let entry = tx.question_by_id(*entry_id).await?.ok_or_else(|| {
                    let message = format!(
                        "checklist {} references missing entry {entry_id}",
                        question.id
                    );
                    log::error!("{message}");
                    ServiceError::Internal {
                        message,
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                let QuestionKind::ChecklistEntry { default_answer } = &entry.kind else {
                    let message = format!(
                        "checklist {} entry {entry_id} has kind '{}'",
                        question.id,
                        entry.question_type().as_str()
                    );
                    log::error!("{message}");
                    return Err(ServiceError::Internal {
                        message,
                        location: ErrorLocation::from(Location::caller()),
                    });
                };
                entries.push(ChecklistEntryDto {
                    id: Some(entry.id),
                    prompt: entry.prompt.clone(),
                    rank: entry.rank,
                    optional: entry.optional,
                    default_answer: *default_answer,
                });
            }
            QuestionPayloadDto::Checklist { entries }
        }

        QuestionKind::ChecklistEntry { default_answer } => QuestionPayloadDto::ChecklistEntry {
            default_answer: *default_answer,
        },
    };

    Ok(QuestionDto {
        id: Some(question.id),
        prompt: question.prompt.clone(),
        rank: question.rank,
        optional: question.optional,
        payload,
    })
}

async fn bool_container_dto<T: DefinitionTx>(
    tx: &mut T,
    container_id: Option<Uuid>,
) -> ServiceResult<Option<BooleanContainerDto>> {
    let Some(container_id) = container_id else {
        return Ok(None);
    };
    let container = fetch_container(tx, container_id).await?;
    if container.question_ids.is_empty() {
        return Ok(None);
    }

    let ContainerKind::Boolean { depends_on } = &container.kind else {
        let message = format!(
            "container {container_id} under a bool question has kind '{}'",
            container.kind.as_str()
        );
        log::error!("{message}");
        return Err(ServiceError::Internal {
            message,
            location: ErrorLocation::from(Location::caller()),
        });
    };

    Ok(Some(BooleanContainerDto {
        depends_on: *depends_on,
        sub_questions: project_questions(tx, &container.question_ids).await?,
    }))
}

async fn choice_container_dto<T: DefinitionTx>(
    tx: &mut T,
    container_id: Option<Uuid>,
) -> ServiceResult<Option<ChoiceContainerDto>> {
    let Some(container_id) = container_id else {
        return Ok(None);
    };
    let container = fetch_container(tx, container_id).await?;
    if container.question_ids.is_empty() {
        return Ok(None);
    }

    let ContainerKind::Choice { depends_on } = container.kind.clone() else {
        let message = format!(
            "container {container_id} under a choice question has kind '{}'",
            container.kind.as_str()
        );
        log::error!("{message}");
        return Err(ServiceError::Internal {
            message,
            location: ErrorLocation::from(Location::caller()),
        });
    };

    Ok(Some(ChoiceContainerDto {
        depends_on,
        sub_questions: project_questions(tx, &container.question_ids).await?,
    }))
}

async fn fetch_container<T: DefinitionTx>(
    tx: &mut T,
    container_id: Uuid,
) -> ServiceResult<sm_core::Container> {
    tx.container_by_id(container_id).await?.ok_or_else(|| {
        let message = format!("question references missing container {container_id}");
        log::error!("{message}");
        ServiceError::Internal {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    })
}

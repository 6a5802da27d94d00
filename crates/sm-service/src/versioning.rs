//! Deep copies of survey question trees for versioning.
//!
//! A new version duplicates the whole tree of its predecessor with fresh
//! identities. Copies are made bottom-up: a choice question's answers come
//! first, then nested containers, then the question itself, so that every
//! cross-reference in the copy points at copied records. References into the
//! answer set, the choice gate and the default answer, are remapped by
//! display value since the copies carry new ids.

use crate::error::{Result as ServiceResult, ServiceError};

use sm_core::{
    Answer, Container, ContainerKind, Question, QuestionKind, ReleaseStatus, Survey,
};
use sm_store::DefinitionTx;

use std::future::Future;
use std::panic::Location;
use std::pin::Pin;

use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Copy `source`'s question tree and return the next-version survey header.
///
/// Everything below the header, questions, answers and containers plus the
/// new root container, is persisted here. The returned survey itself is not
/// saved; the caller persists it last.
pub async fn copy_survey_tree<T: DefinitionTx>(
    tx: &mut T,
    source: &Survey,
) -> ServiceResult<Survey> {
    let root = tx.container_by_id(source.id).await?.ok_or_else(|| {
        let message = format!("survey {} has no root container", source.id);
        log::error!("{message}");
        ServiceError::Internal {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let copied_children = copy_question_list(tx, &root.question_ids).await?;

    let copy = Survey {
        id: Uuid::new_v4(),
        name_id: source.name_id.clone(),
        title: source.title.clone(),
        description: source.description.clone(),
        version: source.version + 1,
        interval_type: source.interval_type,
        release_status: ReleaseStatus::New,
        reminder_type: source.reminder_type,
        created_at: Utc::now(),
    };

    tx.save_container(Container {
        id: copy.id,
        kind: ContainerKind::Survey,
        parent_question_id: None,
        question_ids: copied_children,
        created_at: Utc::now(),
    })
    .await?;

    Ok(copy)
}

/// Copy an ordered child list. Boxed because gated containers recurse back
/// through their sub-questions.
fn copy_question_list<'a, T: DefinitionTx>(
    tx: &'a mut T,
    ids: &'a [Uuid],
) -> Pin<Box<dyn Future<Output = ServiceResult<Vec<Uuid>>> + Send + 'a>> {
    Box::pin(async move {
        let mut copies = Vec::with_capacity(ids.len());
        for id in ids {
            let source = tx.question_by_id(*id).await?.ok_or_else(|| {
                let message = format!("container references missing question {id}");
                log::error!("{message}");
                ServiceError::Internal {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;
            let copy = copy_question(tx, &source).await?;
            copies.push(copy.id);
        }
        Ok(copies)
    })
}

async fn copy_question<T: DefinitionTx>(
    tx: &mut T,
    source: &Question,
) -> ServiceResult<Question> {
    let copy_id = Uuid::new_v4();

    let kind = match &source.kind {
        QuestionKind::Bool {
            default_answer,
            container_id,
        } => {
            let container_copy = match container_id {
                Some(id) => Some(copy_bool_container(tx, *id, copy_id).await?),
                None => None,
            };
            QuestionKind::Bool {
                default_answer: *default_answer,
                container_id: container_copy,
            }
        }

        QuestionKind::Choice {
            answer_ids,
            default_answer_id,
            multiple,
            container_id,
        } => {
            // 1. Copy the answer set, the remapping scope for this question
            let sources = tx.answers_by_ids(answer_ids).await?;
            if sources.len() != answer_ids.len() {
                let message =
                    format!("choice question {} references missing answers", source.id);
                log::error!("{message}");
                return Err(ServiceError::Internal {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            let mut copies = Vec::with_capacity(sources.len());
            for answer in &sources {
                copies.push(tx.save_answer(Answer::new(answer.value.clone())).await?);
            }

            // 2. Remap the default answer into the copied set by value
            let default_copy = match default_answer_id {
                Some(old_id) => {
                    let old = sources.iter().find(|a| a.id == *old_id).ok_or_else(|| {
                        let message = format!(
                            "default answer {old_id} of question {} is not among its answers",
                            source.id
                        );
                        log::error!("{message}");
                        ServiceError::Internal {
                            message,
                            location: ErrorLocation::from(Location::caller()),
                        }
                    })?;
                    let matched =
                        copies.iter().find(|c| c.value == old.value).ok_or_else(|| {
                            let message = format!(
                                "copied answer set of question {} lost value '{}'",
                                source.id, old.value
                            );
                            log::error!("{message}");
                            ServiceError::Internal {
                                message,
                                location: ErrorLocation::from(Location::caller()),
                            }
                        })?;
                    Some(matched.id)
                }
                None => None,
            };

            // 3. Copy the gated container against the copied answer set
            let container_copy = match container_id {
                Some(id) => Some(copy_choice_container(tx, *id, copy_id, &copies).await?),
                None => None,
            };

            QuestionKind::Choice {
                answer_ids: copies.iter().map(|a| a.id).collect(),
                default_answer_id: default_copy,
                multiple: *multiple,
                container_id: container_copy,
            }
        }

        QuestionKind::Checklist { entry_ids } => {
            let mut entry_copies = Vec::with_capacity(entry_ids.len());
            for entry_id in entry_ids {
                let entry = tx.question_by_id(*entry_id).await?.ok_or_else(|| {
                    let message = format!(
                        "checklist {} references missing entry {entry_id}",
                        source.id
                    );
                    log::error!("{message}");
                    ServiceError::Internal {
                        message,
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                let QuestionKind::ChecklistEntry { .. } = &entry.kind else {
                    let message = format!(
                        "checklist {} entry {entry_id} has kind '{}'",
                        source.id,
                        entry.question_type().as_str()
                    );
                    log::error!("{message}");
                    return Err(ServiceError::Internal {
                        message,
                        location: ErrorLocation::from(Location::caller()),
                    });
                };
                let persisted = tx
                    .save_question(Question {
                        id: Uuid::new_v4(),
                        prompt: entry.prompt.clone(),
                        rank: entry.rank,
                        optional: entry.optional,
                        created_at: Utc::now(),
                        kind: entry.kind.clone(),
                    })
                    .await?;
                entry_copies.push(persisted.id);
            }
            QuestionKind::Checklist {
                entry_ids: entry_copies,
            }
        }

        QuestionKind::Range { .. }
        | QuestionKind::Number { .. }
        | QuestionKind::Text { .. }
        | QuestionKind::ChecklistEntry { .. } => source.kind.clone(),
    };

    let copy = Question {
        id: copy_id,
        prompt: source.prompt.clone(),
        rank: source.rank,
        optional: source.optional,
        created_at: Utc::now(),
        kind,
    };
    Ok(tx.save_question(copy).await?)
}

async fn copy_bool_container<T: DefinitionTx>(
    tx: &mut T,
    container_id: Uuid,
    new_parent: Uuid,
) -> ServiceResult<Uuid> {
    let source = fetch_container(tx, container_id).await?;

    let kind = match &source.kind {
        ContainerKind::Boolean { .. } => source.kind.clone(),
        other => {
            let message = format!(
                "container {container_id} under a bool question has kind '{}'",
                other.as_str()
            );
            log::error!("{message}");
            return Err(ServiceError::Internal {
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let children = copy_question_list(tx, &source.question_ids).await?;
    let copy = tx
        .save_container(Container {
            id: Uuid::new_v4(),
            kind,
            parent_question_id: Some(new_parent),
            question_ids: children,
            created_at: Utc::now(),
        })
        .await?;
    Ok(copy.id)
}

async fn copy_choice_container<T: DefinitionTx>(
    tx: &mut T,
    container_id: Uuid,
    new_parent: Uuid,
    copied_answers: &[Answer],
) -> ServiceResult<Uuid> {
    let source = fetch_container(tx, container_id).await?;

    let kind = match &source.kind {
        ContainerKind::Choice { depends_on } => {
            // The old gate references answers of the old question; carry the
            // gate over by matching display values against the copied set.
            let gate_values = tx.answers_by_ids(depends_on).await?;
            let remapped = copied_answers
                .iter()
                .filter(|copy| gate_values.iter().any(|old| old.value == copy.value))
                .map(|copy| copy.id)
                .collect();
            ContainerKind::Choice {
                depends_on: remapped,
            }
        }
        other => {
            let message = format!(
                "container {container_id} under a choice question has kind '{}'",
                other.as_str()
            );
            log::error!("{message}");
            return Err(ServiceError::Internal {
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let children = copy_question_list(tx, &source.question_ids).await?;
    let copy = tx
        .save_container(Container {
            id: Uuid::new_v4(),
            kind,
            parent_question_id: Some(new_parent),
            question_ids: children,
            created_at: Utc::now(),
        })
        .await?;
    Ok(copy.id)
}

async fn fetch_container<T: DefinitionTx>(
    tx: &mut T,
    container_id: Uuid,
) -> ServiceResult<Container> {
    tx.container_by_id(container_id).await?.ok_or_else(|| {
        let message = format!("question references missing container {container_id}");
        log::error!("{message}");
        ServiceError::Internal {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    })
}

//! Bottom-up question resolution.
//!
//! A question record does not know its survey; ownership is stored downward,
//! container to child. Finding the survey means asking which container holds
//! the question and walking parent links up to the root.

use crate::error::{Result as ServiceResult, ServiceError};

use sm_core::{Container, Question, Survey};
use sm_store::DefinitionTx;

use std::panic::Location;

use error_location::ErrorLocation;

/// Where a question lives: the container directly holding it and the survey
/// rooting that container's tree.
#[derive(Debug, Clone)]
pub struct ResolvedQuestion {
    pub container: Container,
    pub survey: Survey,
}

/// Walk from `question` up to the root of its tree.
///
/// Each step asks for the container whose child set holds the current
/// question, then continues from that container's parent question. The walk
/// only ends at a root; a question no container holds, or a root that is not
/// survey-typed, is store corruption rather than caller error.
pub async fn resolve_question<T: DefinitionTx>(
    tx: &mut T,
    question: &Question,
) -> ServiceResult<ResolvedQuestion> {
    let owning = tx
        .container_holding_question(question.id)
        .await?
        .ok_or_else(|| {
            let message = format!("no container holds question {}", question.id);
            log::error!("{message}");
            ServiceError::Internal {
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

    let mut current = owning.clone();
    loop {
        match current.parent_question_id {
            Some(parent_id) => {
                current = tx
                    .container_holding_question(parent_id)
                    .await?
                    .ok_or_else(|| {
                        let message =
                            format!("no container holds parent question {parent_id}");
                        log::error!("{message}");
                        ServiceError::Internal {
                            message,
                            location: ErrorLocation::from(Location::caller()),
                        }
                    })?;
            }
            None => {
                if !current.kind.is_survey() {
                    let message =
                        format!("root container {} is not survey-typed", current.id);
                    log::error!("{message}");
                    return Err(ServiceError::Internal {
                        message,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                // The root container shares its survey's id.
                let survey = tx.survey_by_id(current.id).await?.ok_or_else(|| {
                    let message =
                        format!("root container {} has no survey record", current.id);
                    log::error!("{message}");
                    ServiceError::Internal {
                        message,
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                return Ok(ResolvedQuestion {
                    container: owning,
                    survey,
                });
            }
        }
    }
}

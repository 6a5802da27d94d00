//! Survey definition lifecycle operations.
//!
//! Every operation opens one store transaction; mutating operations commit
//! it, reads drop it, so partial writes are never observable. The store is
//! handed in explicitly; there are no ambient singletons.

use crate::error::{Result as ServiceResult, ServiceError};
use crate::factory;
use crate::mapper;
use crate::ranking;
use crate::requests::create_survey_request::CreateSurveyRequest;
use crate::requests::update_survey_request::UpdateSurveyRequest;
use crate::resolve;
use crate::versioning;

use sm_core::{Container, QuestionDto, QuestionKind, Survey, SurveyDto};
use sm_store::{
    ContainerRepository, DefinitionStore, DefinitionTx, QuestionRepository, StoreError,
    SurveyRepository,
};

use std::future::Future;
use std::panic::Location;
use std::pin::Pin;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Application service managing versioned survey definitions.
pub struct SurveyService<S: DefinitionStore> {
    store: S,
}

impl<S: DefinitionStore> SurveyService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // =========================================================================
    // Surveys
    // =========================================================================

    /// Create a survey at version 1, released and immediately usable.
    pub async fn create_survey(&self, request: CreateSurveyRequest) -> ServiceResult<SurveyDto> {
        let mut tx = self.store.begin().await?;

        // 1. New surveys start at version 1 and released.
        let survey = Survey::new(request.name_id, request.title, request.description);
        let survey = save_survey_guarded(&mut tx, survey).await?;

        // 2. Every survey owns a root container stored under its own id.
        tx.save_container(Container::survey_root(survey.id)).await?;

        let dto = mapper::survey_to_dto(&mut tx, &survey).await?;
        tx.commit().await?;

        log::info!(
            "Created survey '{}' version {} ({})",
            dto.name_id,
            dto.version,
            dto.id
        );
        Ok(dto)
    }

    /// Retrieve a single survey with its hydrated question tree.
    pub async fn get_survey_by_id(&self, survey_id: Uuid) -> ServiceResult<SurveyDto> {
        let mut tx = self.store.begin().await?;

        let survey = fetch_survey(&mut tx, survey_id).await?;
        mapper::survey_to_dto(&mut tx, &survey).await
    }

    /// Retrieve every stored survey version, ordered by name then version.
    pub async fn get_all_surveys(&self) -> ServiceResult<Vec<SurveyDto>> {
        let mut tx = self.store.begin().await?;

        let surveys = tx.all_surveys().await?;
        let mut dtos = Vec::with_capacity(surveys.len());
        for survey in &surveys {
            dtos.push(mapper::survey_to_dto(&mut tx, survey).await?);
        }
        Ok(dtos)
    }

    /// Overlay the descriptive header fields of a survey.
    ///
    /// Header metadata stays editable after release; only question tree
    /// mutations are release gated. Version, lifecycle state and the
    /// question tree are untouched.
    pub async fn update_survey(
        &self,
        survey_id: Uuid,
        request: UpdateSurveyRequest,
    ) -> ServiceResult<SurveyDto> {
        let mut tx = self.store.begin().await?;

        // 1. Overlay the header on the stored survey.
        let mut survey = fetch_survey(&mut tx, survey_id).await?;
        survey.name_id = request.name_id;
        survey.title = request.title;
        survey.description = request.description;

        // 2. Renaming onto an already stored (name_id, version) pair is a
        //    conflict, same save path as create.
        let survey = save_survey_guarded(&mut tx, survey).await?;

        let dto = mapper::survey_to_dto(&mut tx, &survey).await?;
        tx.commit().await?;

        log::info!("Updated survey '{}' ({})", dto.name_id, dto.id);
        Ok(dto)
    }

    /// Delete a survey and its entire question tree.
    pub async fn delete_survey_by_id(&self, survey_id: Uuid) -> ServiceResult<()> {
        let mut tx = self.store.begin().await?;

        // 1. The root container shares the survey's id; dropping it takes
        //    the whole tree of questions, answers and nested containers.
        let survey = fetch_survey(&mut tx, survey_id).await?;
        delete_container_tree(&mut tx, survey.id).await?;
        tx.delete_survey(survey.id).await?;

        tx.commit().await?;

        log::info!(
            "Deleted survey '{}' version {} ({})",
            survey.name_id,
            survey.version,
            survey.id
        );
        Ok(())
    }

    /// Copy the latest released version of `name_id` into a fresh draft.
    ///
    /// The copy carries version+1 and status `New`; the released head stays
    /// untouched. Two concurrent callers both see the same head, and the
    /// (name_id, version) uniqueness constraint fails the loser's save.
    pub async fn create_new_survey_version(&self, name_id: &str) -> ServiceResult<SurveyDto> {
        let mut tx = self.store.begin().await?;

        // 1. The head is the highest stored version.
        let versions = tx.surveys_by_name_id_desc(name_id).await?;
        let Some(head) = versions.first() else {
            return Err(ServiceError::NotFound {
                entity: "survey",
                key: name_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        // 2. Only a released head may be superseded.
        if !head.is_released() {
            return Err(ServiceError::Conflict {
                message: format!(
                    "survey '{}' version {} is not released",
                    head.name_id, head.version
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // 3. Copy the tree first, then persist the new header last.
        let copy = versioning::copy_survey_tree(&mut tx, head).await?;
        let copy = save_survey_guarded(&mut tx, copy).await?;

        let dto = mapper::survey_to_dto(&mut tx, &copy).await?;
        tx.commit().await?;

        log::info!(
            "Created version {} of survey '{}' ({})",
            dto.version,
            dto.name_id,
            dto.id
        );
        Ok(dto)
    }

    // =========================================================================
    // Questions
    // =========================================================================

    /// Create a question at the end of a survey's top level.
    ///
    /// The payload's dependent records (answers, nested containers with
    /// their sub questions, checklist entries) are created along with it.
    pub async fn create_question_in_survey(
        &self,
        survey_id: Uuid,
        payload: QuestionDto,
    ) -> ServiceResult<QuestionDto> {
        let mut tx = self.store.begin().await?;

        // 1. The root container shares the survey's id.
        let survey = fetch_survey(&mut tx, survey_id).await?;
        let mut root = tx.container_by_id(survey.id).await?.ok_or_else(|| {
            let message = format!("survey {} has no root container", survey.id);
            log::error!("{message}");
            ServiceError::Internal {
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        // 2. Build the question and everything hanging off it.
        let question = factory::create_question(&mut tx, &root, &payload).await?;

        // 3. Append to the root's ordered child list.
        root.question_ids.push(question.id);
        tx.save_container(root).await?;

        let dto = mapper::question_to_dto(&mut tx, &question).await?;
        tx.commit().await?;

        log::info!(
            "Created {} question {} in survey '{}'",
            question.question_type().as_str(),
            question.id,
            survey.name_id
        );
        Ok(dto)
    }

    /// Retrieve a survey's top-level questions with nested hydration.
    pub async fn get_all_questions_in_survey(
        &self,
        survey_id: Uuid,
    ) -> ServiceResult<Vec<QuestionDto>> {
        let mut tx = self.store.begin().await?;

        let survey = fetch_survey(&mut tx, survey_id).await?;
        mapper::questions_in_survey(&mut tx, &survey).await
    }

    /// Retrieve one top-level question of a survey.
    ///
    /// Nested sub questions are not addressable here; they are embedded in
    /// their parent's projection.
    pub async fn get_question_in_survey(
        &self,
        survey_id: Uuid,
        question_id: Uuid,
    ) -> ServiceResult<QuestionDto> {
        let mut tx = self.store.begin().await?;

        let survey = fetch_survey(&mut tx, survey_id).await?;
        let questions = mapper::questions_in_survey(&mut tx, &survey).await?;
        questions
            .into_iter()
            .find(|question| question.id == Some(question_id))
            .ok_or_else(|| ServiceError::NotFound {
                entity: "question",
                key: question_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Update a question in place.
    ///
    /// The question's type is immutable and its survey must not be
    /// released. A rank change pushes the displaced siblings back into a
    /// contiguous range.
    pub async fn update_question_in_survey(
        &self,
        survey_id: Uuid,
        payload: QuestionDto,
    ) -> ServiceResult<QuestionDto> {
        let mut tx = self.store.begin().await?;

        // 1. The addressed survey must exist, though the question is
        //    located through its owning container.
        fetch_survey(&mut tx, survey_id).await?;

        // 2. Updates address an existing question by id.
        let question_id = payload.id.ok_or_else(|| ServiceError::Validation {
            message: "question id is required for an update".to_string(),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let mut question = tx.question_by_id(question_id).await?.ok_or_else(|| {
            ServiceError::NotFound {
                entity: "question",
                key: question_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        // 3. Locate the owning container and survey, then overlay the
        //    payload onto the stored question.
        let context = resolve::resolve_question(&mut tx, &question).await?;
        let previous_rank = question.rank;
        factory::apply_update(&context, &mut question, &payload)?;
        let question = tx.save_question(question).await?;

        // 4. A moved question drags its displaced siblings back into a
        //    contiguous rank range.
        if question.rank != previous_rank {
            ranking::resync_ranks(&mut tx, &context.container, &question).await?;
        }

        let dto = mapper::question_to_dto(&mut tx, &question).await?;
        tx.commit().await?;

        log::info!(
            "Updated question {} in survey '{}'",
            question.id,
            context.survey.name_id
        );
        Ok(dto)
    }

    /// Delete a question and everything hanging off it.
    ///
    /// The id is detached from its holding container, and the question's
    /// answers, nested containers and checklist entries go with it.
    pub async fn delete_question(&self, question_id: Uuid) -> ServiceResult<()> {
        let mut tx = self.store.begin().await?;

        let question = tx.question_by_id(question_id).await?.ok_or_else(|| {
            ServiceError::NotFound {
                entity: "question",
                key: question_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        // 1. Checklist entries are owned by their checklist's entry list
        //    and only go away with it.
        if matches!(question.kind, QuestionKind::ChecklistEntry { .. }) {
            return Err(ServiceError::Validation {
                message: "checklist entries are removed with their checklist".to_string(),
                field: Some("id".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        // 2. Detach from the holding container, when there still is one.
        if let Some(mut holder) = tx.container_holding_question(question.id).await? {
            holder.question_ids.retain(|id| *id != question.id);
            tx.save_container(holder).await?;
        }

        // 3. Cascade the question's own subtree.
        delete_question_tree(&mut tx, question.id).await?;

        tx.commit().await?;

        log::info!(
            "Deleted {} question {}",
            question.question_type().as_str(),
            question.id
        );
        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

async fn fetch_survey<T: DefinitionTx>(tx: &mut T, survey_id: Uuid) -> ServiceResult<Survey> {
    tx.survey_by_id(survey_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound {
            entity: "survey",
            key: survey_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Save a survey, surfacing the store's (name_id, version) uniqueness
/// violation as a conflict.
async fn save_survey_guarded<T: DefinitionTx>(
    tx: &mut T,
    survey: Survey,
) -> ServiceResult<Survey> {
    let name_id = survey.name_id.clone();
    let version = survey.version;
    match tx.save_survey(survey).await {
        Ok(saved) => Ok(saved),
        Err(StoreError::Duplicate { .. }) => Err(ServiceError::Conflict {
            message: format!("survey '{name_id}' version {version} already exists"),
            location: ErrorLocation::from(Location::caller()),
        }),
        Err(source) => Err(source.into()),
    }
}

/// Remove a container and its whole subtree. Absent nodes are tolerated so
/// a partially removed tree can still be cleaned up.
fn delete_container_tree<'a, T: DefinitionTx>(
    tx: &'a mut T,
    container_id: Uuid,
) -> Pin<Box<dyn Future<Output = ServiceResult<()>> + Send + 'a>> {
    Box::pin(async move {
        let Some(container) = tx.container_by_id(container_id).await? else {
            return Ok(());
        };
        for question_id in &container.question_ids {
            delete_question_tree(tx, *question_id).await?;
        }
        tx.delete_container(container.id).await?;
        Ok(())
    })
}

/// Remove a question record together with its dependent records.
async fn delete_question_tree<T: DefinitionTx>(
    tx: &mut T,
    question_id: Uuid,
) -> ServiceResult<()> {
    let Some(question) = tx.question_by_id(question_id).await? else {
        return Ok(());
    };

    match &question.kind {
        QuestionKind::Choice { answer_ids, .. } => {
            tx.delete_answers(answer_ids).await?;
        }
        QuestionKind::Checklist { entry_ids } => {
            tx.delete_questions(entry_ids).await?;
        }
        _ => {}
    }
    if let Some(container_id) = question.nested_container_id() {
        delete_container_tree(tx, container_id).await?;
    }

    tx.delete_question(question.id).await?;
    Ok(())
}

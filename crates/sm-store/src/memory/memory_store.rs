use crate::error::Result as StoreResult;
use crate::error::StoreError;
use crate::repositories::answer_repository::AnswerRepository;
use crate::repositories::container_repository::ContainerRepository;
use crate::repositories::definition_store::{DefinitionStore, DefinitionTx};
use crate::repositories::question_repository::QuestionRepository;
use crate::repositories::survey_repository::SurveyRepository;

use sm_core::{Answer, Container, Question, Survey};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
struct State {
    surveys: HashMap<Uuid, Survey>,
    containers: HashMap<Uuid, Container>,
    questions: HashMap<Uuid, Question>,
    answers: HashMap<Uuid, Answer>,
}

/// In-memory definition store.
///
/// `begin` takes the store lock for the lifetime of the transaction and
/// stages a copy of the state, so writers are serialized and a dropped
/// transaction leaves the shared state untouched. `commit` swaps the staged
/// copy in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DefinitionStore for MemoryStore {
    type Tx = MemoryTx;

    async fn begin(&self) -> StoreResult<MemoryTx> {
        let guard = self.state.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(MemoryTx { guard, staged })
    }
}

/// Transaction over a staged copy of the store state.
pub struct MemoryTx {
    guard: OwnedMutexGuard<State>,
    staged: State,
}

#[async_trait]
impl DefinitionTx for MemoryTx {
    async fn commit(self) -> StoreResult<()> {
        let MemoryTx { mut guard, staged } = self;
        *guard = staged;
        Ok(())
    }
}

#[async_trait]
impl SurveyRepository for MemoryTx {
    async fn survey_by_id(&mut self, id: Uuid) -> StoreResult<Option<Survey>> {
        Ok(self.staged.surveys.get(&id).cloned())
    }

    async fn surveys_by_name_id_desc(&mut self, name_id: &str) -> StoreResult<Vec<Survey>> {
        let mut versions: Vec<Survey> = self
            .staged
            .surveys
            .values()
            .filter(|survey| survey.name_id == name_id)
            .cloned()
            .collect();
        versions.sort_by(|a, b| b.version.cmp(&a.version));
        Ok(versions)
    }

    async fn all_surveys(&mut self) -> StoreResult<Vec<Survey>> {
        let mut surveys: Vec<Survey> = self.staged.surveys.values().cloned().collect();
        // Stable listing order, name then version.
        surveys.sort_by(|a, b| {
            a.name_id
                .cmp(&b.name_id)
                .then_with(|| a.version.cmp(&b.version))
        });
        Ok(surveys)
    }

    async fn save_survey(&mut self, mut survey: Survey) -> StoreResult<Survey> {
        if survey.id.is_nil() {
            survey.id = Uuid::new_v4();
        }
        let clash = self.staged.surveys.values().any(|existing| {
            existing.id != survey.id
                && existing.name_id == survey.name_id
                && existing.version == survey.version
        });
        if clash {
            return Err(StoreError::Duplicate {
                entity: "survey",
                detail: format!(
                    "'{}' already has a version {}",
                    survey.name_id, survey.version
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.staged.surveys.insert(survey.id, survey.clone());
        Ok(survey)
    }

    async fn delete_survey(&mut self, id: Uuid) -> StoreResult<()> {
        self.staged.surveys.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ContainerRepository for MemoryTx {
    async fn container_by_id(&mut self, id: Uuid) -> StoreResult<Option<Container>> {
        Ok(self.staged.containers.get(&id).cloned())
    }

    async fn container_holding_question(
        &mut self,
        question_id: Uuid,
    ) -> StoreResult<Option<Container>> {
        Ok(self
            .staged
            .containers
            .values()
            .find(|container| container.question_ids.contains(&question_id))
            .cloned())
    }

    async fn save_container(&mut self, mut container: Container) -> StoreResult<Container> {
        if container.id.is_nil() {
            container.id = Uuid::new_v4();
        }
        self.staged
            .containers
            .insert(container.id, container.clone());
        Ok(container)
    }

    async fn delete_container(&mut self, id: Uuid) -> StoreResult<()> {
        self.staged.containers.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MemoryTx {
    async fn question_by_id(&mut self, id: Uuid) -> StoreResult<Option<Question>> {
        Ok(self.staged.questions.get(&id).cloned())
    }

    async fn save_question(&mut self, mut question: Question) -> StoreResult<Question> {
        if question.id.is_nil() {
            question.id = Uuid::new_v4();
        }
        self.staged.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&mut self, id: Uuid) -> StoreResult<()> {
        self.staged.questions.remove(&id);
        Ok(())
    }

    async fn delete_questions(&mut self, ids: &[Uuid]) -> StoreResult<()> {
        for id in ids {
            self.staged.questions.remove(id);
        }
        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for MemoryTx {
    async fn answer_by_id(&mut self, id: Uuid) -> StoreResult<Option<Answer>> {
        Ok(self.staged.answers.get(&id).cloned())
    }

    async fn answers_by_ids(&mut self, ids: &[Uuid]) -> StoreResult<Vec<Answer>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.staged.answers.get(id).cloned())
            .collect())
    }

    async fn save_answer(&mut self, mut answer: Answer) -> StoreResult<Answer> {
        if answer.id.is_nil() {
            answer.id = Uuid::new_v4();
        }
        self.staged.answers.insert(answer.id, answer.clone());
        Ok(answer)
    }

    async fn delete_answer(&mut self, id: Uuid) -> StoreResult<()> {
        self.staged.answers.remove(&id);
        Ok(())
    }

    async fn delete_answers(&mut self, ids: &[Uuid]) -> StoreResult<()> {
        for id in ids {
            self.staged.answers.remove(id);
        }
        Ok(())
    }
}

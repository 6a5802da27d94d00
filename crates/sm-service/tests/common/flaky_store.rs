#![allow(dead_code)]

use sm_core::{Answer, Container, Question, Survey};
use sm_store::{
    AnswerRepository, ContainerRepository, DefinitionStore, DefinitionTx, MemoryStore, MemoryTx,
    QuestionRepository, Result as StoreResult, StoreError, SurveyRepository,
};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Store wrapper that fails every write once a budget is spent.
///
/// Reads pass through untouched; each write decrements the shared budget
/// and fails with a backend error when it is gone. Used to push persistence
/// failures into the middle of multi-write operations.
#[derive(Clone)]
pub struct FlakyStore {
    inner: MemoryStore,
    writes_left: Arc<AtomicUsize>,
}

impl FlakyStore {
    pub fn failing_after(inner: MemoryStore, writes: usize) -> Self {
        Self {
            inner,
            writes_left: Arc::new(AtomicUsize::new(writes)),
        }
    }
}

#[async_trait]
impl DefinitionStore for FlakyStore {
    type Tx = FlakyTx;

    async fn begin(&self) -> StoreResult<FlakyTx> {
        Ok(FlakyTx {
            inner: self.inner.begin().await?,
            writes_left: self.writes_left.clone(),
        })
    }
}

/// Transaction of a [`FlakyStore`]; delegates to the wrapped memory
/// transaction after charging writes against the budget.
pub struct FlakyTx {
    inner: MemoryTx,
    writes_left: Arc<AtomicUsize>,
}

impl FlakyTx {
    fn spend_write(&self) -> StoreResult<()> {
        let spent = self
            .writes_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            });
        match spent {
            Ok(_) => Ok(()),
            Err(_) => Err(StoreError::Backend {
                message: "write budget spent".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[async_trait]
impl DefinitionTx for FlakyTx {
    async fn commit(self) -> StoreResult<()> {
        self.inner.commit().await
    }
}

#[async_trait]
impl SurveyRepository for FlakyTx {
    async fn survey_by_id(&mut self, id: Uuid) -> StoreResult<Option<Survey>> {
        self.inner.survey_by_id(id).await
    }

    async fn surveys_by_name_id_desc(&mut self, name_id: &str) -> StoreResult<Vec<Survey>> {
        self.inner.surveys_by_name_id_desc(name_id).await
    }

    async fn all_surveys(&mut self) -> StoreResult<Vec<Survey>> {
        self.inner.all_surveys().await
    }

    async fn save_survey(&mut self, survey: Survey) -> StoreResult<Survey> {
        self.spend_write()?;
        self.inner.save_survey(survey).await
    }

    async fn delete_survey(&mut self, id: Uuid) -> StoreResult<()> {
        self.spend_write()?;
        self.inner.delete_survey(id).await
    }
}

#[async_trait]
impl ContainerRepository for FlakyTx {
    async fn container_by_id(&mut self, id: Uuid) -> StoreResult<Option<Container>> {
        self.inner.container_by_id(id).await
    }

    async fn container_holding_question(
        &mut self,
        question_id: Uuid,
    ) -> StoreResult<Option<Container>> {
        self.inner.container_holding_question(question_id).await
    }

    async fn save_container(&mut self, container: Container) -> StoreResult<Container> {
        self.spend_write()?;
        self.inner.save_container(container).await
    }

    async fn delete_container(&mut self, id: Uuid) -> StoreResult<()> {
        self.spend_write()?;
        self.inner.delete_container(id).await
    }
}

#[async_trait]
impl QuestionRepository for FlakyTx {
    async fn question_by_id(&mut self, id: Uuid) -> StoreResult<Option<Question>> {
        self.inner.question_by_id(id).await
    }

    async fn save_question(&mut self, question: Question) -> StoreResult<Question> {
        self.spend_write()?;
        self.inner.save_question(question).await
    }

    async fn delete_question(&mut self, id: Uuid) -> StoreResult<()> {
        self.spend_write()?;
        self.inner.delete_question(id).await
    }

    async fn delete_questions(&mut self, ids: &[Uuid]) -> StoreResult<()> {
        self.spend_write()?;
        self.inner.delete_questions(ids).await
    }
}

#[async_trait]
impl AnswerRepository for FlakyTx {
    async fn answer_by_id(&mut self, id: Uuid) -> StoreResult<Option<Answer>> {
        self.inner.answer_by_id(id).await
    }

    async fn answers_by_ids(&mut self, ids: &[Uuid]) -> StoreResult<Vec<Answer>> {
        self.inner.answers_by_ids(ids).await
    }

    async fn save_answer(&mut self, answer: Answer) -> StoreResult<Answer> {
        self.spend_write()?;
        self.inner.save_answer(answer).await
    }

    async fn delete_answer(&mut self, id: Uuid) -> StoreResult<()> {
        self.spend_write()?;
        self.inner.delete_answer(id).await
    }

    async fn delete_answers(&mut self, ids: &[Uuid]) -> StoreResult<()> {
        self.spend_write()?;
        self.inner.delete_answers(ids).await
    }
}

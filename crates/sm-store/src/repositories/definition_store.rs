use crate::error::Result as StoreResult;
use crate::repositories::answer_repository::AnswerRepository;
use crate::repositories::container_repository::ContainerRepository;
use crate::repositories::question_repository::QuestionRepository;
use crate::repositories::survey_repository::SurveyRepository;

use async_trait::async_trait;

/// One unit of work spanning the four entity repositories.
///
/// Writes become visible to later transactions only after `commit`; dropping
/// an uncommitted transaction discards everything it wrote.
#[async_trait]
pub trait DefinitionTx:
    SurveyRepository + ContainerRepository + QuestionRepository + AnswerRepository + Send
{
    async fn commit(self) -> StoreResult<()>;
}

/// Handle to a survey definition store, handing out transactions.
#[async_trait]
pub trait DefinitionStore: Send + Sync {
    type Tx: DefinitionTx;

    async fn begin(&self) -> StoreResult<Self::Tx>;
}

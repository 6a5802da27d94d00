use crate::error::Result as StoreResult;

use sm_core::Answer;

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations for choice answers.
#[async_trait]
pub trait AnswerRepository {
    async fn answer_by_id(&mut self, id: Uuid) -> StoreResult<Option<Answer>>;

    /// Answers for `ids`, in the order given. Ids without a stored answer
    /// are skipped; callers compare lengths when absence matters.
    async fn answers_by_ids(&mut self, ids: &[Uuid]) -> StoreResult<Vec<Answer>>;

    /// Insert or update. A nil id is replaced with a fresh one before the
    /// write; the persisted form is returned.
    async fn save_answer(&mut self, answer: Answer) -> StoreResult<Answer>;

    /// Removes the answer record only. Deleting an absent id is a no-op.
    async fn delete_answer(&mut self, id: Uuid) -> StoreResult<()>;

    async fn delete_answers(&mut self, ids: &[Uuid]) -> StoreResult<()>;
}

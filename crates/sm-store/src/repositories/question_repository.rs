use crate::error::Result as StoreResult;

use sm_core::Question;

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations for questions of every type, checklist entries
/// included.
#[async_trait]
pub trait QuestionRepository {
    async fn question_by_id(&mut self, id: Uuid) -> StoreResult<Option<Question>>;

    /// Insert or update. A nil id is replaced with a fresh one before the
    /// write; the persisted form is returned.
    async fn save_question(&mut self, question: Question) -> StoreResult<Question>;

    /// Removes the question record only. Deleting an absent id is a no-op.
    async fn delete_question(&mut self, id: Uuid) -> StoreResult<()>;

    async fn delete_questions(&mut self, ids: &[Uuid]) -> StoreResult<()>;
}

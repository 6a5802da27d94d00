use crate::error::Result as StoreResult;

use sm_core::Container;

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations for question containers.
#[async_trait]
pub trait ContainerRepository {
    async fn container_by_id(&mut self, id: Uuid) -> StoreResult<Option<Container>>;

    /// The container whose ordered child set holds `question_id`. Checklist
    /// entries live in their checklist's entry set, not in any container, so
    /// they have no holder.
    async fn container_holding_question(
        &mut self,
        question_id: Uuid,
    ) -> StoreResult<Option<Container>>;

    /// Insert or update. A nil id is replaced with a fresh one before the
    /// write; the persisted form is returned.
    async fn save_container(&mut self, container: Container) -> StoreResult<Container>;

    /// Removes the container node only, not its children. Deleting an
    /// absent id is a no-op.
    async fn delete_container(&mut self, id: Uuid) -> StoreResult<()>;
}

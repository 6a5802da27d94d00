use crate::error::Result as StoreResult;

use sm_core::Survey;

use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations for survey headers.
#[async_trait]
pub trait SurveyRepository {
    async fn survey_by_id(&mut self, id: Uuid) -> StoreResult<Option<Survey>>;

    /// All versions sharing `name_id`, highest version first.
    async fn surveys_by_name_id_desc(&mut self, name_id: &str) -> StoreResult<Vec<Survey>>;

    async fn all_surveys(&mut self) -> StoreResult<Vec<Survey>>;

    /// Insert or update. A nil id is replaced with a fresh one before the
    /// write; the persisted form is returned. A second survey with an
    /// already stored `(name_id, version)` pair is rejected as a duplicate.
    async fn save_survey(&mut self, survey: Survey) -> StoreResult<Survey>;

    /// Removes the survey header only. Deleting an absent id is a no-op.
    async fn delete_survey(&mut self, id: Uuid) -> StoreResult<()>;
}

//! Sibling rank maintenance.
//!
//! Siblings of one container hold the contiguous rank range `0..N-1`,
//! matching their position in the container's child list. A rank move
//! breaks that layout for everything between the old and the new position;
//! `resync_ranks` restores it.

use crate::error::{Result as ServiceResult, ServiceError};

use sm_core::{Container, Question};
use sm_store::DefinitionTx;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Renumber the siblings of `moved` after its rank changed.
///
/// The moved question is reinserted into the child list at its new rank and
/// every sibling takes its list position as rank. Siblings outside the
/// shifted span already match and are not written. The caller has already
/// validated the new rank against the sibling count and saved the moved
/// question itself.
pub async fn resync_ranks<T: DefinitionTx>(
    tx: &mut T,
    container: &Container,
    moved: &Question,
) -> ServiceResult<()> {
    let mut order: Vec<Uuid> = container
        .question_ids
        .iter()
        .copied()
        .filter(|id| *id != moved.id)
        .collect();
    let slot = (moved.rank as usize).min(order.len());
    order.insert(slot, moved.id);

    for (index, id) in order.iter().enumerate() {
        if *id == moved.id {
            // Carries rank == index by construction.
            continue;
        }
        let mut sibling = tx.question_by_id(*id).await?.ok_or_else(|| {
            let message = format!("container {} references missing question {id}", container.id);
            log::error!("{message}");
            ServiceError::Internal {
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
        if sibling.rank != index as i32 {
            sibling.rank = index as i32;
            tx.save_question(sibling).await?;
        }
    }

    let mut reordered = container.clone();
    reordered.question_ids = order;
    tx.save_container(reordered).await?;

    Ok(())
}

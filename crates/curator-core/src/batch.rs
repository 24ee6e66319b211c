use tracing::{info, warn};

use crate::gateway::PostGateway;

/// Tally of a delete batch. The reload that follows runs regardless of how
/// many deletions failed; failed ids simply reappear in the reloaded list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    pub deleted: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn all_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Deletes the given posts one request at a time, in order. Each call is
/// awaited before the next starts so partial failures stay attributable and
/// the backend never sees the batch as a burst. Individual failures are
/// logged and counted, never fatal.
pub async fn delete_batch<G: PostGateway>(gateway: &G, ids: &[i64]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for &id in ids {
        match gateway.delete_post(id).await {
            Ok(()) => {
                info!(id, "deleted post");
                outcome.deleted += 1;
            }
            Err(err) => {
                warn!(id, %err, "failed to delete post");
                outcome.failed += 1;
            }
        }
    }
    outcome
}

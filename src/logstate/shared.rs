use crate::logstate::metadata::LogMetadata;
use crate::storage::{Capacity, CommitNotice, LogSnapshot};
use tokio::sync::watch;

/// SharedLogState is the single source of truth for the log's metadata.
///
/// The metadata lives in a watch channel: writers mutate it under the
/// channel's internal lock via `send_modify` (constant-time, never held
/// across I/O), and every mutation is one broadcast. Readers that need to
/// suspend until `last_index` reaches a threshold hold a `watch::Receiver`
/// and re-check the value after each wakeup, so a slow reader never queues
/// work on the commit path and a wakeup can never be lost.
pub(crate) struct SharedLogState {
    tx: watch::Sender<LogMetadata>,
}

/// Outcome of suspending on the commit watch.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum CommitWait {
    /// `last_index` reached the threshold.
    Committed,
    /// `first_index` moved past the threshold while waiting; the caller's
    /// cursor now points into a truncated prefix.
    TruncatedPast,
    /// The log state was dropped (server shutting down).
    Closed,
}

impl SharedLogState {
    pub(crate) fn new(initial: LogMetadata) -> Self {
        let (tx, _rx) = watch::channel(initial);
        SharedLogState { tx }
    }

    pub(crate) fn snapshot(&self) -> LogMetadata {
        *self.tx.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<LogMetadata> {
        self.tx.subscribe()
    }

    /// Applies a commit notice from the storage adapter. `last_index` only
    /// ratchets forward; a stale notice still refreshes the byte counter.
    pub(crate) fn advance_commit(&self, notice: &CommitNotice) {
        self.tx.send_modify(|metadata| {
            if notice.last_index > metadata.last_index {
                metadata.last_index = notice.last_index;
            }
            metadata.bytes_used = notice.bytes_used;
        });
    }

    /// Advances `first_index` after a prefix discard.
    pub(crate) fn apply_discard(&self, new_first_index: u64) {
        self.tx.send_modify(|metadata| {
            if new_first_index > metadata.first_index {
                metadata.first_index = new_first_index;
            }
        });
    }

    /// Advances both bounds after a fast-forward discard: the log becomes
    /// empty again at `first_index = new_first_index`.
    pub(crate) fn apply_fast_forward(&self, new_first_index: u64) {
        self.tx.send_modify(|metadata| {
            debug_assert!(
                new_first_index > metadata.first_index,
                "fast-forward must move first_index forward"
            );
            metadata.first_index = new_first_index;
            if new_first_index - 1 > metadata.last_index {
                metadata.last_index = new_first_index - 1;
            }
        });
    }

    pub(crate) fn set_capacity(&self, capacity: Capacity) {
        self.tx.send_modify(|metadata| {
            metadata.bytes_used = capacity.bytes_used;
            metadata.bytes_total = capacity.bytes_total;
        });
    }

    /// Merges an authoritative storage snapshot. Bounds only ratchet forward.
    pub(crate) fn absorb_snapshot(&self, snapshot: &LogSnapshot) {
        self.tx.send_modify(|metadata| {
            if snapshot.first_index > metadata.first_index {
                metadata.first_index = snapshot.first_index;
            }
            if snapshot.last_index > metadata.last_index {
                metadata.last_index = snapshot.last_index;
            }
            metadata.bytes_used = snapshot.bytes_used;
            metadata.bytes_total = snapshot.bytes_total;
        });
    }
}

/// Suspends until `last_index >= threshold`, the prefix containing
/// `threshold` is truncated away, or the log state is dropped.
///
/// Cancellation is the caller's concern: select against this future and the
/// RPC's disconnect signal.
pub(crate) async fn wait_for_committed(
    receiver: &mut watch::Receiver<LogMetadata>,
    threshold: u64,
) -> CommitWait {
    let result = receiver
        .wait_for(|metadata| metadata.last_index >= threshold || metadata.first_index > threshold)
        .await;

    match result {
        Ok(metadata) => {
            if metadata.first_index > threshold {
                CommitWait::TruncatedPast
            } else {
                CommitWait::Committed
            }
        }
        Err(_) => CommitWait::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Duration;

    fn notice(last_index: u64, bytes_used: u64) -> CommitNotice {
        CommitNotice {
            last_index,
            bytes_used,
        }
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_committed() {
        let state = SharedLogState::new(LogMetadata::new_empty(1024));
        state.advance_commit(&notice(3, 30));

        let mut receiver = state.subscribe();
        assert_eq!(wait_for_committed(&mut receiver, 3).await, CommitWait::Committed);
    }

    #[tokio::test]
    async fn waiter_wakes_on_commit_advance() {
        let state = SharedLogState::new(LogMetadata::new_empty(1024));
        let mut receiver = state.subscribe();

        let waiter = tokio::spawn(async move { wait_for_committed(&mut receiver, 5).await });

        // Not satisfied by an advance below the threshold.
        state.advance_commit(&notice(4, 4));
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        state.advance_commit(&notice(5, 5));
        assert_eq!(waiter.await.unwrap(), CommitWait::Committed);
    }

    #[tokio::test]
    async fn waiter_observes_truncation_past_threshold() {
        let state = SharedLogState::new(LogMetadata::new_empty(1024));
        let mut receiver = state.subscribe();

        let waiter = tokio::spawn(async move { wait_for_committed(&mut receiver, 5).await });

        state.apply_fast_forward(10);
        assert_eq!(waiter.await.unwrap(), CommitWait::TruncatedPast);
    }

    #[tokio::test]
    async fn waiter_observes_state_drop() {
        let state = SharedLogState::new(LogMetadata::new_empty(1024));
        let mut receiver = state.subscribe();

        let waiter = tokio::spawn(async move { wait_for_committed(&mut receiver, 5).await });

        drop(state);
        assert_eq!(waiter.await.unwrap(), CommitWait::Closed);
    }

    #[tokio::test]
    async fn commit_index_only_ratchets_forward() {
        let state = SharedLogState::new(LogMetadata::new_empty(1024));
        state.advance_commit(&notice(7, 70));
        state.advance_commit(&notice(3, 65));

        let metadata = state.snapshot();
        assert_eq!(metadata.last_index, 7);
        assert_eq!(metadata.bytes_used, 65);
    }

    #[tokio::test]
    async fn fast_forward_leaves_log_empty_at_new_first() {
        let state = SharedLogState::new(LogMetadata::new_empty(1024));
        state.advance_commit(&notice(10, 100));

        state.apply_fast_forward(100);

        let metadata = state.snapshot();
        assert_eq!(metadata.first_index, 100);
        assert_eq!(metadata.last_index, 99);
        assert!(metadata.is_empty());
    }
}

use crate::storage::api::{
    Capacity, CommitNotice, CommitSubscription, LogEntry, LogSnapshot, ProposeError, ReadAtError,
    RoleKind, RoleSnapshot, StorageAdapter, TruncatePrefixError,
};
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::mpsc;

/// InMemoryStorage models the consensus/persistence backend in memory:
/// commits are immediate, indexes are dense, and capacity is a simple byte
/// budget over live payloads. It backs the integration tests and the
/// single-node dev server.
///
/// The role is configurable so redirect behavior can be exercised without a
/// real cluster.
pub struct InMemoryStorage {
    logger: slog::Logger,
    inner: Mutex<Inner>,
}

struct Inner {
    first_index: u64,
    last_index: u64,
    entries: HashMap<u64, LogEntry>,
    bytes_used: u64,
    bytes_total: u64,
    role: RoleSnapshot,
    commit_subscribers: Vec<mpsc::UnboundedSender<CommitNotice>>,
}

impl InMemoryStorage {
    pub fn new(logger: slog::Logger, bytes_total: u64, role: RoleSnapshot) -> Self {
        InMemoryStorage {
            logger,
            inner: Mutex::new(Inner {
                first_index: 1,
                last_index: 0,
                entries: HashMap::new(),
                bytes_used: 0,
                bytes_total,
                role,
                commit_subscribers: Vec::new(),
            }),
        }
    }

    /// Swaps this server's role, e.g. to simulate losing or gaining primacy.
    pub fn set_role(&self, role: RoleSnapshot) {
        self.lock_inner().role = role;
    }

    fn lock_inner(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("in-memory storage mutex poisoned")
    }
}

impl Inner {
    fn reject_if_not_primary(&self) -> Result<(), Option<String>> {
        match self.role.kind {
            RoleKind::Primary => Ok(()),
            RoleKind::Follower | RoleKind::Unknown => Err(self.role.primary_hint.clone()),
        }
    }

    fn publish_commit(&mut self) {
        let notice = CommitNotice {
            last_index: self.last_index,
            bytes_used: self.bytes_used,
        };
        self.commit_subscribers.retain(|sender| sender.send(notice).is_ok());
    }
}

#[async_trait::async_trait]
impl StorageAdapter for InMemoryStorage {
    async fn propose(&self, batch: Vec<Bytes>) -> Result<Vec<u64>, ProposeError> {
        let mut inner = self.lock_inner();
        inner
            .reject_if_not_primary()
            .map_err(|primary_hint| ProposeError::NotPrimary { primary_hint })?;

        // TODO:3 charge a fixed per-entry overhead on top of payload size.
        let batch_cost: u64 = batch.iter().map(|data| data.len() as u64).sum();
        if inner.bytes_used + batch_cost > inner.bytes_total {
            return Err(ProposeError::Full);
        }

        let mut indexes = Vec::with_capacity(batch.len());
        for data in batch {
            let index = inner.last_index + 1;
            inner.bytes_used += data.len() as u64;
            inner.entries.insert(index, LogEntry::new(index, data));
            inner.last_index = index;
            indexes.push(index);
        }

        inner.publish_commit();
        Ok(indexes)
    }

    async fn propose_skips(&self, new_first_index: u64) -> Result<(), ProposeError> {
        let mut inner = self.lock_inner();
        inner
            .reject_if_not_primary()
            .map_err(|primary_hint| ProposeError::NotPrimary { primary_hint })?;

        while inner.last_index + 1 < new_first_index {
            let index = inner.last_index + 1;
            inner.entries.insert(index, LogEntry::new_skip(index));
            inner.last_index = index;
        }

        inner.publish_commit();
        Ok(())
    }

    async fn read_at(&self, index: u64) -> Result<LogEntry, ReadAtError> {
        let inner = self.lock_inner();
        if index < inner.first_index {
            return Err(ReadAtError::Truncated);
        }
        if index > inner.last_index {
            return Err(ReadAtError::NotFound);
        }

        inner.entries.get(&index).cloned().ok_or(ReadAtError::NotFound)
    }

    async fn truncate_prefix(&self, new_first_index: u64) -> Result<(), TruncatePrefixError> {
        let mut inner = self.lock_inner();

        // Never truncate past the tail; the skip-aware propose path is
        // responsible for extending the log first.
        let effective_first = new_first_index.min(inner.last_index + 1);
        if effective_first <= inner.first_index {
            return Ok(());
        }

        let mut freed: u64 = 0;
        for index in inner.first_index..effective_first {
            if let Some(entry) = inner.entries.remove(&index) {
                freed += entry.data.len() as u64;
            }
        }
        inner.first_index = effective_first;
        inner.bytes_used = inner.bytes_used.saturating_sub(freed);
        inner.publish_commit();

        slog::debug!(
            self.logger,
            "Truncated prefix to {}; freed {} bytes",
            effective_first,
            freed
        );
        Ok(())
    }

    fn subscribe_commits(&self) -> CommitSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock_inner().commit_subscribers.push(tx);
        CommitSubscription::new(rx)
    }

    async fn capacity_probe(&self) -> Capacity {
        let inner = self.lock_inner();
        Capacity {
            bytes_used: inner.bytes_used,
            bytes_total: inner.bytes_total,
        }
    }

    async fn log_snapshot(&self) -> LogSnapshot {
        let inner = self.lock_inner();
        LogSnapshot {
            first_index: inner.first_index,
            last_index: inner.last_index,
            bytes_used: inner.bytes_used,
            bytes_total: inner.bytes_total,
        }
    }

    fn role(&self) -> RoleSnapshot {
        self.lock_inner().role.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_logger() -> slog::Logger {
        slog::Logger::root(slog::Discard, slog::o!())
    }

    fn primary_storage(bytes_total: u64) -> InMemoryStorage {
        InMemoryStorage::new(test_logger(), bytes_total, RoleSnapshot::primary())
    }

    #[tokio::test]
    async fn propose_assigns_dense_indexes() {
        let storage = primary_storage(1024);

        let first = storage.propose(vec![Bytes::from("a"), Bytes::from("b")]).await.unwrap();
        let second = storage.propose(vec![Bytes::from("c")]).await.unwrap();

        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![3]);
        assert_eq!(storage.read_at(2).await.unwrap().data, Bytes::from("b"));
    }

    #[tokio::test]
    async fn propose_rejected_when_capacity_exhausted() {
        let storage = primary_storage(4);
        storage.propose(vec![Bytes::from("abc")]).await.unwrap();

        let result = storage.propose(vec![Bytes::from("de")]).await;

        assert!(matches!(result, Err(ProposeError::Full)));
        // The failed batch must not consume capacity.
        assert_eq!(storage.capacity_probe().await.bytes_used, 3);
    }

    #[tokio::test]
    async fn follower_rejects_propose_with_hint() {
        let storage = InMemoryStorage::new(test_logger(), 1024, RoleSnapshot::follower("primary:1234"));

        let result = storage.propose(vec![Bytes::from("a")]).await;

        match result {
            Err(ProposeError::NotPrimary { primary_hint }) => {
                assert_eq!(primary_hint.as_deref(), Some("primary:1234"));
            }
            other => panic!("expected NotPrimary, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn read_below_first_index_reports_truncated() {
        let storage = primary_storage(1024);
        storage.propose(vec![Bytes::from("a"), Bytes::from("b"), Bytes::from("c")]).await.unwrap();

        storage.truncate_prefix(3).await.unwrap();

        assert!(matches!(storage.read_at(1).await, Err(ReadAtError::Truncated)));
        assert!(matches!(storage.read_at(2).await, Err(ReadAtError::Truncated)));
        assert_eq!(storage.read_at(3).await.unwrap().data, Bytes::from("c"));
        assert!(matches!(storage.read_at(4).await, Err(ReadAtError::NotFound)));
    }

    #[tokio::test]
    async fn truncate_frees_bytes() {
        let storage = primary_storage(1024);
        storage.propose(vec![Bytes::from("aaaa"), Bytes::from("bb")]).await.unwrap();
        assert_eq!(storage.capacity_probe().await.bytes_used, 6);

        storage.truncate_prefix(2).await.unwrap();

        assert_eq!(storage.capacity_probe().await.bytes_used, 2);
    }

    #[tokio::test]
    async fn propose_skips_extends_tail_with_skip_entries() {
        let storage = primary_storage(1024);
        storage.propose(vec![Bytes::from("a")]).await.unwrap();

        storage.propose_skips(5).await.unwrap();

        let snapshot = storage.log_snapshot().await;
        assert_eq!(snapshot.last_index, 4);
        let filler = storage.read_at(3).await.unwrap();
        assert!(filler.skip);
        assert!(filler.data.is_empty());
    }

    #[tokio::test]
    async fn subscriber_receives_commit_notices() {
        let storage = primary_storage(1024);
        let mut subscription = storage.subscribe_commits();

        storage.propose(vec![Bytes::from("abc")]).await.unwrap();

        let notice = subscription.recv().await.unwrap();
        assert_eq!(notice.last_index, 1);
        assert_eq!(notice.bytes_used, 3);
    }

    #[tokio::test]
    async fn snapshot_reflects_fast_forward_flow() {
        let storage = primary_storage(1024);
        storage.propose(vec![Bytes::from("a")]).await.unwrap();

        storage.propose_skips(100).await.unwrap();
        storage.truncate_prefix(100).await.unwrap();

        let snapshot = storage.log_snapshot().await;
        assert_eq!(snapshot.first_index, 100);
        assert_eq!(snapshot.last_index, 99);
        assert_eq!(snapshot.bytes_used, 0);
    }
}

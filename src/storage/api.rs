use bytes::Bytes;
use tokio::sync::mpsc;

/// LogEntry is the atomic log element: a unique index, an opaque payload,
/// and a skip marker for entries that exist only to keep the index range
/// dense (consensus no-ops, fast-forward filler).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogEntry {
    pub index: u64,
    pub skip: bool,
    pub data: Bytes,
}

impl LogEntry {
    pub fn new(index: u64, data: Bytes) -> Self {
        LogEntry {
            index,
            skip: false,
            data,
        }
    }

    pub fn new_skip(index: u64) -> Self {
        LogEntry {
            index,
            skip: true,
            data: Bytes::new(),
        }
    }
}

/// Approximate live-storage accounting, as reported by the backend.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Capacity {
    pub bytes_used: u64,
    pub bytes_total: u64,
}

/// A commit notification: the log's last index advanced to `last_index`.
/// Carries the byte counter so observers track space without a second probe.
#[derive(Copy, Clone, Debug)]
pub struct CommitNotice {
    pub last_index: u64,
    pub bytes_used: u64,
}

/// Authoritative metadata as the backend knows it. Also what the backend
/// must be able to reproduce after a restart.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LogSnapshot {
    pub first_index: u64,
    pub last_index: u64,
    pub bytes_used: u64,
    pub bytes_total: u64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoleKind {
    Primary,
    Follower,
    Unknown,
}

/// This server's current role plus a best-effort hint of who the primary is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleSnapshot {
    pub kind: RoleKind,
    pub primary_hint: Option<String>,
}

impl RoleSnapshot {
    pub fn primary() -> Self {
        RoleSnapshot {
            kind: RoleKind::Primary,
            primary_hint: None,
        }
    }

    pub fn follower(primary_hint: impl Into<String>) -> Self {
        RoleSnapshot {
            kind: RoleKind::Follower,
            primary_hint: Some(primary_hint.into()),
        }
    }

    pub fn unknown() -> Self {
        RoleSnapshot {
            kind: RoleKind::Unknown,
            primary_hint: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProposeError {
    /// Capacity exhausted. The client should Discard or wait.
    #[error("log capacity exhausted")]
    Full,

    #[error("this server is not the primary")]
    NotPrimary { primary_hint: Option<String> },

    /// Transient backend failure; retryable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ReadAtError {
    #[error("no entry at the requested index")]
    NotFound,

    #[error("the requested index is below the log's first index")]
    Truncated,

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TruncatePrefixError {
    #[error("this server is not the primary")]
    NotPrimary { primary_hint: Option<String> },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// StorageAdapter is the narrow interface over the consensus/persistence
/// backend. The core consumes these operations and assumes nothing else
/// about how the backend replicates or persists.
#[async_trait::async_trait]
pub trait StorageAdapter: Send + Sync + 'static {
    /// Submits a batch of opaque proposals. Returns only after the batch is
    /// durably committed, with one assigned index per proposal,
    /// positionally. Indexes need not be consecutive, but any gap the
    /// backend introduces is the backend's responsibility to fill with skip
    /// entries before a reader can cross it.
    async fn propose(&self, batch: Vec<Bytes>) -> Result<Vec<u64>, ProposeError>;

    /// Skip-aware fast-forward path: synthesizes skip entries so that
    /// `last_index == new_first_index - 1` on return.
    async fn propose_skips(&self, new_first_index: u64) -> Result<(), ProposeError>;

    /// Durable read of a single committed entry.
    async fn read_at(&self, index: u64) -> Result<LogEntry, ReadAtError>;

    /// Advisory prefix reclaim. The backend may free space later, but byte
    /// accounting must eventually reflect the truncation.
    async fn truncate_prefix(&self, new_first_index: u64) -> Result<(), TruncatePrefixError>;

    /// Stream of commit notifications. Each subscriber gets every notice
    /// published after it subscribes.
    fn subscribe_commits(&self) -> CommitSubscription;

    async fn capacity_probe(&self) -> Capacity;

    /// Authoritative metadata snapshot, linearized against commits. Used at
    /// startup to restore the in-memory view and by fresh Info requests.
    async fn log_snapshot(&self) -> LogSnapshot;

    fn role(&self) -> RoleSnapshot;
}

/// Receiving half of a commit subscription.
pub struct CommitSubscription {
    receiver: mpsc::UnboundedReceiver<CommitNotice>,
}

impl CommitSubscription {
    pub fn new(receiver: mpsc::UnboundedReceiver<CommitNotice>) -> Self {
        CommitSubscription { receiver }
    }

    /// Returns None when the storage adapter has dropped the publishing side.
    pub async fn recv(&mut self) -> Option<CommitNotice> {
        self.receiver.recv().await
    }
}

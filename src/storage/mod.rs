mod api;
mod in_memory;
mod retry;

pub use api::Capacity;
pub use api::CommitNotice;
pub use api::CommitSubscription;
pub use api::LogEntry;
pub use api::LogSnapshot;
pub use api::ProposeError;
pub use api::ReadAtError;
pub use api::RoleKind;
pub use api::RoleSnapshot;
pub use api::StorageAdapter;
pub use api::TruncatePrefixError;
pub use in_memory::InMemoryStorage;

pub(crate) use retry::with_retries;

mod api;
mod logstate;
mod role;
mod server;
mod storage;

/// Wire types and generated client/server stubs. Field tags are frozen;
/// third-party clients depend on them.
pub mod grpc {
    include!("../generated/log.rs");
}

pub use api::try_create_log_server;
pub use api::LogOptions;
pub use api::LogServerConfig;
pub use api::LogServerCreationError;
pub use api::LogServerHandle;
pub use storage::Capacity;
pub use storage::CommitNotice;
pub use storage::CommitSubscription;
pub use storage::InMemoryStorage;
pub use storage::LogEntry;
pub use storage::LogSnapshot;
pub use storage::ProposeError;
pub use storage::ReadAtError;
pub use storage::RoleKind;
pub use storage::RoleSnapshot;
pub use storage::StorageAdapter;
pub use storage::TruncatePrefixError;

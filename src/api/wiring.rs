use crate::api::options::LogOptionsValidated;
use crate::api::LogOptions;
use crate::logstate::{LogMetadata, SharedLogState};
use crate::role::RoleController;
use crate::server;
use crate::server::RpcServer;
use crate::storage::{CommitSubscription, StorageAdapter};
use std::convert::TryFrom;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct LogServerConfig {
    /// Address to bind the gRPC listener on. Port 0 picks a free port;
    /// the effective address is available on the returned handle.
    pub listen_addr: SocketAddr,
    pub info_logger: slog::Logger,
    pub options: LogOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum LogServerCreationError {
    #[error("Illegal options for configuring server: {0}")]
    IllegalOptions(String),

    #[error("Failed to bind listener: {0}")]
    Bind(io::Error),
}

/// LogServerHandle keeps a created server alive. Dropping it signals the
/// RPC server to shut down and drain.
pub struct LogServerHandle {
    local_addr: SocketAddr,
    _shutdown_handle: server::RpcServerShutdownHandle,
}

impl LogServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

/// Assembles a log server on top of the given storage adapter: restores the
/// metadata view, starts the commit pump and the gRPC listener, and returns
/// the handle that owns the server's lifetime.
pub async fn try_create_log_server(
    config: LogServerConfig,
    storage: Arc<dyn StorageAdapter>,
) -> Result<LogServerHandle, LogServerCreationError> {
    let root_logger = config.info_logger;

    let options = LogOptionsValidated::try_from(config.options)
        .map_err(|e| LogServerCreationError::IllegalOptions(e.to_string()))?;

    // Subscribe before restoring so no commit falls between the snapshot
    // and the pump's first notice.
    let subscription = storage.subscribe_commits();
    let snapshot = storage.log_snapshot().await;
    let state = Arc::new(SharedLogState::new(LogMetadata::from(snapshot)));
    tokio::spawn(run_commit_pump(
        root_logger.clone(),
        subscription,
        Arc::clone(&state),
    ));

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(LogServerCreationError::Bind)?;
    let local_addr = listener.local_addr().map_err(LogServerCreationError::Bind)?;

    let (shutdown_handle, shutdown_signal) = server::shutdown_signal();
    let role = RoleController::new(Arc::clone(&storage));
    let rpc_server = RpcServer::new(root_logger, storage, state, role, options);
    tokio::spawn(rpc_server.run(listener, shutdown_signal));

    Ok(LogServerHandle {
        local_addr,
        _shutdown_handle: shutdown_handle,
    })
}

/// The commit pump is the only writer of `last_index`: it drains storage
/// commit notices into the shared log state, which wakes tailing readers
/// and InfoStream watchers.
async fn run_commit_pump(
    logger: slog::Logger,
    mut subscription: CommitSubscription,
    state: Arc<SharedLogState>,
) {
    while let Some(notice) = subscription.recv().await {
        state.advance_commit(&notice);
    }

    slog::debug!(logger, "Commit subscription closed; pump exiting.");
}

use seqlog::{try_create_log_server, InMemoryStorage, LogOptions, LogServerConfig, RoleSnapshot};
use slog::Drain;
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:7171";
const DEFAULT_BYTES_TOTAL: u64 = 64 * 1024 * 1024;

/// Single-node dev server: an in-memory storage adapter acting as primary,
/// for poking at the service with any gRPC client.
#[tokio::main]
async fn main() {
    let logger = create_root_logger_for_stdout();

    let listen_addr: SocketAddr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
        .parse()
        .unwrap_or_else(|e| panic!("Invalid listen address: {}", e));

    let storage = Arc::new(InMemoryStorage::new(
        logger.clone(),
        DEFAULT_BYTES_TOTAL,
        RoleSnapshot::primary(),
    ));

    let server_handle = try_create_log_server(
        LogServerConfig {
            listen_addr,
            info_logger: logger.clone(),
            options: LogOptions::default(),
        },
        storage,
    )
    .await
    .unwrap_or_else(|e| panic!("Failed to create log server: {}", e));

    slog::info!(logger, "Log server ready on {}", server_handle.local_addr());

    let _ = tokio::signal::ctrl_c().await;
    slog::info!(logger, "Shutting down.");
    drop(server_handle);
}

fn create_root_logger_for_stdout() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    slog::Logger::root(drain, slog::o!())
}

//! This mod holds the crate's client-facing configuration and wiring API.
mod options;
mod wiring;

pub use options::LogOptions;
pub use wiring::try_create_log_server;
pub use wiring::LogServerConfig;
pub use wiring::LogServerCreationError;
pub use wiring::LogServerHandle;

pub(crate) use options::LogOptionsValidated;

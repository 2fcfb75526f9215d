mod metadata;
mod shared;

pub(crate) use metadata::LogMetadata;
pub(crate) use shared::wait_for_committed;
pub(crate) use shared::CommitWait;
pub(crate) use shared::SharedLogState;

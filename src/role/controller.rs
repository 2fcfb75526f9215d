use crate::storage::{RoleKind, StorageAdapter};
use std::sync::Arc;

/// The request types the role policy distinguishes between.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OpKind {
    Append,
    Discard,
    Read,
    InfoFresh,
    InfoStale,
}

impl OpKind {
    /// Appends, discards, and fresh metadata snapshots go through the
    /// primary. Reads and stale snapshots are servable by any replica.
    fn requires_primary(&self) -> bool {
        matches!(self, OpKind::Append | OpKind::Discard | OpKind::InfoFresh)
    }
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum ServeDecision {
    Serve,
    /// An empty host tells the client to go through service discovery
    /// instead of hot-retrying this same server.
    Redirect { host: String },
}

/// RoleController decides, per request type, whether this server may serve a
/// request right now, and produces the redirect hint when it may not. The
/// primary's identity is learned from the storage adapter.
#[derive(Clone)]
pub(crate) struct RoleController {
    storage: Arc<dyn StorageAdapter>,
}

impl RoleController {
    pub(crate) fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        RoleController { storage }
    }

    pub(crate) fn can_serve(&self, op: OpKind) -> ServeDecision {
        if !op.requires_primary() {
            return ServeDecision::Serve;
        }

        let snapshot = self.storage.role();
        match snapshot.kind {
            RoleKind::Primary => ServeDecision::Serve,
            RoleKind::Follower | RoleKind::Unknown => ServeDecision::Redirect {
                host: snapshot.primary_hint.unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryStorage, RoleSnapshot};

    fn controller_with_role(role: RoleSnapshot) -> RoleController {
        let logger = slog::Logger::root(slog::Discard, slog::o!());
        RoleController::new(Arc::new(InMemoryStorage::new(logger, 1024, role)))
    }

    #[test]
    fn primary_serves_everything() {
        let controller = controller_with_role(RoleSnapshot::primary());

        for op in [
            OpKind::Append,
            OpKind::Discard,
            OpKind::Read,
            OpKind::InfoFresh,
            OpKind::InfoStale,
        ] {
            assert_eq!(controller.can_serve(op), ServeDecision::Serve, "{:?}", op);
        }
    }

    #[test]
    fn follower_redirects_primary_only_ops_with_hint() {
        let controller = controller_with_role(RoleSnapshot::follower("primary:1234"));

        for op in [OpKind::Append, OpKind::Discard, OpKind::InfoFresh] {
            assert_eq!(
                controller.can_serve(op),
                ServeDecision::Redirect {
                    host: "primary:1234".to_string()
                },
                "{:?}",
                op
            );
        }
    }

    #[test]
    fn follower_still_serves_reads_and_stale_info() {
        let controller = controller_with_role(RoleSnapshot::follower("primary:1234"));

        assert_eq!(controller.can_serve(OpKind::Read), ServeDecision::Serve);
        assert_eq!(controller.can_serve(OpKind::InfoStale), ServeDecision::Serve);
    }

    #[test]
    fn unknown_primary_redirects_to_empty_host() {
        let controller = controller_with_role(RoleSnapshot::unknown());

        assert_eq!(
            controller.can_serve(OpKind::Append),
            ServeDecision::Redirect { host: String::new() }
        );
    }
}

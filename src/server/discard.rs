use crate::api::LogOptionsValidated;
use crate::grpc::proto_discard_reply;
use crate::grpc::{ProtoDiscardOk, ProtoDiscardReply, ProtoDiscardReq, ProtoRedirect};
use crate::logstate::{LogMetadata, SharedLogState};
use crate::role::{OpKind, RoleController, ServeDecision};
use crate::storage::{with_retries, ProposeError, StorageAdapter, TruncatePrefixError};
use std::sync::Arc;
use tonic::Status;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum DiscardAction {
    /// Requested first index is at or below the current one.
    Noop,
    /// Requested first index is within (first, last + 1]: plain prefix
    /// truncation.
    Truncate,
    /// Requested first index is beyond the tail: the log must first be
    /// extended with skip filler so the range stays dense.
    FastForward,
}

pub(crate) fn classify(requested_first: u64, metadata: &LogMetadata) -> DiscardAction {
    if requested_first <= metadata.first_index {
        DiscardAction::Noop
    } else if requested_first > metadata.last_index + 1 {
        DiscardAction::FastForward
    } else {
        DiscardAction::Truncate
    }
}

pub(crate) async fn handle_discard(
    logger: &slog::Logger,
    storage: &Arc<dyn StorageAdapter>,
    state: &Arc<SharedLogState>,
    role: &RoleController,
    options: &LogOptionsValidated,
    request: ProtoDiscardReq,
) -> Result<ProtoDiscardReply, Status> {
    if let ServeDecision::Redirect { host } = role.can_serve(OpKind::Discard) {
        return Ok(redirect_reply(host));
    }

    let requested_first = request.first_index;
    let metadata = state.snapshot();

    match classify(requested_first, &metadata) {
        DiscardAction::Noop => {}
        DiscardAction::FastForward => {
            let skips = with_retries(
                logger,
                "ProposeSkips",
                options.storage_retry_attempts,
                options.storage_retry_delay,
                || {
                    let storage = Arc::clone(storage);
                    async move { storage.propose_skips(requested_first).await }
                },
            )
            .await;

            match skips {
                Ok(()) => {}
                Err(ProposeError::NotPrimary { primary_hint }) => {
                    return Ok(redirect_reply(primary_hint.unwrap_or_default()));
                }
                // The backend refused skip synthesis; the protocol has no
                // reply for this, so it surfaces as a transport error.
                Err(ProposeError::Full) => {
                    return Err(Status::resource_exhausted(
                        "No capacity for fast-forward filler entries",
                    ));
                }
                Err(e @ ProposeError::Unavailable(_)) => {
                    return Err(Status::unavailable(e.to_string()));
                }
            }

            if let Some(reply) = truncate_prefix(logger, storage, options, requested_first).await? {
                return Ok(reply);
            }
            state.apply_fast_forward(requested_first);
        }
        DiscardAction::Truncate => {
            if let Some(reply) = truncate_prefix(logger, storage, options, requested_first).await? {
                return Ok(reply);
            }
            state.apply_discard(requested_first);
        }
    }

    // Byte accounting must promptly reflect the reclaim.
    let capacity = storage.capacity_probe().await;
    state.set_capacity(capacity);

    Ok(ok_reply())
}

/// Runs the advisory prefix reclaim. Returns `Some(reply)` when the
/// operation must answer with a redirect instead of proceeding.
async fn truncate_prefix(
    logger: &slog::Logger,
    storage: &Arc<dyn StorageAdapter>,
    options: &LogOptionsValidated,
    requested_first: u64,
) -> Result<Option<ProtoDiscardReply>, Status> {
    let result = with_retries(
        logger,
        "TruncatePrefix",
        options.storage_retry_attempts,
        options.storage_retry_delay,
        || {
            let storage = Arc::clone(storage);
            async move { storage.truncate_prefix(requested_first).await }
        },
    )
    .await;

    match result {
        Ok(()) => Ok(None),
        Err(TruncatePrefixError::NotPrimary { primary_hint }) => {
            Ok(Some(redirect_reply(primary_hint.unwrap_or_default())))
        }
        Err(e @ TruncatePrefixError::Unavailable(_)) => Err(Status::unavailable(e.to_string())),
    }
}

fn ok_reply() -> ProtoDiscardReply {
    ProtoDiscardReply {
        reply: Some(proto_discard_reply::Reply::Ok(ProtoDiscardOk {})),
    }
}

fn redirect_reply(host: String) -> ProtoDiscardReply {
    ProtoDiscardReply {
        reply: Some(proto_discard_reply::Reply::Redirect(ProtoRedirect { host })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(first_index: u64, last_index: u64) -> LogMetadata {
        LogMetadata {
            first_index,
            last_index,
            bytes_used: 0,
            bytes_total: 1024,
        }
    }

    #[test]
    fn at_or_below_current_first_is_a_noop() {
        assert_eq!(classify(1, &metadata(1, 10)), DiscardAction::Noop);
        assert_eq!(classify(5, &metadata(5, 10)), DiscardAction::Noop);
        assert_eq!(classify(3, &metadata(5, 10)), DiscardAction::Noop);
    }

    #[test]
    fn within_log_range_truncates() {
        assert_eq!(classify(2, &metadata(1, 10)), DiscardAction::Truncate);
        assert_eq!(classify(10, &metadata(1, 10)), DiscardAction::Truncate);
        // One past the tail empties the log without filler.
        assert_eq!(classify(11, &metadata(1, 10)), DiscardAction::Truncate);
    }

    #[test]
    fn beyond_tail_fast_forwards() {
        assert_eq!(classify(12, &metadata(1, 10)), DiscardAction::FastForward);
        assert_eq!(classify(100, &metadata(1, 10)), DiscardAction::FastForward);
    }

    #[test]
    fn fast_forward_applies_from_empty_log() {
        assert_eq!(classify(100, &metadata(1, 0)), DiscardAction::FastForward);
        assert_eq!(classify(1, &metadata(1, 0)), DiscardAction::Noop);
        assert_eq!(classify(2, &metadata(1, 0)), DiscardAction::FastForward);
    }
}

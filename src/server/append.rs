use crate::api::LogOptionsValidated;
use crate::grpc::proto_append_reply;
use crate::grpc::{ProtoAppendOk, ProtoAppendReply, ProtoAppendReq, ProtoRedirect};
use crate::role::{OpKind, RoleController, ServeDecision};
use crate::storage::{with_retries, ProposeError, StorageAdapter};
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tonic::{Status, Streaming};

/// AppendWorker owns one Append stream: it validates sequence numbers,
/// pipelines proposal batches into the storage adapter, and echoes replies
/// back in request order.
///
/// Stream state machine: Opening (first request validated) -> Flowing
/// (request/reply echo) -> Terminating on full, redirect, or protocol
/// error. Exactly one terminal reply is emitted; nothing follows it.
pub(crate) struct AppendWorker {
    logger: slog::Logger,
    storage: Arc<dyn StorageAdapter>,
    role: RoleController,
    options: LogOptionsValidated,
}

/// Result of one proposal batch, resolved out-of-band by a spawned task.
enum ProposeOutcome {
    Indexes(Vec<u64>),
    Full,
    Redirect(String),
    Fault(Status),
}

enum InFlight {
    Reply {
        sequence: u64,
        outcome: oneshot::Receiver<ProposeOutcome>,
    },
    /// Protocol violation: abort the stream with a transport-level error
    /// after draining the replies admitted before it.
    Abort(Status),
}

impl AppendWorker {
    pub(crate) fn new(
        logger: slog::Logger,
        storage: Arc<dyn StorageAdapter>,
        role: RoleController,
        options: LogOptionsValidated,
    ) -> Self {
        AppendWorker {
            logger,
            storage,
            role,
            options,
        }
    }

    pub(crate) async fn run(
        self,
        mut requests: Streaming<ProtoAppendReq>,
        replies: mpsc::Sender<Result<ProtoAppendReply, Status>>,
    ) {
        if let ServeDecision::Redirect { host } = self.role.can_serve(OpKind::Append) {
            let _ = replies.send(Ok(redirect_reply(host))).await;
            return;
        }

        // The in-flight queue bound is the backpressure high-water mark:
        // once it fills, we stop reading requests and transport
        // flow-control pushes back on the client.
        let (inflight_tx, inflight_rx) = mpsc::channel(self.options.append_pipeline_depth);
        let flusher = tokio::spawn(flush_replies(inflight_rx, replies));

        let mut sequencer = SequenceTracker::new();
        loop {
            let request = match requests.message().await {
                Ok(Some(request)) => request,
                // Half-close: drain in-flight replies, then close.
                Ok(None) => break,
                Err(status) => {
                    slog::debug!(self.logger, "Append request stream failed: {:?}", status);
                    break;
                }
            };

            let item = match sequencer.observe(request.sequence) {
                Ok(()) => self.admit(request),
                Err(violation) => InFlight::Abort(Status::invalid_argument(violation)),
            };
            let aborting = matches!(item, InFlight::Abort(_));

            // Send fails once the flusher has emitted a terminal reply.
            if inflight_tx.send(item).await.is_err() || aborting {
                break;
            }
        }

        drop(inflight_tx);
        let _ = flusher.await;
    }

    fn admit(&self, request: ProtoAppendReq) -> InFlight {
        let (tx, rx) = oneshot::channel();

        if request.proposals.is_empty() {
            // An empty batch is a probe: acknowledge liveness without
            // touching storage.
            let _ = tx.send(ProposeOutcome::Indexes(Vec::new()));
        } else {
            let logger = self.logger.clone();
            let storage = Arc::clone(&self.storage);
            let attempts = self.options.storage_retry_attempts;
            let delay = self.options.storage_retry_delay;
            let batch: Vec<Bytes> = request.proposals.into_iter().map(Bytes::from).collect();

            tokio::spawn(async move {
                let result = with_retries(&logger, "Propose", attempts, delay, || {
                    let storage = Arc::clone(&storage);
                    let batch = batch.clone();
                    async move { storage.propose(batch).await }
                })
                .await;

                let _ = tx.send(ProposeOutcome::from(result));
            });
        }

        InFlight::Reply {
            sequence: request.sequence,
            outcome: rx,
        }
    }
}

/// Drains the in-flight queue in admission order, so replies are FIFO even
/// though proposal batches resolve concurrently.
async fn flush_replies(
    mut inflight: mpsc::Receiver<InFlight>,
    replies: mpsc::Sender<Result<ProtoAppendReply, Status>>,
) {
    while let Some(item) = inflight.recv().await {
        let (sequence, outcome) = match item {
            InFlight::Abort(status) => {
                let _ = replies.send(Err(status)).await;
                return;
            }
            InFlight::Reply { sequence, outcome } => {
                let outcome = outcome
                    .await
                    .unwrap_or_else(|_| ProposeOutcome::Fault(Status::internal("Proposal task exited")));
                (sequence, outcome)
            }
        };

        match outcome {
            ProposeOutcome::Indexes(indexes) => {
                if replies.send(Ok(ok_reply(sequence, indexes))).await.is_err() {
                    return; // client cancelled
                }
            }
            ProposeOutcome::Full => {
                let _ = replies.send(Ok(full_reply())).await;
                return;
            }
            ProposeOutcome::Redirect(host) => {
                let _ = replies.send(Ok(redirect_reply(host))).await;
                return;
            }
            ProposeOutcome::Fault(status) => {
                let _ = replies.send(Err(status)).await;
                return;
            }
        }
    }
}

/// Validates client-assigned sequence numbers: 1 on the first request, then
/// incrementing by exactly 1.
struct SequenceTracker {
    next_expected: u64,
}

impl SequenceTracker {
    fn new() -> Self {
        SequenceTracker { next_expected: 1 }
    }

    fn observe(&mut self, sequence: u64) -> Result<(), String> {
        if sequence != self.next_expected {
            return Err(format!(
                "Expected sequence {}, received {}",
                self.next_expected, sequence
            ));
        }
        self.next_expected += 1;
        Ok(())
    }
}

fn ok_reply(sequence: u64, indexes: Vec<u64>) -> ProtoAppendReply {
    ProtoAppendReply {
        reply: Some(proto_append_reply::Reply::Ok(ProtoAppendOk { sequence, indexes })),
    }
}

fn redirect_reply(host: String) -> ProtoAppendReply {
    ProtoAppendReply {
        reply: Some(proto_append_reply::Reply::Redirect(ProtoRedirect { host })),
    }
}

fn full_reply() -> ProtoAppendReply {
    ProtoAppendReply {
        reply: Some(proto_append_reply::Reply::Full(true)),
    }
}

// ------- Conversions --------

impl From<Result<Vec<u64>, ProposeError>> for ProposeOutcome {
    fn from(result: Result<Vec<u64>, ProposeError>) -> Self {
        match result {
            Ok(indexes) => ProposeOutcome::Indexes(indexes),
            Err(ProposeError::Full) => ProposeOutcome::Full,
            Err(ProposeError::NotPrimary { primary_hint }) => {
                ProposeOutcome::Redirect(primary_hint.unwrap_or_default())
            }
            Err(e @ ProposeError::Unavailable(_)) => {
                ProposeOutcome::Fault(Status::unavailable(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_must_start_at_one() {
        let mut tracker = SequenceTracker::new();

        assert!(tracker.observe(2).is_err());
    }

    #[test]
    fn sequence_must_increment_by_exactly_one() {
        let mut tracker = SequenceTracker::new();

        assert!(tracker.observe(1).is_ok());
        assert!(tracker.observe(2).is_ok());
        assert!(tracker.observe(4).is_err());
    }

    #[test]
    fn sequence_must_not_repeat() {
        let mut tracker = SequenceTracker::new();

        assert!(tracker.observe(1).is_ok());
        assert!(tracker.observe(1).is_err());
    }

    #[test]
    fn propose_errors_map_to_terminal_outcomes() {
        let full_result: Result<Vec<u64>, ProposeError> = Err(ProposeError::Full);
        assert!(matches!(ProposeOutcome::from(full_result), ProposeOutcome::Full));

        let redirect_result: Result<Vec<u64>, ProposeError> = Err(ProposeError::NotPrimary {
            primary_hint: Some("primary:1234".to_string()),
        });
        match ProposeOutcome::from(redirect_result) {
            ProposeOutcome::Redirect(host) => assert_eq!(host, "primary:1234"),
            other => panic!("expected redirect, got outcome variant {}", variant_name(&other)),
        }

        let unknown_result: Result<Vec<u64>, ProposeError> =
            Err(ProposeError::NotPrimary { primary_hint: None });
        match ProposeOutcome::from(unknown_result) {
            ProposeOutcome::Redirect(host) => assert_eq!(host, ""),
            other => panic!("expected redirect, got outcome variant {}", variant_name(&other)),
        }
    }

    fn variant_name(outcome: &ProposeOutcome) -> &'static str {
        match outcome {
            ProposeOutcome::Indexes(_) => "Indexes",
            ProposeOutcome::Full => "Full",
            ProposeOutcome::Redirect(_) => "Redirect",
            ProposeOutcome::Fault(_) => "Fault",
        }
    }
}

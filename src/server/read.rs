use crate::api::LogOptionsValidated;
use crate::grpc::proto_read_reply;
use crate::grpc::{ProtoEntry, ProtoReadOk, ProtoReadReply, ProtoRedirect};
use crate::logstate::{wait_for_committed, CommitWait, LogMetadata};
use crate::role::{OpKind, RoleController, ServeDecision};
use crate::storage::{with_retries, LogEntry, ReadAtError, StorageAdapter};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tonic::Status;

/// ReadWorker owns one Read stream: it catches up from the requested index
/// by reading committed entries, then tails, suspending on the commit watch
/// and flushing whatever has committed as soon as it wakes.
///
/// Index continuity invariant: across all replies on one stream, the
/// emitted indexes are exactly `[next_index, next_index + n)`, strictly
/// increasing, with no gaps or duplicates.
pub(crate) struct ReadWorker {
    logger: slog::Logger,
    storage: Arc<dyn StorageAdapter>,
    metadata: watch::Receiver<LogMetadata>,
    role: RoleController,
    options: LogOptionsValidated,
}

enum TerminalRead {
    Truncated,
    Fault(Status),
}

impl ReadWorker {
    pub(crate) fn new(
        logger: slog::Logger,
        storage: Arc<dyn StorageAdapter>,
        metadata: watch::Receiver<LogMetadata>,
        role: RoleController,
        options: LogOptionsValidated,
    ) -> Self {
        ReadWorker {
            logger,
            storage,
            metadata,
            role,
            options,
        }
    }

    pub(crate) async fn run(
        mut self,
        next_index: u64,
        replies: mpsc::Sender<Result<ProtoReadReply, Status>>,
    ) {
        // The truncation check precedes the role check: peers have likely
        // discarded the same prefix, so a redirect would not help.
        if next_index < self.metadata.borrow().first_index {
            let _ = replies.send(Ok(truncated_reply())).await;
            return;
        }
        if let ServeDecision::Redirect { host } = self.role.can_serve(OpKind::Read) {
            let _ = replies.send(Ok(redirect_reply(host))).await;
            return;
        }

        let mut cursor = next_index;
        loop {
            let metadata = *self.metadata.borrow();
            if metadata.first_index > cursor {
                // A discard truncated what we were reading.
                let _ = replies.send(Ok(truncated_reply())).await;
                return;
            }

            if cursor <= metadata.last_index {
                let upper = metadata
                    .last_index
                    .min(cursor.saturating_add(self.options.read_batch_limit - 1));
                let entries = match self.read_batch(cursor, upper).await {
                    Ok(entries) => entries,
                    Err(TerminalRead::Truncated) => {
                        let _ = replies.send(Ok(truncated_reply())).await;
                        return;
                    }
                    Err(TerminalRead::Fault(status)) => {
                        let _ = replies.send(Err(status)).await;
                        return;
                    }
                };

                cursor = upper + 1;
                if replies.send(Ok(ok_reply(entries))).await.is_err() {
                    return; // client cancelled
                }
            } else {
                // Tail: suspend until the log grows past our cursor, the
                // prefix we want is discarded, or the client goes away.
                tokio::select! {
                    outcome = wait_for_committed(&mut self.metadata, cursor) => match outcome {
                        CommitWait::Committed => {}
                        CommitWait::TruncatedPast => {
                            let _ = replies.send(Ok(truncated_reply())).await;
                            return;
                        }
                        CommitWait::Closed => return,
                    },
                    _ = replies.closed() => return,
                }
            }
        }
    }

    async fn read_batch(&self, from: u64, to: u64) -> Result<Vec<ProtoEntry>, TerminalRead> {
        let mut entries = Vec::with_capacity((to - from + 1) as usize);
        for index in from..=to {
            let result = with_retries(
                &self.logger,
                "ReadAt",
                self.options.storage_retry_attempts,
                self.options.storage_retry_delay,
                || {
                    let storage = Arc::clone(&self.storage);
                    async move { storage.read_at(index).await }
                },
            )
            .await;

            match result {
                Ok(entry) => entries.push(ProtoEntry::from(entry)),
                Err(ReadAtError::Truncated) => return Err(TerminalRead::Truncated),
                Err(ReadAtError::NotFound) => {
                    // The index was within [first, last] when the batch
                    // started; a missing entry violates density and is not
                    // a client-visible condition.
                    return Err(TerminalRead::Fault(Status::internal(format!(
                        "No entry at committed index {}",
                        index
                    ))));
                }
                Err(e @ ReadAtError::Unavailable(_)) => {
                    return Err(TerminalRead::Fault(Status::unavailable(e.to_string())))
                }
            }
        }

        Ok(entries)
    }
}

fn ok_reply(entries: Vec<ProtoEntry>) -> ProtoReadReply {
    ProtoReadReply {
        reply: Some(proto_read_reply::Reply::Ok(ProtoReadOk { entries })),
    }
}

fn redirect_reply(host: String) -> ProtoReadReply {
    ProtoReadReply {
        reply: Some(proto_read_reply::Reply::Redirect(ProtoRedirect { host })),
    }
}

fn truncated_reply() -> ProtoReadReply {
    ProtoReadReply {
        reply: Some(proto_read_reply::Reply::Truncated(true)),
    }
}

// ------- Conversions --------

impl From<LogEntry> for ProtoEntry {
    fn from(entry: LogEntry) -> Self {
        ProtoEntry {
            index: entry.index,
            skip: entry.skip,
            data: entry.data.to_vec(),
        }
    }
}

use crate::grpc::proto_info_reply;
use crate::grpc::{ProtoInfoOk, ProtoInfoReply, ProtoInfoReq, ProtoRedirect};
use crate::logstate::{LogMetadata, SharedLogState};
use crate::role::{OpKind, RoleController, ServeDecision};
use crate::storage::StorageAdapter;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tonic::Status;

pub(crate) async fn handle_info(
    storage: &Arc<dyn StorageAdapter>,
    state: &Arc<SharedLogState>,
    role: &RoleController,
    request: ProtoInfoReq,
) -> ProtoInfoReply {
    if let ServeDecision::Redirect { host } = role.can_serve(op_kind(request.allow_stale)) {
        return redirect_reply(host);
    }

    if request.allow_stale {
        // Last locally known values, no extra network cost.
        return ok_reply(state.snapshot());
    }

    // Fresh mode: answer from the storage layer's linearized snapshot, and
    // fold it into the local view while we have it.
    let snapshot = storage.log_snapshot().await;
    state.absorb_snapshot(&snapshot);
    ok_reply(LogMetadata::from(snapshot))
}

/// InfoStreamWorker owns one InfoStream: it pushes the current metadata
/// snapshot immediately, then one update per observed change. Rapid updates
/// coalesce (the watch only ever yields the latest value), which still
/// converges on the final state.
pub(crate) struct InfoStreamWorker {
    metadata: watch::Receiver<LogMetadata>,
    role: RoleController,
}

impl InfoStreamWorker {
    pub(crate) fn new(metadata: watch::Receiver<LogMetadata>, role: RoleController) -> Self {
        InfoStreamWorker { metadata, role }
    }

    pub(crate) async fn run(
        mut self,
        request: ProtoInfoReq,
        replies: mpsc::Sender<Result<ProtoInfoReply, Status>>,
    ) {
        if let ServeDecision::Redirect { host } = self.role.can_serve(op_kind(request.allow_stale)) {
            let _ = replies.send(Ok(redirect_reply(host))).await;
            return;
        }

        let mut last_sent = *self.metadata.borrow_and_update();
        if replies.send(Ok(ok_reply(last_sent))).await.is_err() {
            return;
        }

        loop {
            tokio::select! {
                changed = self.metadata.changed() => {
                    if changed.is_err() {
                        return; // log state dropped; server shutting down
                    }
                }
                _ = replies.closed() => return,
            }

            let current = *self.metadata.borrow_and_update();
            if current != last_sent {
                if replies.send(Ok(ok_reply(current))).await.is_err() {
                    return;
                }
                last_sent = current;
            }
        }
    }
}

fn op_kind(allow_stale: bool) -> OpKind {
    if allow_stale {
        OpKind::InfoStale
    } else {
        OpKind::InfoFresh
    }
}

fn ok_reply(metadata: LogMetadata) -> ProtoInfoReply {
    ProtoInfoReply {
        reply: Some(proto_info_reply::Reply::Ok(ProtoInfoOk {
            first_index: metadata.first_index,
            last_index: metadata.last_index,
            bytes_used: metadata.bytes_used,
            bytes_total: metadata.bytes_total,
        })),
    }
}

fn redirect_reply(host: String) -> ProtoInfoReply {
    ProtoInfoReply {
        reply: Some(proto_info_reply::Reply::Redirect(ProtoRedirect { host })),
    }
}

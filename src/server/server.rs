use crate::api::LogOptionsValidated;
use crate::grpc::grpc_log_server::{GrpcLog, GrpcLogServer};
use crate::grpc::{
    ProtoAppendReply, ProtoAppendReq, ProtoDiscardReply, ProtoDiscardReq, ProtoInfoReply,
    ProtoInfoReq, ProtoReadReply, ProtoReadReq,
};
use crate::logstate::SharedLogState;
use crate::role::RoleController;
use crate::server::append::AppendWorker;
use crate::server::info::InfoStreamWorker;
use crate::server::read::ReadWorker;
use crate::server::RpcServerShutdownSignal;
use crate::server::{discard, info};
use crate::storage::StorageAdapter;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_stream::wrappers::{ReceiverStream, TcpListenerStream};
use tonic::transport::Server;
use tonic::{Request, Response, Status, Streaming};

// Per-stream transport send buffer, in replies. Beyond this, stream workers
// suspend and flow-control reaches the client.
const REPLY_BUFFER: usize = 16;

/// RpcServer is the type that implements the log service's gRPC interface.
/// Each stream is served by an owned worker task; the unary RPCs run inline
/// under a deadline.
pub(crate) struct RpcServer {
    logger: slog::Logger,
    storage: Arc<dyn StorageAdapter>,
    state: Arc<SharedLogState>,
    role: RoleController,
    options: LogOptionsValidated,
}

impl RpcServer {
    pub(crate) fn new(
        logger: slog::Logger,
        storage: Arc<dyn StorageAdapter>,
        state: Arc<SharedLogState>,
        role: RoleController,
        options: LogOptionsValidated,
    ) -> Self {
        RpcServer {
            logger,
            storage,
            state,
            role,
            options,
        }
    }

    pub(crate) async fn run(self, listener: TcpListener, shutdown_signal: RpcServerShutdownSignal) {
        let logger = self.logger.clone();
        slog::info!(logger, "Listening on '{:?}'", listener.local_addr());

        let result = Server::builder()
            .add_service(GrpcLogServer::new(self))
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown_signal.wait())
            .await;

        slog::info!(logger, "Server run() has exited: {:?}", result);
    }
}

#[async_trait::async_trait]
impl GrpcLog for RpcServer {
    type AppendStream = ReceiverStream<Result<ProtoAppendReply, Status>>;

    async fn append(
        &self,
        rpc_request_wrapped: Request<Streaming<ProtoAppendReq>>,
    ) -> Result<Response<Self::AppendStream>, Status> {
        slog::debug!(self.logger, "ServerWire - Append stream opened");

        let (reply_tx, reply_rx) = mpsc::channel(REPLY_BUFFER);
        let worker = AppendWorker::new(
            self.logger.clone(),
            Arc::clone(&self.storage),
            self.role.clone(),
            self.options,
        );
        tokio::spawn(worker.run(rpc_request_wrapped.into_inner(), reply_tx));

        Ok(Response::new(ReceiverStream::new(reply_rx)))
    }

    async fn discard(
        &self,
        rpc_request_wrapped: Request<ProtoDiscardReq>,
    ) -> Result<Response<ProtoDiscardReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let handler = discard::handle_discard(
            &self.logger,
            &self.storage,
            &self.state,
            &self.role,
            &self.options,
            rpc_request,
        );
        let rpc_result = tokio::time::timeout(self.options.unary_deadline, handler)
            .await
            .map_err(|_| Status::deadline_exceeded("Discard deadline exceeded"))?;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    type ReadStream = ReceiverStream<Result<ProtoReadReply, Status>>;

    async fn read(
        &self,
        rpc_request_wrapped: Request<ProtoReadReq>,
    ) -> Result<Response<Self::ReadStream>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let (reply_tx, reply_rx) = mpsc::channel(REPLY_BUFFER);
        let worker = ReadWorker::new(
            self.logger.clone(),
            Arc::clone(&self.storage),
            self.state.subscribe(),
            self.role.clone(),
            self.options,
        );
        tokio::spawn(worker.run(rpc_request.next_index, reply_tx));

        Ok(Response::new(ReceiverStream::new(reply_rx)))
    }

    async fn info(
        &self,
        rpc_request_wrapped: Request<ProtoInfoReq>,
    ) -> Result<Response<ProtoInfoReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let handler = info::handle_info(&self.storage, &self.state, &self.role, rpc_request);
        let rpc_reply = tokio::time::timeout(self.options.unary_deadline, handler)
            .await
            .map_err(|_| Status::deadline_exceeded("Info deadline exceeded"))?;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_reply);

        Ok(Response::new(rpc_reply))
    }

    type InfoStreamStream = ReceiverStream<Result<ProtoInfoReply, Status>>;

    async fn info_stream(
        &self,
        rpc_request_wrapped: Request<ProtoInfoReq>,
    ) -> Result<Response<Self::InfoStreamStream>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let (reply_tx, reply_rx) = mpsc::channel(REPLY_BUFFER);
        let worker = InfoStreamWorker::new(self.state.subscribe(), self.role.clone());
        tokio::spawn(worker.run(rpc_request, reply_tx));

        Ok(Response::new(ReceiverStream::new(reply_rx)))
    }
}

use tokio::sync::oneshot;

/// Creates a linked handle/signal pair. Dropping (or consuming) the handle
/// resolves the signal, which the RPC server uses to stop accepting new
/// streams and drain.
pub(crate) fn shutdown_signal() -> (RpcServerShutdownHandle, RpcServerShutdownSignal) {
    let (tx, rx) = oneshot::channel();

    (RpcServerShutdownHandle { _tx: tx }, RpcServerShutdownSignal { rx })
}

pub(crate) struct RpcServerShutdownHandle {
    _tx: oneshot::Sender<()>,
}

pub(crate) struct RpcServerShutdownSignal {
    rx: oneshot::Receiver<()>,
}

impl RpcServerShutdownSignal {
    /// Resolves when the handle is dropped or explicitly fired. Whether the
    /// sender sent a value or just went away makes no difference.
    pub(crate) async fn wait(self) {
        let _ = self.rx.await;
    }
}

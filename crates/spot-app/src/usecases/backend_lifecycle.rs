//! Ordered, non-blocking connect/disconnect requests for the upload backend
//! 上传后端的有序非阻塞连接/断开请求

use std::sync::Arc;

use spot_core::ports::UploadBackendPort;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info_span, warn, Instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LifecycleCommand {
    Connect,
    Disconnect,
}

/// Queues lifecycle commands onto a single worker task so the backend sees
/// them in the order `start()`/`stop()` were called, while the callers never
/// wait.
pub struct BackendLifecycle {
    commands: mpsc::UnboundedSender<LifecycleCommand>,
}

impl BackendLifecycle {
    pub fn spawn(backend: Arc<dyn UploadBackendPort>, runtime: &Handle) -> Self {
        let (commands, mut rx) = mpsc::unbounded_channel();

        runtime.spawn(
            async move {
                while let Some(command) = rx.recv().await {
                    let result = match command {
                        LifecycleCommand::Connect => backend.connect().await,
                        LifecycleCommand::Disconnect => backend.disconnect().await,
                    };
                    match result {
                        Ok(()) => {
                            let state = backend.state().await;
                            debug!(?command, ?state, "lifecycle command applied");
                        }
                        Err(err) => warn!(?command, error = %err, "lifecycle command failed"),
                    }
                }
                debug!("backend lifecycle worker stopped");
            }
            .instrument(info_span!("usecase.backend_lifecycle")),
        );

        Self { commands }
    }

    pub fn request_connect(&self) {
        self.send(LifecycleCommand::Connect);
    }

    pub fn request_disconnect(&self) {
        self.send(LifecycleCommand::Disconnect);
    }

    fn send(&self, command: LifecycleCommand) {
        if self.commands.send(command).is_err() {
            warn!(?command, "backend lifecycle worker is gone; command dropped");
        }
    }
}

//! Registration of the trigger with a motion event source
//! 将触发器注册到运动事件源

use std::sync::Arc;

use spot_core::ports::MotionSourcePort;
use spot_core::trigger::MotionEvent;
use tokio::runtime::Handle;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info_span, warn, Instrument};

use super::TriggerController;

/// Live registration of a [`TriggerController`] on a motion source.
///
/// Every `Shake` starts `on_shake_signal` in its own task, so a second shake
/// during a running cycle reaches the busy check instead of queueing behind
/// it. Other motion events are ignored.
///
/// Call [`unregister`](Self::unregister) at teardown; dropping the value
/// leaves the listener running until the source closes.
pub struct ShakeSubscription {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl ShakeSubscription {
    pub fn register(
        source: &dyn MotionSourcePort,
        controller: Arc<TriggerController>,
        runtime: &Handle,
    ) -> Self {
        // Subscribe before spawning so no event sent after `register`
        // returns is missed.
        let mut events = source.subscribe();
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let cycles = runtime.clone();

        let task = runtime.spawn(
            async move {
                loop {
                    tokio::select! {
                        _ = token.cancelled() => {
                            debug!("shake subscription cancelled");
                            break;
                        }
                        event = events.recv() => match event {
                            Ok(MotionEvent::Shake) => {
                                let controller = Arc::clone(&controller);
                                cycles.spawn(async move {
                                    controller.on_shake_signal().await;
                                });
                            }
                            Ok(MotionEvent::Other) => {}
                            Err(RecvError::Lagged(skipped)) => {
                                warn!(skipped, "motion events dropped");
                            }
                            Err(RecvError::Closed) => {
                                debug!("motion source closed");
                                break;
                            }
                        }
                    }
                }
            }
            .instrument(info_span!("usecase.shake_subscription")),
        );

        Self { cancel, task }
    }

    /// Stop listening and wait for the listener task to finish.
    pub async fn unregister(self) {
        self.cancel.cancel();
        if let Err(err) = self.task.await {
            warn!(error = %err, "shake listener ended abnormally");
        }
    }
}

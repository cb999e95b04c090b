use spot_core::ports::MotionSourcePort;
use spot_core::trigger::MotionEvent;
use tokio::sync::broadcast;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 16;

/// Motion event hub fed by the host's event loop.
///
/// 由宿主事件循环投递的运动事件中心。
///
/// The host forwards its "motion ended" callbacks through [`dispatch`];
/// subscribers receive them through [`MotionSourcePort::subscribe`].
///
/// [`dispatch`]: BroadcastMotionSource::dispatch
#[derive(Clone)]
pub struct BroadcastMotionSource {
    sender: broadcast::Sender<MotionEvent>,
}

impl BroadcastMotionSource {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Deliver one event. Returns how many subscribers received it; events
    /// with no subscriber are dropped.
    pub fn dispatch(&self, event: MotionEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                trace!(?event, "motion event dropped: no subscribers");
                0
            }
        }
    }
}

impl Default for BroadcastMotionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSourcePort for BroadcastMotionSource {
    fn subscribe(&self) -> broadcast::Receiver<MotionEvent> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dispatch_without_subscribers_is_dropped() {
        let source = BroadcastMotionSource::new();
        assert_eq!(source.dispatch(MotionEvent::Shake), 0);
    }

    #[tokio::test]
    async fn test_subscriber_receives_events_in_order() {
        let source = BroadcastMotionSource::new();
        let mut rx = source.subscribe();

        assert_eq!(source.dispatch(MotionEvent::Other), 1);
        assert_eq!(source.dispatch(MotionEvent::Shake), 1);

        assert_eq!(rx.recv().await.unwrap(), MotionEvent::Other);
        assert_eq!(rx.recv().await.unwrap(), MotionEvent::Shake);
    }
}

use tokio::sync::broadcast;

use crate::trigger::MotionEvent;

/// Source of host motion events.
///
/// 宿主运动事件源。
///
/// Each call to `subscribe` yields an independent receiver; dropping the
/// receiver ends that subscription.
pub trait MotionSourcePort: Send + Sync {
    fn subscribe(&self) -> broadcast::Receiver<MotionEvent>;
}

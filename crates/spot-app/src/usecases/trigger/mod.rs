//! Shake-to-report trigger: the controller that runs a cycle and the
//! subscription that feeds it motion events.
//! 摇一摇触发：运行周期的控制器与向其投递运动事件的订阅。

mod controller;
mod shake_subscription;

pub use controller::{TriggerController, TriggerSettings};
pub use shake_subscription::ShakeSubscription;

use serde::{Deserialize, Serialize};

/// Motion event delivered by the host environment.
///
/// 宿主环境投递的运动事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionEvent {
    /// Device was shaken. The only event that starts a trigger cycle.
    Shake,
    /// Any other motion the host chose to forward.
    Other,
}

impl MotionEvent {
    pub fn is_shake(self) -> bool {
        matches!(self, MotionEvent::Shake)
    }
}

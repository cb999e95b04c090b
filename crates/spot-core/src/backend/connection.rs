use serde::{Deserialize, Serialize};

/// Upload backend connection lifecycle.
///
/// 上传后端连接生命周期。
///
/// `Disconnected → Connecting → Connected → Disconnected`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionState {
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

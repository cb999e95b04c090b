use serde::{Deserialize, Serialize};

/// Physical orientation reported by the host at capture time.
///
/// 截图时宿主报告的设备方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Unknown,
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
}

impl Orientation {
    /// Face-up and face-down say nothing about which edge of the screen is
    /// on top.
    pub fn is_flat(self) -> bool {
        matches!(self, Orientation::FaceUp | Orientation::FaceDown)
    }

    /// Orientation to render with: a flat reading keeps `last_upright`.
    pub fn or_last_upright(self, last_upright: Orientation) -> Orientation {
        if self.is_flat() {
            last_upright
        } else {
            self
        }
    }

    /// Clockwise quarter turns needed to bring a portrait-native layer
    /// render upright for this orientation. Flat orientations carry no
    /// rotation, so hosts either report the interface orientation or let the
    /// capture use case substitute the last upright one.
    pub fn clockwise_quarter_turns(self) -> u8 {
        match self {
            Orientation::LandscapeLeft => 1,
            Orientation::PortraitUpsideDown => 2,
            Orientation::LandscapeRight => 3,
            Orientation::Unknown
            | Orientation::Portrait
            | Orientation::FaceUp
            | Orientation::FaceDown => 0,
        }
    }
}

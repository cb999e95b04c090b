use bytes::Bytes;
use thiserror::Error;

use super::{DeviceAppInfo, ReportBlob};
use crate::backend::KeyScheme;
use crate::image::PNG_CONTENT_TYPE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpotDataError {
    #[error("screenshot data is empty")]
    EmptyScreenshot,

    #[error("combined image data is empty")]
    EmptyCombinedImage,
}

/// One bug report, produced once per trigger cycle.
///
/// 一次触发周期产出的单份报告。
///
/// Immutable after construction. Image fields hold PNG bytes exactly as
/// encoded; nothing downstream re-encodes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotData {
    app_name: String,
    device_app_info: DeviceAppInfo,
    combined_image_data: Bytes,
    screenshot_data: Bytes,
}

impl SpotData {
    pub fn new(
        app_name: impl Into<String>,
        device_app_info: DeviceAppInfo,
        combined_image_data: impl Into<Bytes>,
        screenshot_data: impl Into<Bytes>,
    ) -> Result<Self, SpotDataError> {
        let combined_image_data = combined_image_data.into();
        let screenshot_data = screenshot_data.into();
        if screenshot_data.is_empty() {
            return Err(SpotDataError::EmptyScreenshot);
        }
        if combined_image_data.is_empty() {
            return Err(SpotDataError::EmptyCombinedImage);
        }
        Ok(Self {
            app_name: app_name.into(),
            device_app_info,
            combined_image_data,
            screenshot_data,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn device_app_info(&self) -> &DeviceAppInfo {
        &self.device_app_info
    }

    pub fn combined_image_data(&self) -> &Bytes {
        &self.combined_image_data
    }

    pub fn screenshot_data(&self) -> &Bytes {
        &self.screenshot_data
    }

    /// Storage key for this report under the given scheme.
    pub fn storage_key(&self, scheme: KeyScheme) -> String {
        scheme.apply(self.device_app_info.as_str())
    }

    /// Build the uploadable blob: the composited image keyed by the
    /// diagnostics text.
    pub fn to_blob(&self, scheme: KeyScheme) -> ReportBlob {
        ReportBlob::new(
            self.storage_key(scheme),
            self.combined_image_data.clone(),
            PNG_CONTENT_TYPE,
        )
    }
}

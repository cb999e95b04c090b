use bytes::Bytes;

pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Serialized image bytes together with their MIME type.
///
/// 序列化后的图像字节及其 MIME 类型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Bytes,
    pub content_type: String,
}

impl EncodedImage {
    pub fn png(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: PNG_CONTENT_TYPE.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

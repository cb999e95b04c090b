use bytes::Bytes;

/// Backend-independent upload unit: a named blob plus its metadata.
///
/// 与后端无关的上传单元：带元数据的命名 blob。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBlob {
    pub key: String,
    pub bytes: Bytes,
    pub content_type: String,
    pub size: usize,
}

impl ReportBlob {
    pub fn new(key: impl Into<String>, bytes: Bytes, content_type: impl Into<String>) -> Self {
        let size = bytes.len();
        Self {
            key: key.into(),
            bytes,
            content_type: content_type.into(),
            size,
        }
    }
}

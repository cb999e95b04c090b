use std::path::PathBuf;

/// Where a resource bundle was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleOrigin {
    /// Packaged inside the embedding dependency.
    Embedded,
    /// Local/development layout.
    Local,
}

/// UI resources the review presenter is loaded from.
///
/// 评审界面加载所需的 UI 资源包。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    pub name: String,
    pub path: PathBuf,
    pub origin: BundleOrigin,
}

/// Resolves a named resource bundle, embedded location first.
pub trait ResourceBundlePort: Send + Sync {
    fn resolve(&self, name: &str) -> Option<ResourceBundle>;
}

use std::path::{Path, PathBuf};

use spot_core::config::ResourcesSection;
use spot_core::ports::{BundleOrigin, ResourceBundle, ResourceBundlePort};
use tracing::{debug, warn};

const BUNDLE_EXTENSION: &str = "bundle";

/// Filesystem lookup for the review UI resource bundle.
///
/// 文件系统中的评审界面资源包查找。
///
/// Looks for `{name}.bundle` in the embedded-dependency directory first and
/// falls back to the local/development directory.
pub struct FsResourceBundleLocator {
    embedded_dir: Option<PathBuf>,
    local_dir: Option<PathBuf>,
}

impl FsResourceBundleLocator {
    pub fn new(embedded_dir: Option<PathBuf>, local_dir: Option<PathBuf>) -> Self {
        Self {
            embedded_dir,
            local_dir,
        }
    }

    /// Directories from `[resources]`. Empty entries fall back to the
    /// executable's directory (embedded) and the working directory (local).
    pub fn from_section(section: &ResourcesSection) -> Self {
        let embedded_dir = non_empty(&section.embedded_dir).or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        });
        let local_dir = non_empty(&section.local_dir).or_else(|| std::env::current_dir().ok());
        Self::new(embedded_dir, local_dir)
    }

    fn candidate(dir: Option<&Path>, name: &str) -> Option<PathBuf> {
        let path = dir?.join(format!("{name}.{BUNDLE_EXTENSION}"));
        path.is_dir().then_some(path)
    }
}

fn non_empty(path: &Path) -> Option<PathBuf> {
    (!path.as_os_str().is_empty()).then(|| path.to_path_buf())
}

impl ResourceBundlePort for FsResourceBundleLocator {
    fn resolve(&self, name: &str) -> Option<ResourceBundle> {
        if let Some(path) = Self::candidate(self.embedded_dir.as_deref(), name) {
            debug!(path = %path.display(), "resolved embedded resource bundle");
            return Some(ResourceBundle {
                name: name.to_string(),
                path,
                origin: BundleOrigin::Embedded,
            });
        }

        if let Some(path) = Self::candidate(self.local_dir.as_deref(), name) {
            debug!(path = %path.display(), "resolved local resource bundle");
            return Some(ResourceBundle {
                name: name.to_string(),
                path,
                origin: BundleOrigin::Local,
            });
        }

        warn!(bundle = name, "resource bundle not found in embedded or local location");
        None
    }
}

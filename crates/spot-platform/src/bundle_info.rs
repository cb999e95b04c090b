use spot_core::config::AppSection;
use spot_core::ports::BundleInfoPort;
use spot_core::report::BundleInfo;

/// Bundle identity taken from the host's `[app]` configuration.
pub struct ConfiguredBundleInfo {
    info: BundleInfo,
}

impl ConfiguredBundleInfo {
    pub fn new(info: BundleInfo) -> Self {
        Self { info }
    }

    pub fn from_section(section: &AppSection) -> Self {
        Self::new(BundleInfo {
            name: section.bundle_name.clone(),
            version: section.version.clone(),
            build: section.build.clone(),
        })
    }
}

impl BundleInfoPort for ConfiguredBundleInfo {
    fn bundle_info(&self) -> BundleInfo {
        self.info.clone()
    }
}

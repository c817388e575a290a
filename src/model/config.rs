use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_API_VERSION: &str = "53.0";
pub const DEFAULT_MANIFEST_FILE: &str = "package.xml";
pub const DEFAULT_MANIFEST_DIR: &str = "manifest";
pub const DEFAULT_SFDX: &str = "sfdx";

/// Contents of `sfmanifest.toml`. Every key is optional; flags win over it.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub alias: Option<String>,
    pub api_version: Option<String>,
    pub manifest: Option<String>,
    pub manifest_dir: Option<PathBuf>,
    #[serde(default)]
    pub include_foldered_types: bool,
    #[serde(default)]
    pub include_managed_package_components: bool,
    pub sfdx: Option<String>,
}

/// Switches that steer how each metadata type is listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub include_foldered_types: bool,
    pub include_managed_package_components: bool,
}

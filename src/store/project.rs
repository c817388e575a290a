use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SfManifestError;
use crate::model::ProjectConfig;

pub const CONFIG_FILE: &str = "sfmanifest.toml";

/// The directory sfmanifest runs in, plus its optional `sfmanifest.toml`.
pub struct ProjectStore {
    root: PathBuf,
    config: ProjectConfig,
}

impl ProjectStore {
    pub fn open(root: &Path) -> Result<Self, SfManifestError> {
        let config = load_config(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Resolves a manifest location; relative directories are taken from the project root.
    pub fn manifest_path(&self, dir: &Path, file: &str) -> PathBuf {
        self.root.join(dir).join(file)
    }
}

fn load_config(root: &Path) -> Result<ProjectConfig, SfManifestError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(|source| SfManifestError::FileRead {
        path: path.clone(),
        source,
    })?;
    let config: ProjectConfig = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded project config");
    Ok(config)
}

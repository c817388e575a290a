pub mod resolver;
pub mod xml;

use std::fs;
use std::path::Path;

use crate::error::SfManifestError;
use crate::model::{ListingOptions, PackageManifest};
use crate::sfdx::MetadataSource;

/// Describes the org and resolves every metadata type into a manifest.
pub fn build(
    source: &dyn MetadataSource,
    api_version: &str,
    options: ListingOptions,
) -> Result<PackageManifest, SfManifestError> {
    let catalog = source.describe_metadata()?;
    tracing::info!(types = catalog.len(), "described metadata");

    let types = resolver::resolve_all(source, &catalog, options)?;

    Ok(PackageManifest {
        version: api_version.to_string(),
        types,
    })
}

/// Renders `manifest` and writes it to `path`, replacing any existing file.
pub fn write(manifest: &PackageManifest, path: &Path) -> Result<(), SfManifestError> {
    let content = xml::render(manifest)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SfManifestError::DirCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| SfManifestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

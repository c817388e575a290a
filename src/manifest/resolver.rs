use crate::error::SfManifestError;
use crate::model::{ListedComponent, ListingOptions, MetadataTypeDescriptor, PackageType};
use crate::sfdx::MetadataSource;

/// Types that are always enumerated by full name, even outside packaging mode.
pub const FULL_NAME_TYPES: &[&str] = &[
    "CustomObject",
    "CallCenter",
    "Report",
    "Dashboard",
    "Document",
    "EmailTemplate",
    "MLPredictionDefinition",
    "FieldRestrictionRule",
    "AppointmentAssignmentPolicy",
];

/// How the members of one metadata type are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStrategy {
    /// Emit `*` without asking the org.
    Wildcard,
    /// List the type's folders, then the components inside each local folder.
    Folder,
    /// List the type's components directly.
    Direct,
}

pub fn classify(descriptor: &MetadataTypeDescriptor, options: ListingOptions) -> ListingStrategy {
    let enumerated = FULL_NAME_TYPES.contains(&descriptor.xml_name.as_str())
        || options.include_managed_package_components;

    if !enumerated {
        ListingStrategy::Wildcard
    } else if descriptor.in_folder && options.include_foldered_types {
        ListingStrategy::Folder
    } else {
        ListingStrategy::Direct
    }
}

/// Resolves every type in catalog order, dropping types with nothing to list.
pub fn resolve_all(
    source: &dyn MetadataSource,
    catalog: &[MetadataTypeDescriptor],
    options: ListingOptions,
) -> Result<Vec<PackageType>, SfManifestError> {
    let mut types = Vec::new();
    for descriptor in catalog {
        if let Some(entry) = resolve_type(source, descriptor, options)? {
            types.push(entry);
        }
    }
    Ok(types)
}

pub fn resolve_type(
    source: &dyn MetadataSource,
    descriptor: &MetadataTypeDescriptor,
    options: ListingOptions,
) -> Result<Option<PackageType>, SfManifestError> {
    let strategy = classify(descriptor, options);
    tracing::debug!(metadata_type = %descriptor.xml_name, ?strategy, "resolving");

    match strategy {
        ListingStrategy::Wildcard => Ok(Some(PackageType::wildcard(&descriptor.xml_name))),
        ListingStrategy::Folder => {
            let names = list_foldered(source, descriptor, options)?;
            Ok(PackageType::listed(&descriptor.xml_name, names))
        }
        ListingStrategy::Direct => {
            let names = list_members(source, &descriptor.xml_name, None, options)?;
            Ok(PackageType::listed(&descriptor.xml_name, names))
        }
    }
}

/// Folders installed by a managed package are skipped regardless of options.
fn list_foldered(
    source: &dyn MetadataSource,
    descriptor: &MetadataTypeDescriptor,
    options: ListingOptions,
) -> Result<Vec<String>, SfManifestError> {
    let folders = source.list_metadata(&descriptor.folder_type(), None)?;

    let mut names = Vec::new();
    for folder in folders.iter().filter(|f| f.is_unnamespaced()) {
        names.extend(list_members(
            source,
            &descriptor.xml_name,
            Some(folder.full_name.as_str()),
            options,
        )?);
    }
    Ok(names)
}

fn list_members(
    source: &dyn MetadataSource,
    metadata_type: &str,
    folder: Option<&str>,
    options: ListingOptions,
) -> Result<Vec<String>, SfManifestError> {
    let components = source.list_metadata(metadata_type, folder)?;
    Ok(select_members(components, options))
}

fn select_members(components: Vec<ListedComponent>, options: ListingOptions) -> Vec<String> {
    components
        .into_iter()
        .filter(|c| options.include_managed_package_components || c.is_unnamespaced())
        .map(|c| c.full_name)
        .collect()
}

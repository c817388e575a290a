pub mod config;
pub mod metadata;
pub mod package;

pub use config::{ListingOptions, ProjectConfig};
pub use metadata::{ListedComponent, MetadataTypeDescriptor};
pub use package::{Members, PackageManifest, PackageType};

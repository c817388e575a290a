/// Marker written in place of member names to select every component of a type.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Members {
    Wildcard,
    Names(Vec<String>),
}

/// One `<types>` row of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageType {
    pub name: String,
    pub members: Members,
}

impl PackageType {
    pub fn wildcard(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Members::Wildcard,
        }
    }

    /// Builds an explicit entry, or `None` when there is nothing to list.
    pub fn listed(name: impl Into<String>, names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            members: Members::Names(names),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    pub version: String,
    pub types: Vec<PackageType>,
}

use serde::Deserialize;

/// One metadata type known to the org, as reported by `describemetadata`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetadataTypeDescriptor {
    pub xml_name: String,
    #[serde(default)]
    pub in_folder: bool,
}

impl MetadataTypeDescriptor {
    #[cfg(test)]
    pub fn new(xml_name: impl Into<String>, in_folder: bool) -> Self {
        Self {
            xml_name: xml_name.into(),
            in_folder,
        }
    }

    /// The type whose components are the folders of this type, e.g. `ReportFolder`.
    pub fn folder_type(&self) -> String {
        format!("{}Folder", self.xml_name)
    }
}

/// One existing component returned by `listmetadata`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListedComponent {
    pub full_name: String,
    #[serde(default)]
    pub namespace_prefix: Option<String>,
}

impl ListedComponent {
    #[cfg(test)]
    pub fn new(full_name: impl Into<String>, namespace_prefix: Option<&str>) -> Self {
        Self {
            full_name: full_name.into(),
            namespace_prefix: namespace_prefix.map(str::to_string),
        }
    }

    /// True when the component was authored in the org rather than installed
    /// from a managed package. Absent and empty prefixes both count.
    pub fn is_unnamespaced(&self) -> bool {
        match self.namespace_prefix.as_deref() {
            None => true,
            Some(prefix) => prefix.is_empty(),
        }
    }
}

/// The `--json` envelope every sfdx command prints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub result: Option<T>,
}

/// The `--json` envelope of a failed sfdx command.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeResult {
    pub metadata_objects: Vec<MetadataTypeDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SfManifestError {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("'{program}' is not installed or not in PATH")]
    SfdxNotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed: {message}")]
    SfdxCommand { command: String, message: String },

    #[error("`{command}` returned malformed JSON")]
    MalformedResponse {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{command}` returned no result")]
    MissingResult { command: String },

    #[error("failed to render manifest XML: {0}")]
    XmlWrite(String),

    #[error("alias is not set; pass --alias or configure a default username")]
    AliasNotResolved,
}

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::de::DeserializeOwned;

use crate::error::SfManifestError;
use crate::model::metadata::{ConfigEntry, DescribeResult, Envelope, ErrorEnvelope};
use crate::model::{ListedComponent, MetadataTypeDescriptor};

const DEFAULT_USERNAME_KEY: &str = "defaultusername";

/// Where metadata descriptions and component listings come from.
pub trait MetadataSource {
    /// The catalog of metadata types, in the order the org reports them.
    fn describe_metadata(&self) -> Result<Vec<MetadataTypeDescriptor>, SfManifestError>;

    /// Existing components of `metadata_type`, optionally scoped to one folder.
    fn list_metadata(
        &self,
        metadata_type: &str,
        folder: Option<&str>,
    ) -> Result<Vec<ListedComponent>, SfManifestError>;
}

/// Runs the `sfdx` CLI against one org.
pub struct SfdxCli {
    program: String,
    alias: String,
    api_version: String,
    working_dir: PathBuf,
}

impl SfdxCli {
    pub fn new(
        program: impl Into<String>,
        alias: impl Into<String>,
        api_version: impl Into<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            alias: alias.into(),
            api_version: api_version.into(),
            working_dir: working_dir.into(),
        }
    }

    fn org_args(&self) -> [&str; 5] {
        [
            "--targetusername",
            &self.alias,
            "--json",
            "--apiversion",
            &self.api_version,
        ]
    }
}

impl MetadataSource for SfdxCli {
    fn describe_metadata(&self) -> Result<Vec<MetadataTypeDescriptor>, SfManifestError> {
        let mut args = vec!["force:mdapi:describemetadata"];
        args.extend(self.org_args());

        let result: DescribeResult = run_json(&self.program, &args, &self.working_dir)?;
        Ok(result.metadata_objects)
    }

    fn list_metadata(
        &self,
        metadata_type: &str,
        folder: Option<&str>,
    ) -> Result<Vec<ListedComponent>, SfManifestError> {
        let mut args = vec!["force:mdapi:listmetadata", "--metadatatype", metadata_type];
        args.extend(self.org_args());
        if let Some(f) = folder {
            args.extend(["--folder", f]);
        }

        run_json(&self.program, &args, &self.working_dir)
    }
}

/// Looks up the `defaultusername` configured for `working_dir`, if any.
pub fn default_username(
    program: &str,
    working_dir: &Path,
) -> Result<Option<String>, SfManifestError> {
    let entries: Vec<ConfigEntry> = run_json(program, &["config:list", "--json"], working_dir)?;

    Ok(select_default_username(entries))
}

/// The last `defaultusername` entry wins, even when its value is blank.
fn select_default_username(entries: Vec<ConfigEntry>) -> Option<String> {
    entries
        .into_iter()
        .filter(|e| e.key == DEFAULT_USERNAME_KEY)
        .last()
        .and_then(|e| e.value)
        .filter(|v| !v.is_empty())
}

fn run_json<T: DeserializeOwned>(
    program: &str,
    args: &[&str],
    working_dir: &Path,
) -> Result<T, SfManifestError> {
    let command = format!("{program} {}", args.join(" "));
    tracing::debug!(%command, "running");

    let output = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .output()
        .map_err(|source| SfManifestError::SfdxNotFound {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(SfManifestError::SfdxCommand {
            message: failure_message(&output.stdout, &output.stderr),
            command,
        });
    }

    let envelope: Envelope<T> = serde_json::from_slice(&output.stdout).map_err(|source| {
        SfManifestError::MalformedResponse {
            command: command.clone(),
            source,
        }
    })?;

    envelope
        .result
        .ok_or(SfManifestError::MissingResult { command })
}

/// sfdx reports errors as JSON on stdout when `--json` is given; fall back to stderr.
fn failure_message(stdout: &[u8], stderr: &[u8]) -> String {
    if let Ok(ErrorEnvelope {
        message: Some(message),
    }) = serde_json::from_slice(stdout)
    {
        return message;
    }
    let stderr = String::from_utf8_lossy(stderr).trim().to_string();
    if stderr.is_empty() {
        "exited with a non-zero status".to_string()
    } else {
        stderr
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::CommandFactory;

use super::Cli;
use crate::error::SfManifestError;
use crate::manifest;
use crate::model::ListingOptions;
use crate::model::config::{
    DEFAULT_API_VERSION, DEFAULT_MANIFEST_DIR, DEFAULT_MANIFEST_FILE, DEFAULT_SFDX,
};
use crate::sfdx::{self, SfdxCli};
use crate::store::ProjectStore;
use crate::store::project::CONFIG_FILE;

/// Options after merging flags over `sfmanifest.toml` over built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub alias: Option<String>,
    pub api_version: String,
    pub manifest_file: PathBuf,
    pub options: ListingOptions,
    pub sfdx_program: String,
    pub working_dir: PathBuf,
}

impl Settings {
    pub fn resolve(cli: &Cli, store: &ProjectStore) -> Self {
        let config = store.config();

        let manifest_dir = cli
            .manifest_dir
            .clone()
            .or_else(|| config.manifest_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_DIR));
        let manifest_name = cli
            .manifest
            .as_deref()
            .or(config.manifest.as_deref())
            .unwrap_or(DEFAULT_MANIFEST_FILE);

        Self {
            alias: cli.alias.clone().or_else(|| config.alias.clone()),
            api_version: cli
                .api_version
                .clone()
                .or_else(|| config.api_version.clone())
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            manifest_file: store.manifest_path(&manifest_dir, manifest_name),
            options: ListingOptions {
                include_foldered_types: cli.include_foldered_types
                    || config.include_foldered_types,
                include_managed_package_components: cli.include_managed_package_components
                    || config.include_managed_package_components,
            },
            sfdx_program: cli
                .sfdx
                .clone()
                .or_else(|| config.sfdx.clone())
                .unwrap_or_else(|| DEFAULT_SFDX.to_string()),
            working_dir: store.root().to_path_buf(),
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let store =
        ProjectStore::open(&cwd).with_context(|| format!("failed to load {CONFIG_FILE}"))?;

    let mut settings = Settings::resolve(&cli, &store);

    if cli.interactive {
        super::prompt::fill_missing(&mut settings)?;
    }

    let alias = resolve_alias(&settings)?;
    tracing::info!(
        %alias,
        api_version = %settings.api_version,
        include_foldered_types = settings.options.include_foldered_types,
        include_managed_package_components = settings.options.include_managed_package_components,
        "generating manifest"
    );

    let source = SfdxCli::new(
        &settings.sfdx_program,
        &alias,
        &settings.api_version,
        &settings.working_dir,
    );
    let package = manifest::build(&source, &settings.api_version, settings.options)
        .context("failed to collect metadata")?;
    manifest::write(&package, &settings.manifest_file).context("failed to write manifest")?;

    println!(
        "Wrote {} ({} types)",
        settings.manifest_file.display(),
        package.types.len()
    );
    Ok(())
}

fn resolve_alias(settings: &Settings) -> Result<String> {
    if let Some(alias) = &settings.alias {
        return Ok(alias.clone());
    }

    let discovered = sfdx::default_username(&settings.sfdx_program, &settings.working_dir)
        .context("failed to look up the default username")?;
    match discovered {
        Some(alias) => {
            tracing::debug!(%alias, "using default username");
            Ok(alias)
        }
        None => {
            eprintln!("{}\n", Cli::command().render_help());
            Err(SfManifestError::AliasNotResolved.into())
        }
    }
}

pub mod generate;
pub mod prompt;

use std::path::PathBuf;

use clap::Parser;

const EXAMPLES: &str = "\
EXAMPLES:
  $ sfmanifest
  $ sfmanifest -i
  $ sfmanifest -a MyAliasName
  $ sfmanifest -a MyAliasName -f -p
  $ sfmanifest -a MyAliasName -m package.xml
  $ sfmanifest -a MyAliasName -v 53.0";

#[derive(Debug, Parser)]
#[command(
    name = "sfmanifest",
    about = "Generate a package.xml manifest listing the metadata in a Salesforce org",
    version,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Prompt for options that were not given on the command line
    #[arg(short, long)]
    pub interactive: bool,

    /// Org alias or username (default: the sfdx defaultusername)
    #[arg(short, long)]
    pub alias: Option<String>,

    /// Manifest file name [default: package.xml]
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Directory the manifest is written to, relative to the current directory [default: manifest]
    #[arg(long)]
    pub manifest_dir: Option<PathBuf>,

    /// Metadata API version to use [default: 53.0]
    #[arg(short = 'v', long = "apiversion")]
    pub api_version: Option<String>,

    /// List Report, Dashboard, Document and EmailTemplate members folder by folder (may take a long time)
    #[arg(short = 'f', long = "infolder")]
    pub include_foldered_types: bool,

    /// Include managed package components and enumerate every type (may take a long time)
    #[arg(short = 'p', long = "inpackage")]
    pub include_managed_package_components: bool,

    /// sfdx executable to run [default: sfdx]
    #[arg(long, env = "SFMANIFEST_SFDX")]
    pub sfdx: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

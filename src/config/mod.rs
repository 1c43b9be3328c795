use crate::core::extractor::ExtractOptions;
use crate::domain::model::DependencyScope;
use crate::utils::error::Result;
use crate::utils::validation::{validate_module_path, validate_non_empty_string, validate_path, Validate};
use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "gopkgcp")]
#[command(about = "Extract a Go package and its in-module dependencies into a standalone module")]
#[command(after_help = "Example:\n  gopkgcp --pkg ./responses -o ./extracted")]
pub struct CliConfig {
    /// Package path to extract (e.g., ./responses)
    #[arg(long)]
    pub pkg: String,

    /// Output directory
    #[arg(short = 'o', long = "output")]
    pub output: String,

    /// Override module name in extracted files (e.g., github.com/myorg/myproject)
    #[arg(long = "mod")]
    pub module: Option<String>,

    /// Only extract packages from the same module (exclude external deps)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub module_only: bool,

    /// Do not run `go mod tidy` in the output directory
    #[arg(long)]
    pub skip_tidy: bool,

    /// Show what would be extracted without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// The replacement module, with an empty `--mod ""` meaning none was given.
    pub fn new_module(&self) -> Option<&str> {
        self.module.as_deref().filter(|module| !module.is_empty())
    }

    pub fn to_options(&self) -> ExtractOptions {
        ExtractOptions {
            package: self.pkg.trim().to_string(),
            output_dir: PathBuf::from(&self.output),
            new_module: self.new_module().map(str::to_string),
            scope: DependencyScope::from_module_only(self.module_only),
            run_tidy: !self.skip_tidy,
            dry_run: self.dry_run,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pkg", &self.pkg)?;
        validate_path("output", &self.output)?;
        validate_non_empty_string("output", &self.output)?;
        if let Some(module) = self.new_module() {
            validate_module_path("mod", module)?;
        }
        Ok(())
    }
}

pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{GoModTidy, GoModuleResolver, GodaLister};
pub use core::extractor::{ExtractOptions, Extractor};
pub use domain::model::{DependencyScope, ExtractionReport, ModuleInfo, TidyOutcome};
pub use utils::error::{ExtractError, Result};

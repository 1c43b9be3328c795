pub mod classifier;
pub mod copier;
pub mod extractor;
pub mod rewriter;
pub mod selector;

pub use crate::domain::model::{Dependency, DependencyScope, ExtractionReport, ModuleInfo};
pub use crate::domain::ports::{DependencyLister, ModuleResolver, ModuleTidier};
pub use crate::utils::error::Result;

use crate::domain::model::ModuleInfo;
use crate::utils::error::Result;
use std::path::Path;

/// Answers "which module am I in, and where is its root on disk".
pub trait ModuleResolver {
    fn resolve(&self) -> Result<ModuleInfo>;
}

/// Maps a scope expression such as `./responses:mod` to the ordered list of
/// package identifiers it covers.
pub trait DependencyLister {
    fn list(&self, expression: &str) -> Result<Vec<String>>;
}

/// Normalises the freshly extracted module (`go mod tidy`).
pub trait ModuleTidier {
    fn tidy(&self, module_dir: &Path) -> Result<()>;
}

impl<T: ModuleResolver + ?Sized> ModuleResolver for &T {
    fn resolve(&self) -> Result<ModuleInfo> {
        (**self).resolve()
    }
}

impl<T: DependencyLister + ?Sized> DependencyLister for &T {
    fn list(&self, expression: &str) -> Result<Vec<String>> {
        (**self).list(expression)
    }
}

impl<T: ModuleTidier + ?Sized> ModuleTidier for &T {
    fn tidy(&self, module_dir: &Path) -> Result<()> {
        (**self).tidy(module_dir)
    }
}

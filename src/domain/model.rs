use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// The module enclosing the working directory, as reported by `go list -m -json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleInfo {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyScope {
    /// Every transitive dependency, including the standard library and other modules.
    All,
    /// Only dependencies that live in the same module as the target package.
    #[default]
    ModuleOnly,
}

impl DependencyScope {
    pub fn from_module_only(module_only: bool) -> Self {
        if module_only {
            DependencyScope::ModuleOnly
        } else {
            DependencyScope::All
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            DependencyScope::All => ":all",
            DependencyScope::ModuleOnly => ":mod",
        }
    }

    /// `./responses` becomes `./responses:mod`.
    pub fn expression(self, package: &str) -> String {
        format!("{}{}", package, self.selector())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Relative directory under the module root; empty for the root package.
    InModule { rel_path: String },
    External,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub id: String,
    pub location: Location,
}

impl Dependency {
    pub fn rel_path(&self) -> Option<&str> {
        match &self.location {
            Location::InModule { rel_path } => Some(rel_path),
            Location::External => None,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.location, Location::External)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFailure {
    pub rel_path: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TidyOutcome {
    Completed,
    Failed(String),
    #[default]
    Skipped,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    pub module: String,
    pub output_dir: PathBuf,
    pub packages_found: usize,
    pub copied: Vec<String>,
    pub files_copied: usize,
    pub skipped_external: Vec<String>,
    pub failures: Vec<PackageFailure>,
    pub aux_files_copied: Vec<String>,
    pub files_rewritten: Option<usize>,
    pub tidy: TidyOutcome,
    pub dry_run: bool,
}

impl ExtractionReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl fmt::Display for ExtractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            return write!(
                f,
                "Would extract {} packages to {} ({} external skipped)",
                self.copied.len(),
                self.output_dir.display(),
                self.skipped_external.len()
            );
        }
        write!(
            f,
            "Extracted {} packages ({} files) to {}",
            self.copied.len(),
            self.files_copied,
            self.output_dir.display()
        )?;
        if self.has_failures() {
            write!(f, ", {} failed", self.failures.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_expression() {
        assert_eq!(DependencyScope::ModuleOnly.expression("./responses"), "./responses:mod");
        assert_eq!(DependencyScope::All.expression("./responses"), "./responses:all");
        assert_eq!(DependencyScope::from_module_only(true), DependencyScope::ModuleOnly);
        assert_eq!(DependencyScope::from_module_only(false), DependencyScope::All);
    }

    #[test]
    fn test_report_summary_mentions_failures() {
        let report = ExtractionReport {
            output_dir: PathBuf::from("out"),
            copied: vec!["responses".to_string(), "internal".to_string()],
            files_copied: 7,
            failures: vec![PackageFailure {
                rel_path: "option".to_string(),
                message: "missing".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(report.to_string(), "Extracted 2 packages (7 files) to out, 1 failed");
    }
}

use crate::core::classifier::{GO_MOD, GO_SUM};
use crate::core::copier::{copy_file, copy_tree};
use crate::core::rewriter::rewrite_module_references;
use crate::core::selector::select_dependencies;
use crate::domain::model::{
    Dependency, DependencyScope, ExtractionReport, ModuleInfo, PackageFailure, TidyOutcome,
};
use crate::domain::ports::{DependencyLister, ModuleResolver, ModuleTidier};
use crate::utils::error::{ExtractError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What to extract and where, independent of how it was configured.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub package: String,
    pub output_dir: PathBuf,
    pub new_module: Option<String>,
    pub scope: DependencyScope,
    pub run_tidy: bool,
    pub dry_run: bool,
}

impl ExtractOptions {
    pub fn new(package: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            output_dir: output_dir.into(),
            new_module: None,
            scope: DependencyScope::ModuleOnly,
            run_tidy: true,
            dry_run: false,
        }
    }
}

pub struct Extractor<R: ModuleResolver, L: DependencyLister, T: ModuleTidier> {
    resolver: R,
    lister: L,
    tidier: T,
    options: ExtractOptions,
}

impl<R: ModuleResolver, L: DependencyLister, T: ModuleTidier> Extractor<R, L, T> {
    pub fn new(resolver: R, lister: L, tidier: T, options: ExtractOptions) -> Self {
        Self {
            resolver,
            lister,
            tidier,
            options,
        }
    }

    pub fn run(&self) -> Result<ExtractionReport> {
        let module = self
            .resolver
            .resolve()
            .map_err(|e| match e {
                ExtractError::ConfigError { .. } => e,
                other => ExtractError::ConfigError {
                    message: other.to_string(),
                },
            })?;
        tracing::debug!("Module: {}", module.path);
        tracing::debug!("Module dir: {}", module.dir.display());

        let expression = self.options.scope.expression(&self.options.package);
        tracing::debug!("Listing dependencies: {}", expression);
        let ids = self.lister.list(&expression)?;
        if ids.is_empty() {
            return Err(ExtractError::EmptyResultError {
                package: self.options.package.clone(),
            });
        }

        tracing::debug!("Found {} packages to extract:", ids.len());
        for id in &ids {
            tracing::debug!("  - {}", id);
        }

        let dependencies = select_dependencies(&ids, &module.path);
        let mut report = ExtractionReport {
            module: module.path.clone(),
            output_dir: self.options.output_dir.clone(),
            packages_found: ids.len(),
            dry_run: self.options.dry_run,
            ..Default::default()
        };

        if self.options.dry_run {
            self.plan(&dependencies, &mut report);
            return Ok(report);
        }

        fs::create_dir_all(&self.options.output_dir)
            .map_err(|e| ExtractError::at_path(&self.options.output_dir, e))?;

        self.copy_packages(&module, &dependencies, &mut report);
        self.copy_module_files(&module, &mut report);

        if let Some(new_module) = &self.options.new_module {
            tracing::debug!("Replacing module {} with {}", module.path, new_module);
            let rewritten = rewrite_module_references(&self.options.output_dir, &module.path, new_module)
                .map_err(|e| ExtractError::RewriteError {
                    message: e.to_string(),
                })?;
            tracing::debug!("Rewrote {} files", rewritten);
            report.files_rewritten = Some(rewritten);
        }

        if self.options.run_tidy {
            report.tidy = self.tidy();
        }

        Ok(report)
    }

    fn plan(&self, dependencies: &[Dependency], report: &mut ExtractionReport) {
        for dependency in dependencies {
            match dependency.rel_path() {
                Some(rel_path) => {
                    tracing::info!(
                        "Would copy {} -> {}",
                        display_rel(rel_path),
                        self.destination(rel_path).display()
                    );
                    report.copied.push(rel_path.to_string());
                }
                None => report.skipped_external.push(dependency.id.clone()),
            }
        }
    }

    /// Copies each in-module package. A failing package is recorded and the
    /// loop moves on; failures inside one package's tree are not split further.
    fn copy_packages(&self, module: &ModuleInfo, dependencies: &[Dependency], report: &mut ExtractionReport) {
        for dependency in dependencies {
            let Some(rel_path) = dependency.rel_path() else {
                if self.options.scope == DependencyScope::ModuleOnly {
                    tracing::debug!("Skipping external: {}", dependency.id);
                } else {
                    tracing::info!("Skipping external: {} (left to go mod tidy)", dependency.id);
                }
                report.skipped_external.push(dependency.id.clone());
                continue;
            };

            let src_dir = join_rel(&module.dir, rel_path);
            let dst_dir = self.destination(rel_path);
            tracing::debug!("Copying: {} -> {}", src_dir.display(), dst_dir.display());

            match copy_tree(&src_dir, &dst_dir) {
                Ok(files) => {
                    report.files_copied += files;
                    report.copied.push(rel_path.to_string());
                }
                Err(e) => {
                    tracing::error!("Error copying {}: {}", display_rel(rel_path), e);
                    report.failures.push(PackageFailure {
                        rel_path: rel_path.to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }
    }

    fn copy_module_files(&self, module: &ModuleInfo, report: &mut ExtractionReport) {
        for name in [GO_MOD, GO_SUM] {
            let src = module.dir.join(name);
            if !src.is_file() {
                continue;
            }
            match copy_file(&src, &self.options.output_dir.join(name)) {
                Ok(_) => {
                    tracing::debug!("Copied {}", name);
                    report.aux_files_copied.push(name.to_string());
                }
                Err(e) => tracing::warn!("Warning: could not copy {}: {}", name, e),
            }
        }
    }

    fn tidy(&self) -> TidyOutcome {
        let output_dir = &self.options.output_dir;
        tracing::debug!("Running go mod tidy in {}", output_dir.display());
        match self.tidier.tidy(output_dir) {
            Ok(()) => TidyOutcome::Completed,
            Err(e) => {
                tracing::debug!("go mod tidy failed in {}: {}", output_dir.display(), e);
                TidyOutcome::Failed(e.to_string())
            }
        }
    }

    fn destination(&self, rel_path: &str) -> PathBuf {
        join_rel(&self.options.output_dir, rel_path)
    }
}

fn join_rel(root: &Path, rel_path: &str) -> PathBuf {
    if rel_path.is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel_path)
    }
}

fn display_rel(rel_path: &str) -> &str {
    if rel_path.is_empty() {
        "."
    } else {
        rel_path
    }
}

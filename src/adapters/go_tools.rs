use crate::core::selector::parse_package_list;
use crate::domain::model::ModuleInfo;
use crate::domain::ports::{DependencyLister, ModuleResolver, ModuleTidier};
use crate::utils::error::{ExtractError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const GO: &str = "go";
const GODA: &str = "goda";

/// Asks the go tool for the main module of the current directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoModuleResolver;

impl ModuleResolver for GoModuleResolver {
    fn resolve(&self) -> Result<ModuleInfo> {
        let output = Command::new(GO)
            .args(["list", "-m", "-json"])
            .output()
            .map_err(|e| ExtractError::ConfigError {
                message: format!("go list -m failed: {}", e),
            })?;
        if !output.status.success() {
            return Err(ExtractError::ConfigError {
                message: format!("go list -m failed: {}", stderr_or_status(&output)),
            });
        }

        parse_module_info(&output.stdout)
    }
}

/// In workspace mode `go list -m -json` prints one object per module; the
/// first one is the module owning the working directory.
pub fn parse_module_info(stdout: &[u8]) -> Result<ModuleInfo> {
    let first = serde_json::Deserializer::from_slice(stdout)
        .into_iter::<ModuleInfo>()
        .next();

    match first {
        Some(module) => {
            let module = module?;
            if module.path.is_empty() || module.dir.as_os_str().is_empty() {
                return Err(ExtractError::ConfigError {
                    message: "go list -m reported no module path or directory".to_string(),
                });
            }
            Ok(module)
        }
        None => Err(ExtractError::ConfigError {
            message: "go list -m returned no module".to_string(),
        }),
    }
}

/// Runs `goda list <expr>` and reads the package identifiers it prints.
///
/// Without an explicit program the binary is looked up on every call.
#[derive(Debug, Clone, Default)]
pub struct GodaLister {
    program: Option<PathBuf>,
}

impl GodaLister {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }

    /// Looks on PATH first, then in `$GOPATH/bin`, defaulting GOPATH to `~/go`.
    pub fn locate() -> Result<PathBuf> {
        if let Ok(path) = which::which(GODA) {
            return Ok(path);
        }

        let gopath = std::env::var_os("GOPATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| home::home_dir().map(|home| home.join("go")))
            .unwrap_or_else(|| PathBuf::from("go"));
        let candidate = gopath.join("bin").join(GODA);

        if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(ExtractError::ExternalToolError {
                tool: GODA.to_string(),
                message: format!("goda not found in PATH or {}", candidate.display()),
            })
        }
    }
}

impl DependencyLister for GodaLister {
    fn list(&self, expression: &str) -> Result<Vec<String>> {
        let program = match &self.program {
            Some(program) => program.clone(),
            None => Self::locate()?,
        };
        tracing::debug!("Running: {} list {}", program.display(), expression);

        let output = Command::new(&program)
            .args(["list", expression])
            .output()
            .map_err(|e| ExtractError::ExternalToolError {
                tool: GODA.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ExtractError::ExternalToolError {
                tool: GODA.to_string(),
                message: stderr_or_status(&output),
            });
        }

        Ok(parse_package_list(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// `go mod tidy` with the extracted module as working directory and the
/// parent's stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoModTidy;

impl ModuleTidier for GoModTidy {
    fn tidy(&self, module_dir: &Path) -> Result<()> {
        let status = Command::new(GO)
            .args(["mod", "tidy"])
            .current_dir(module_dir)
            .status()
            .map_err(|e| ExtractError::ExternalToolError {
                tool: "go mod tidy".to_string(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExtractError::ExternalToolError {
                tool: "go mod tidy".to_string(),
                message: status.to_string(),
            })
        }
    }
}

fn stderr_or_status(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module_info() {
        let stdout = br#"{
	"Path": "github.com/openai/openai-go/v3",
	"Main": true,
	"Dir": "/home/dev/openai-go",
	"GoMod": "/home/dev/openai-go/go.mod",
	"GoVersion": "1.21"
}
"#;

        let module = parse_module_info(stdout).unwrap();
        assert_eq!(module.path, "github.com/openai/openai-go/v3");
        assert_eq!(module.dir, PathBuf::from("/home/dev/openai-go"));
    }

    #[test]
    fn test_parse_module_info_takes_first_workspace_module() {
        let stdout = br#"{"Path": "example.com/a", "Dir": "/ws/a"}
{"Path": "example.com/b", "Dir": "/ws/b"}
"#;

        let module = parse_module_info(stdout).unwrap();
        assert_eq!(module.path, "example.com/a");
    }

    #[test]
    fn test_parse_module_info_rejects_empty_output() {
        assert!(matches!(
            parse_module_info(b""),
            Err(ExtractError::ConfigError { .. })
        ));
        assert!(matches!(
            parse_module_info(b"not json"),
            Err(ExtractError::SerializationError(_))
        ));
    }

    #[test]
    fn test_missing_goda_binary_is_an_external_tool_error() {
        let lister = GodaLister::new("/nonexistent/bin/goda");
        let err = lister.list("./responses:mod").unwrap_err();
        assert!(matches!(err, ExtractError::ExternalToolError { ref tool, .. } if tool == "goda"));
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error at {}: {source}", .path.display())]
    PathIoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("{tool} failed: {message}")]
    ExternalToolError { tool: String, message: String },

    #[error("No packages found for {package}")]
    EmptyResultError { package: String },

    #[error("Module rewrite failed: {message}")]
    RewriteError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ExtractError {
    pub fn at_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::PathIoError {
            path: path.into(),
            source,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExtractError::ConfigError { message } => {
                format!("Error getting module info: {}", message)
            }
            ExtractError::ExternalToolError { tool, message } => {
                format!("Error running {}: {}", tool, message.trim())
            }
            ExtractError::RewriteError { message } => {
                format!("Error replacing module name: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExtractError::ConfigError { .. } => {
                "Make sure you're running this from a Go module directory"
            }
            ExtractError::ExternalToolError { tool, .. } if tool == "goda" => {
                "Make sure goda is installed: go install github.com/loov/goda@latest"
            }
            ExtractError::ExternalToolError { .. } => "Make sure the Go toolchain is on PATH",
            ExtractError::EmptyResultError { .. } => {
                "Check the package path, e.g. ./responses or github.com/org/module/responses"
            }
            ExtractError::InvalidConfigValueError { .. } => "Run with --help to see the expected flags",
            ExtractError::RewriteError { .. } => {
                "The output directory may be partially rewritten; remove it and run again"
            }
            ExtractError::PathIoError { .. } | ExtractError::SerializationError(_) => {
                "Check file permissions and free disk space for the output directory"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goda_error_suggests_install() {
        let err = ExtractError::ExternalToolError {
            tool: "goda".to_string(),
            message: "exit status 1\n".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Error running goda: exit status 1");
        assert!(err.recovery_suggestion().contains("go install github.com/loov/goda"));
    }

    #[test]
    fn test_path_io_error_names_the_path() {
        let err = ExtractError::at_path(
            "/tmp/out/go.mod",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.user_friendly_message();
        assert!(message.contains("/tmp/out/go.mod"));
        assert!(message.contains("denied"));
        assert!(!message.contains('\n'));
    }
}

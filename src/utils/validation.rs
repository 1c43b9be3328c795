use crate::utils::error::{ExtractError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A module path is substituted verbatim into go.mod and import strings, so it
/// must be a single non-empty token without quotes or a trailing slash.
pub fn validate_module_path(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let reason = if value.chars().any(char::is_whitespace) {
        Some("Module path cannot contain whitespace")
    } else if value.contains('"') || value.contains('`') {
        Some("Module path cannot contain quotes")
    } else if value.starts_with('/') || value.ends_with('/') {
        Some("Module path cannot start or end with '/'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ExtractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

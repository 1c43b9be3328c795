use crate::core::classifier::is_rewritable;
use crate::utils::error::{ExtractError, Result};
use regex::bytes::{NoExpand, Regex};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Replaces every occurrence of `old_module` with `new_module` in the Go
/// sources and `go.mod` files under `root_dir`, returning the number of files
/// written.
///
/// Files are handled as bytes and only written when their content changes.
/// The first read, write or walk error aborts the whole pass.
pub fn rewrite_module_references(root_dir: &Path, old_module: &str, new_module: &str) -> Result<usize> {
    if old_module.is_empty() || old_module == new_module {
        return Ok(0);
    }

    let pattern = Regex::new(&regex::escape(old_module)).map_err(|e| ExtractError::RewriteError {
        message: format!("cannot match module path {}: {}", old_module, e),
    })?;

    let mut rewritten = 0;
    for entry in WalkDir::new(root_dir) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root_dir).to_path_buf();
            ExtractError::at_path(path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        if !is_rewritable(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        let content = fs::read(path).map_err(|e| ExtractError::at_path(path, e))?;
        let updated = pattern.replace_all(&content, NoExpand(new_module.as_bytes()));
        if *updated != *content {
            fs::write(path, &*updated).map_err(|e| ExtractError::at_path(path, e))?;
            tracing::debug!("Rewrote {}", path.display());
            rewritten += 1;
        }
    }

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const OLD: &str = "github.com/openai/openai-go/v3";
    const NEW: &str = "github.com/myorg/myproject";

    #[test]
    fn test_rewrite_skips_files_without_the_module() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.go"), "package a\n").unwrap();

        assert_eq!(rewrite_module_references(temp_dir.path(), OLD, NEW).unwrap(), 0);
        assert_eq!(fs::read_to_string(temp_dir.path().join("a.go")).unwrap(), "package a\n");
    }

    #[test]
    fn test_rewrite_descends_into_every_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("internal/testdata");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("x.go"), format!("import \"{}/option\"\n", OLD)).unwrap();

        assert_eq!(rewrite_module_references(temp_dir.path(), OLD, NEW).unwrap(), 1);
        assert_eq!(
            fs::read_to_string(nested.join("x.go")).unwrap(),
            format!("import \"{}/option\"\n", NEW)
        );
    }

    #[test]
    fn test_rewrite_keeps_non_utf8_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.go");
        let mut content = vec![0xff, 0xfe, b' '];
        content.extend_from_slice(OLD.as_bytes());
        fs::write(&path, &content).unwrap();

        rewrite_module_references(temp_dir.path(), OLD, NEW).unwrap();

        let mut expected = vec![0xff, 0xfe, b' '];
        expected.extend_from_slice(NEW.as_bytes());
        assert_eq!(fs::read(&path).unwrap(), expected);
    }

    #[test]
    fn test_replacement_with_dollar_is_literal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("go.mod");
        fs::write(&path, "module example.com/a\n").unwrap();

        rewrite_module_references(temp_dir.path(), "example.com/a", "example.com/$1").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "module example.com/$1\n");
    }

    #[test]
    fn test_empty_or_identical_module_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("go.mod"), format!("module {}\n", OLD)).unwrap();

        assert_eq!(rewrite_module_references(temp_dir.path(), "", NEW).unwrap(), 0);
        assert_eq!(rewrite_module_references(temp_dir.path(), OLD, OLD).unwrap(), 0);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("go.mod")).unwrap(),
            format!("module {}\n", OLD)
        );
    }

    #[test]
    fn test_missing_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = rewrite_module_references(&temp_dir.path().join("gone"), OLD, NEW);
        assert!(result.is_err());
    }
}

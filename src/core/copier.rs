use crate::core::classifier::{should_copy_file, should_skip_directory};
use crate::utils::error::{ExtractError, Result};
use std::fs;
use std::path::Path;

/// Copies one file's bytes and permission bits, overwriting `dst`.
///
/// An existing `dst` is unlinked first, so a read-only file left by an
/// earlier copy is replaced rather than opened for writing.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    fs::metadata(src).map_err(|e| ExtractError::at_path(src, e))?;

    if let Ok(existing) = fs::symlink_metadata(dst) {
        if !existing.is_dir() {
            fs::remove_file(dst).map_err(|e| ExtractError::at_path(dst, e))?;
        }
    }

    fs::copy(src, dst).map_err(|e| ExtractError::at_path(dst, e))
}

/// Mirrors the kept subset of `source_dir` into `dest_dir` and returns how
/// many files were copied.
///
/// Any I/O failure at any depth aborts the whole copy; callers that want to
/// carry on with other trees must catch the error themselves.
pub fn copy_tree(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let permissions = fs::metadata(source_dir)
        .map_err(|e| ExtractError::at_path(source_dir, e))?
        .permissions();

    fs::create_dir_all(dest_dir).map_err(|e| ExtractError::at_path(dest_dir, e))?;
    ensure_owner_writable(dest_dir)?;

    let mut copied = 0;
    let entries = fs::read_dir(source_dir).map_err(|e| ExtractError::at_path(source_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ExtractError::at_path(source_dir, e))?;
        let src_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| ExtractError::at_path(&src_path, e))?;

        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        let dst_path = dest_dir.join(&file_name);

        if file_type.is_dir() {
            if should_skip_directory(&name) {
                tracing::trace!("Skipping directory {}", src_path.display());
                continue;
            }
            copied += copy_tree(&src_path, &dst_path)?;
        } else if should_copy_file(&name) {
            copy_file(&src_path, &dst_path)?;
            copied += 1;
        }
    }

    // Applied last so a read-only source directory can still be populated.
    fs::set_permissions(dest_dir, permissions).map_err(|e| ExtractError::at_path(dest_dir, e))?;

    Ok(copied)
}

/// A destination directory copied earlier may carry read-only bits from its
/// source; it has to accept new entries before they are re-applied.
#[cfg(unix)]
fn ensure_owner_writable(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(dir)
        .map_err(|e| ExtractError::at_path(dir, e))?
        .permissions();
    let mode = permissions.mode();
    if mode & 0o200 == 0 {
        permissions.set_mode(mode | 0o200);
        fs::set_permissions(dir, permissions).map_err(|e| ExtractError::at_path(dir, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_owner_writable(_dir: &Path) -> Result<()> {
    Ok(())
}

use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum graph snapshot size (64 MB). Install trees with tens of thousands
/// of nodes stay well below this.
pub const MAX_GRAPH_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Validates that a path exists and is a regular file, not a directory or symlink
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns [`SbomError::SecurityError`] for symlinks and
/// [`SbomError::FileReadError`] for missing paths or non-files.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SbomError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Pass the real file path instead of a symlink".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SbomError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(SbomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the graph snapshot or check that the right file was passed".to_string(),
        }
        .into());
    }
    Ok(())
}

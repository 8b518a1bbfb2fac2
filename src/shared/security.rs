use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a scope index or version object file (100 MB)
/// Prevents DoS via excessively large files
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum length of an object reference
const MAX_REF_LENGTH: usize = 128;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` instead of `metadata()` so the link itself is
/// inspected rather than its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Reads a file after checking it is a regular file within the size limit
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description of the file (e.g., "scope.toml") for error messages
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata can't be read
/// - The path is a symbolic link or not a regular file
/// - The file exceeds [`MAX_FILE_SIZE`]
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates that an object reference is safe to use as a file name
///
/// # Security
/// Object references come from the scope index and are joined onto the
/// objects directory, so path separators and `..` are rejected.
pub fn validate_object_ref(reference: &str) -> Result<()> {
    if reference.is_empty() {
        anyhow::bail!("Object reference cannot be empty");
    }

    if reference.len() > MAX_REF_LENGTH {
        anyhow::bail!(
            "Object reference is too long ({} bytes). Maximum allowed: {} bytes",
            reference.len(),
            MAX_REF_LENGTH
        );
    }

    if reference.contains('/') || reference.contains('\\') {
        anyhow::bail!(
            "Security: object reference '{}' contains path separators which are not allowed",
            reference
        );
    }

    if reference.contains("..") {
        anyhow::bail!(
            "Security: object reference '{}' contains '..' which is not allowed",
            reference
        );
    }

    Ok(())
}

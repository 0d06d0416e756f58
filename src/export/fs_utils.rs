// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// An existing output file is only replaced when `force` is set.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "'{}' is a directory",
            path.display()
        )));
    }
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "'{}' already exists; use --force to overwrite",
            path.display()
        )));
    }
    Ok(())
}

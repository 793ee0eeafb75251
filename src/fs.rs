//! File system lookups shared by the checks and the config loader

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{BrandingError, BrandingResult};

/// Whether `path` is an existing regular file (symlinks followed).
///
/// Absence is not an error. Anything else the OS reports (permission
/// denied, symlink loops) is.
pub fn is_regular_file(path: &Path) -> BrandingResult<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::NotFound | ErrorKind::NotADirectory | ErrorKind::InvalidInput
            ) =>
        {
            Ok(false)
        }
        Err(e) => Err(BrandingError::io(path, e)),
    }
}

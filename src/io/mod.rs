/*!
# IO utilities

Singleton store serialization and shared filesystem helpers.
!*/
pub mod singletons;

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Create a directory (and its parents) if absent.
///
/// Idempotent: an already existing target is not an error.
pub fn ensure_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path)?;
    Ok(())
}

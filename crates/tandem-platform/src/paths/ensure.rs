use std::fs;

use tandem_common::PlatformError;
use tracing::debug;

use super::resolve::{config_dir, crash_report_dir, data_dir, partitions_dir};

/// Creates all Tandem directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, partitions_dir()?, crash_report_dir()?] {
        fs::create_dir_all(&dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
        })?;
        debug!(path = %dir.display(), "directory ready");
    }
    Ok(())
}

use std::path::PathBuf;

use tandem_common::PlatformError;

pub(super) const APP_NAME: &str = "tandem";

/// Name of the session registry file inside `data_dir()`.
const STATE_FILE_NAME: &str = "sessions.json";

/// Returns the platform-specific configuration directory for Tandem.
///
/// - macOS: `~/Library/Application Support/tandem`
/// - Linux: `$XDG_CONFIG_HOME/tandem` (defaults to `~/.config/tandem`)
/// - Windows: `%APPDATA%\tandem`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Tandem.
///
/// - macOS: `~/Library/Application Support/tandem`
/// - Linux: `$XDG_DATA_HOME/tandem` (defaults to `~/.local/share/tandem`)
/// - Windows: `%APPDATA%\tandem`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Path of the persisted session registry, `data_dir()/sessions.json`.
pub fn state_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join(STATE_FILE_NAME))
}

/// Parent directory of all per-session storage partitions.
pub fn partitions_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("partitions"))
}

/// Returns the path to the log directory, `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Returns the path to the crash report directory, `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}

use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use crate::paths::crash_report_dir;

/// Writes a crash report to disk when a panic occurs.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside a panic hook, so every error is swallowed.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let dir = crash_report_dir().ok()?;

    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    let location = info
        .location()
        .map(|loc| (loc.file().to_string(), loc.line(), loc.column()));
    let backtrace = Backtrace::force_capture().to_string();

    let report = build_report(&message, location, &backtrace);
    write_report_to(&dir, &report)
}

/// Assemble the JSON body of a crash report.
pub fn build_report(
    message: &str,
    location: Option<(String, u32, u32)>,
    backtrace: &str,
) -> serde_json::Value {
    let location = location.map(|(file, line, column)| {
        serde_json::json!({
            "file": file,
            "line": line,
            "column": column,
        })
    });

    serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": message,
        "location": location,
        "backtrace": backtrace,
    })
}

fn write_report_to(dir: &Path, report: &serde_json::Value) -> Option<PathBuf> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let path = dir.join(format!("crash_{timestamp}.json"));

    let _ = std::fs::create_dir_all(dir);
    std::fs::write(&path, serde_json::to_string_pretty(report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}

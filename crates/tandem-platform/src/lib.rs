//! Platform integration: per-user directories and crash reports.

pub mod crash_report;
pub mod paths;

mod report;

pub use report::{build_report, write_crash_report};

mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, crash_report_dir, data_dir, log_dir, partitions_dir, state_file};

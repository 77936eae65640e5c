mod backup;
mod logs;
mod normalize;

pub use backup::backup_original;
pub use logs::{AlignmentLogs, LOGGING_DIR};
pub use normalize::normalize_target_path;

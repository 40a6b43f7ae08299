//! Run-log naming derived from wall-clock time.
//!
//! Names have minute granularity: two runs started within the same minute map
//! to the same run-log file name.

use chrono::NaiveDateTime;

/// `yyMMdd_HHmm` in chrono's strftime syntax.
pub const TIMESTAMP_FORMAT: &str = "%y%m%d_%H%M";

/// Format `now` as `yyMMdd_HHmm` (two-digit year, 24h clock).
pub fn run_timestamp(now: &NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// File name of the run log for `timestamp`.
pub fn run_log_file_name(timestamp: &str) -> String {
    format!("run_{timestamp}.log")
}

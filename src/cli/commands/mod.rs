pub mod check;
pub mod compute;
pub mod config;
pub mod export;
pub mod init;

use crate::errors::AppResult;
use crate::models::Attendance;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Load an attendance record from a file, or from stdin for `None` / `-`.
pub(crate) fn read_attendance(input: Option<&Path>) -> AppResult<Attendance> {
    match input {
        Some(p) if p != Path::new("-") => {
            tracing::debug!(path = %p.display(), "reading attendance");
            let file = File::open(p)?;
            Attendance::from_reader(BufReader::new(file))
        }
        _ => {
            tracing::debug!("reading attendance from stdin");
            Attendance::from_reader(io::stdin().lock())
        }
    }
}

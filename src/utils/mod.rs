pub mod table;
pub mod time;

pub use time::{format_timestamp, format_timestamp_lossy, secs2readable};

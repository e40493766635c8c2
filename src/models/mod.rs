pub mod attendance;
pub mod event;
pub mod interval;
pub mod report;
pub mod role;

pub use attendance::Attendance;
pub use event::{Delta, Event};
pub use interval::{Interval, Timestamp};
pub use report::{OverlapReport, RolePresence};
pub use role::Role;

use super::interval::{Interval, Timestamp};
use super::role::Role;
use serde::Serialize;

/// How long a single role was present, after merging its own overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RolePresence {
    pub role: Role,
    pub intervals: usize,
    pub present: u64,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
}

/// Full result of one calculation: the headline total plus what it is made of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverlapReport {
    pub total: u64,
    pub segments: Vec<Interval>,
    pub presence: Vec<RolePresence>,
}

impl OverlapReport {
    pub fn presence_of(&self, role: Role) -> Option<&RolePresence> {
        self.presence.iter().find(|p| p.role == role)
    }
}

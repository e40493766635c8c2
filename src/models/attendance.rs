//! Validated input of the calculator: raw timestamp lists keyed by role.

use super::interval::Timestamp;
use super::role::Role;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::io::Read;

/// Flat `[start, end, start, end, ...]` timestamp lists for each role.
///
/// A role that was never set behaves like an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attendance {
    raw: [Vec<Timestamp>; Role::REQUIRED],
}

impl Attendance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, role: Role, timestamps: Vec<Timestamp>) -> Self {
        self.set(role, timestamps);
        self
    }

    pub fn set(&mut self, role: Role, timestamps: Vec<Timestamp>) {
        self.raw[role.index()] = timestamps;
    }

    pub fn get(&self, role: Role) -> &[Timestamp] {
        &self.raw[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &[Timestamp])> + '_ {
        Role::ALL.iter().map(move |r| (*r, self.get(*r)))
    }

    pub fn is_empty(&self) -> bool {
        self.raw.iter().all(Vec::is_empty)
    }

    /// Validate a loosely typed mapping coming from outside the crate.
    ///
    /// Keys must name one of the known roles (case-insensitive), each at
    /// most once. Missing roles are left empty. Pair validity is checked
    /// later by the normalizer.
    pub fn from_raw<K: AsRef<str>>(map: BTreeMap<K, Vec<Timestamp>>) -> AppResult<Self> {
        let mut attendance = Self::new();
        let mut seen = [false; Role::REQUIRED];
        for (key, timestamps) in map {
            let role: Role = key.as_ref().parse()?;
            if std::mem::replace(&mut seen[role.index()], true) {
                return Err(AppError::DuplicateRole(role));
            }
            attendance.set(role, timestamps);
        }
        Ok(attendance)
    }

    /// Parse a JSON object such as `{"lesson": [0, 100], "pupil": [10, 90]}`.
    ///
    /// Negative or fractional timestamps are rejected by the deserializer.
    pub fn from_json(s: &str) -> AppResult<Self> {
        let map: BTreeMap<String, Vec<Timestamp>> = serde_json::from_str(s)?;
        Self::from_raw(map)
    }

    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let map: BTreeMap<String, Vec<Timestamp>> = serde_json::from_reader(reader)?;
        Self::from_raw(map)
    }
}

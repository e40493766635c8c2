use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Participant whose presence is required for a slot to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Lesson,
    Pupil,
    Tutor,
}

impl Role {
    /// All roles, in the order they are reported.
    pub const ALL: [Role; 3] = [Role::Lesson, Role::Pupil, Role::Tutor];

    /// Number of roles that must be present at the same time.
    pub const REQUIRED: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Lesson => "lesson",
            Role::Pupil => "pupil",
            Role::Tutor => "tutor",
        }
    }

    /// Position of the role inside `Role::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Role::Lesson => 0,
            Role::Pupil => 1,
            Role::Tutor => 2,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lesson" => Ok(Role::Lesson),
            "pupil" => Ok(Role::Pupil),
            "tutor" => Ok(Role::Tutor),
            _ => Err(AppError::UnknownRole(s.to_string())),
        }
    }
}

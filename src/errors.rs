//! Unified application error type.
//! Every module (models, core, cli, export) returns AppError so that the
//! binary has a single place where failures are reported.

use crate::models::role::Role;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input parsing / validation
    // ---------------------------
    #[error("Invalid attendance JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown role '{0}' (expected one of: lesson, pupil, tutor)")]
    UnknownRole(String),

    #[error("Role '{0}' is given more than once")]
    DuplicateRole(Role),

    #[error("Timestamp list for role '{role}' has odd length {len}: timestamps must come in start/end pairs")]
    MalformedInputLength { role: Role, len: usize },

    #[error("Timestamp {0} cannot be represented as a date")]
    InvalidTimestamp(u64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Self-check
    // ---------------------------
    #[error("{failed} of {total} reference cases failed")]
    CheckFailed { failed: usize, total: usize },
}

pub type AppResult<T> = Result<T, AppError>;

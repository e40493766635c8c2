//! Turns a role's flat timestamp list into clean, disjoint presence intervals.

use crate::errors::{AppError, AppResult};
use crate::models::{Interval, Role, Timestamp};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Handling of a timestamp list whose length is not a multiple of two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OddLengthPolicy {
    /// Fail with `AppError::MalformedInputLength`.
    #[default]
    Reject,
    /// Drop the trailing unpaired timestamp.
    Truncate,
}

/// Read `raw` as consecutive `(start, end)` pairs, in input order.
///
/// Pairs with `start >= end` are discarded silently (debug log only).
pub fn pair_up(role: Role, raw: &[Timestamp], policy: OddLengthPolicy) -> AppResult<Vec<Interval>> {
    let usable = if raw.len() % 2 == 0 {
        raw
    } else {
        match policy {
            OddLengthPolicy::Reject => {
                return Err(AppError::MalformedInputLength {
                    role,
                    len: raw.len(),
                });
            }
            OddLengthPolicy::Truncate => {
                tracing::warn!(
                    %role,
                    len = raw.len(),
                    dropped = raw[raw.len() - 1],
                    "odd timestamp list, trailing element ignored"
                );
                &raw[..raw.len() - 1]
            }
        }
    };

    let mut intervals = Vec::with_capacity(usable.len() / 2);
    for (i, pair) in usable.chunks_exact(2).enumerate() {
        match Interval::new(pair[0], pair[1]) {
            Some(iv) => intervals.push(iv),
            None => tracing::debug!(
                %role,
                pair = i,
                start = pair[0],
                end = pair[1],
                "discarding empty or reversed interval"
            ),
        }
    }
    Ok(intervals)
}

/// Sort and merge overlapping or touching intervals of the same role.
///
/// After this step a role contributes at most one active interval at any
/// instant, so a concurrency count of `Role::REQUIRED` really means every
/// role is present.
pub fn coalesce(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        if let Some(last) = merged.last_mut()
            && iv.start() <= last.end()
        {
            last.absorb(&iv);
            continue;
        }
        merged.push(iv);
    }
    merged
}

/// `pair_up` followed by `coalesce`.
pub fn normalize(role: Role, raw: &[Timestamp], policy: OddLengthPolicy) -> AppResult<Vec<Interval>> {
    let paired = pair_up(role, raw, policy)?;
    let before = paired.len();
    let merged = coalesce(paired);
    if merged.len() != before {
        tracing::debug!(%role, before, after = merged.len(), "merged self-overlapping intervals");
    }
    Ok(merged)
}
